pub mod agent;
pub mod config;
pub mod error;
pub mod species;

pub use agent::{Agent, AgentStore};
pub use config::{FieldLayout, SimConfig, SimParams, SpeciesAffinity};
pub use error::SimError;
pub use species::{SpeciesId, SpeciesPalette, MAX_SPECIES};
