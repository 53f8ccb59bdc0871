//! Systems - the per-tick passes and start-up seeding
//!
//! - seeding    - rejection-sampled circular start layout
//! - steering   - sense / turn / move / deposit, parallel over agents
//! - diffusion  - blur + decay + saturate, parallel over rows

pub mod diffusion;
pub mod seeding;
pub mod steering;

pub use diffusion::{diffuse, DiffuseCounters};
pub use seeding::seed_agents;
pub use steering::{steer_agents, SteerContext, SteerCounters};
