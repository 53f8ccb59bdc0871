//! Core storage: trail field buffers, vector math, RNG streams, access macros.

// Macros must be declared before the modules that use them.
#[macro_use]
pub mod utils;
pub mod field;
pub mod random;
pub mod vec2;

pub use field::{DepositBuffer, FieldBuffers, TrailField, CHANNELS, DEPOSIT_SCALE, SATURATION};
pub use vec2::Vec2;
