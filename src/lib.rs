//! Slime Engine - stigmergic agent simulation in WASM
//!
//! Agents sense a shared trail field, steer, move and deposit; the field then
//! diffuses and decays. Both passes are data-parallel (rayon under `parallel`).
//!
//! Architecture:
//! - core/       - field storage, random streams, safety macros
//! - domain/     - agents, species, configuration, errors
//! - systems/    - seeding, steering and diffusion passes
//! - simulation/ - frame orchestration and the WASM facade

// Safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let level = if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    crate::core::utils::console_logger::init_console_logger(level);

    web_sys::console::log_1(&"Slime WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::field::{DepositBuffer, TrailField, SATURATION};
pub use crate::core::vec2::Vec2;
pub use domain::{Agent, AgentStore, SimConfig, SimError, SimParams, SpeciesAffinity, SpeciesPalette};
pub use simulation::{FramePhase, PerfStats, SimulationCore, SlimeWorld, TrailView};
