//! Frame Orchestrator - sequences the two passes once per tick.
//!
//! Phases:
//! - `Idle`       - constructed, nothing ticked yet
//! - `Stepping`   - steering then diffusion, then the generation swap
//! - `Presenting` - `current` holds the freshest generation for the renderer
//!
//! A paused tick goes straight to `Presenting` with agents and trail untouched.
//!
//! Implementation is split across `#[path]` submodules; this file only holds
//! the state and forwards.

use std::sync::Arc;

use crate::core::field::{DepositBuffer, FieldBuffers, Rgb, TrailField};
use crate::core::vec2::Vec2;
use crate::domain::agent::AgentStore;
use crate::domain::config::{FieldLayout, SimConfig, SimParams, SpeciesAffinity};
use crate::domain::error::SimError;
use crate::domain::species::SpeciesPalette;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::SlimeWorld;
pub use perf_stats::PerfStats;
pub use render_extract::pack_abgr;

use perf_timer::PerfTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramePhase {
    Idle,
    Stepping,
    Presenting,
}

/// Which buffer the renderer should show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailView {
    /// Current generation: accumulated, diffused history
    Accumulated,
    /// Raw deposits of the last simulated tick
    Instant,
}

/// The simulation
pub struct SimulationCore {
    layout: FieldLayout,
    params: SimParams,
    palette: Arc<SpeciesPalette>,
    agents: AgentStore,
    buffers: FieldBuffers,

    // State
    phase: FramePhase,
    frame: u64,
    presented: u64,

    // Render hand-off
    pixels: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Validate, allocate every buffer and seed the agents.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        init::create_simulation_core(&config)
    }

    pub fn width(&self) -> u32 { self.layout.width }

    pub fn height(&self) -> u32 { self.layout.height }

    pub fn agent_count(&self) -> u32 { self.layout.agent_count }

    pub fn layout(&self) -> FieldLayout { self.layout }

    pub fn phase(&self) -> FramePhase { self.phase }

    /// Ticks that actually advanced the simulation
    pub fn frame(&self) -> u64 { self.frame }

    /// All ticks, paused ones included
    pub fn presented(&self) -> u64 { self.presented }

    /// Advance one tick.
    pub fn step(&mut self) -> FramePhase {
        step::step(self)
    }

    /// Same as [`SimulationCore::step`].
    pub fn tick(&mut self) -> FramePhase {
        self.step()
    }

    // === Read-only hand-off ===

    /// Current trail generation
    pub fn trail(&self) -> &TrailField {
        &self.buffers.current
    }

    /// Deposits of the last simulated tick
    pub fn deposits(&self) -> &DepositBuffer {
        &self.buffers.deposits
    }

    pub fn view(&self) -> TrailView {
        if self.params.show_trails {
            TrailView::Accumulated
        } else {
            TrailView::Instant
        }
    }

    /// Number of generation swaps so far
    pub fn generation(&self) -> u64 {
        self.buffers.generation()
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn palette(&self) -> Arc<SpeciesPalette> {
        Arc::clone(&self.palette)
    }

    pub fn params(&self) -> SimParams {
        self.params
    }

    pub fn config(&self) -> SimConfig {
        SimConfig::from_parts(&self.layout, &self.params, &self.palette)
    }

    // === Between-tick mutation ===

    /// Paint or seed the current generation directly.
    pub fn trail_mut(&mut self) -> &mut TrailField {
        &mut self.buffers.current
    }

    /// Place one agent. The position must lie inside the field.
    pub fn set_agent_pose(&mut self, index: usize, position: Vec2, heading: f32) -> Result<(), SimError> {
        settings::set_agent_pose(self, index, position, heading)
    }

    pub fn set_sensor_distance(&mut self, v: f32) -> Result<(), SimError> {
        settings::set_sensor_distance(self, v)
    }

    pub fn set_sensor_angle(&mut self, v: f32) -> Result<(), SimError> {
        settings::set_sensor_angle(self, v)
    }

    pub fn set_max_turn(&mut self, v: f32) -> Result<(), SimError> {
        settings::set_max_turn(self, v)
    }

    pub fn set_speed(&mut self, v: f32) -> Result<(), SimError> {
        settings::set_speed(self, v)
    }

    pub fn set_reduce_amount(&mut self, v: f32) -> Result<(), SimError> {
        settings::set_reduce_amount(self, v)
    }

    pub fn set_diffusion_amount(&mut self, v: f32) -> Result<(), SimError> {
        settings::set_diffusion_amount(self, v)
    }

    pub fn set_draw_strength(&mut self, v: f32) -> Result<(), SimError> {
        settings::set_draw_strength(self, v)
    }

    pub fn set_kernel_radius(&mut self, v: u32) -> Result<(), SimError> {
        settings::set_kernel_radius(self, v)
    }

    /// Takes effect at the next tick boundary.
    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn set_show_trails(&mut self, show: bool) {
        settings::set_show_trails(self, show);
    }

    pub fn set_species_affinity(&mut self, affinity: SpeciesAffinity) {
        settings::set_species_affinity(self, affinity);
    }

    pub fn set_species_color(&mut self, index: usize, color: Rgb) -> Result<(), SimError> {
        settings::set_species_color(self, index, color)
    }

    /// Replace every tunable at once. All-or-nothing; frozen fields must match.
    pub fn apply_config(&mut self, config: &SimConfig) -> Result<(), SimError> {
        settings::apply_config(self, config)
    }

    /// Apply a partial camelCase JSON update on top of the running config.
    pub fn apply_config_json(&mut self, json: &str) -> Result<(), SimError> {
        settings::apply_config_json(self, json)
    }

    /// Always `Frozen` unless the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SimError> {
        settings::resize(self, width, height)
    }

    /// Always `Frozen` unless the count is unchanged.
    pub fn set_agent_count(&mut self, count: u32) -> Result<(), SimError> {
        settings::set_agent_count(self, count)
    }

    // === Perf ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === Render ===

    /// Pack the selected view into ABGR pixels, one per cell.
    pub fn compose_pixels(&mut self) -> &[u32] {
        render_extract::compose_pixels(self)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
