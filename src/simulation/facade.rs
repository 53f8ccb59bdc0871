use wasm_bindgen::prelude::*;

use crate::domain::config::{SimConfig, SpeciesAffinity};
use crate::domain::error::SimError;

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js(err: SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct SlimeWorld {
    core: SimulationCore,
}

#[wasm_bindgen]
impl SlimeWorld {
    /// New simulation with default tunables
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, agent_count: u32) -> Result<SlimeWorld, JsValue> {
        let core = SimulationCore::new(SimConfig::new(width, height, agent_count)).map_err(to_js)?;
        Ok(Self { core })
    }

    /// New simulation from a camelCase JSON config; missing fields take defaults
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<SlimeWorld, JsValue> {
        let config = SimConfig::from_json(json).map_err(to_js)?;
        let core = SimulationCore::new(config).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn agent_count(&self) -> u32 { self.core.agent_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.params().paused }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    // === Parameters (between ticks) ===

    pub fn set_sensor_distance(&mut self, v: f32) -> Result<(), JsValue> {
        self.core.set_sensor_distance(v).map_err(to_js)
    }

    pub fn set_sensor_angle(&mut self, v: f32) -> Result<(), JsValue> {
        self.core.set_sensor_angle(v).map_err(to_js)
    }

    pub fn set_max_turn(&mut self, v: f32) -> Result<(), JsValue> {
        self.core.set_max_turn(v).map_err(to_js)
    }

    pub fn set_speed(&mut self, v: f32) -> Result<(), JsValue> {
        self.core.set_speed(v).map_err(to_js)
    }

    pub fn set_reduce_amount(&mut self, v: f32) -> Result<(), JsValue> {
        self.core.set_reduce_amount(v).map_err(to_js)
    }

    pub fn set_diffusion_amount(&mut self, v: f32) -> Result<(), JsValue> {
        self.core.set_diffusion_amount(v).map_err(to_js)
    }

    pub fn set_draw_strength(&mut self, v: f32) -> Result<(), JsValue> {
        self.core.set_draw_strength(v).map_err(to_js)
    }

    pub fn set_kernel_radius(&mut self, v: u32) -> Result<(), JsValue> {
        self.core.set_kernel_radius(v).map_err(to_js)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    pub fn set_show_trails(&mut self, show: bool) {
        self.core.set_show_trails(show);
    }

    /// `"attractOwn"`, `"ownOnly"` or `"indifferent"`
    pub fn set_species_affinity(&mut self, name: &str) -> Result<(), JsValue> {
        let affinity = SpeciesAffinity::from_name(name).map_err(to_js)?;
        self.core.set_species_affinity(affinity);
        Ok(())
    }

    pub fn set_species_color(&mut self, index: usize, r: f32, g: f32, b: f32) -> Result<(), JsValue> {
        self.core.set_species_color(index, [r, g, b]).map_err(to_js)
    }

    /// Update tunables from a partial JSON object; absent fields are kept.
    /// Frozen fields, if present, must be unchanged.
    pub fn apply_config_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.apply_config_json(json).map_err(to_js)
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config().to_json().map_err(to_js)
    }

    // === Render ===

    /// Refresh the pixel buffer from the selected view; returns its length
    pub fn compose_pixels(&mut self) -> usize {
        self.core.compose_pixels().len()
    }

    /// Pointer to the packed ABGR pixel buffer (for JS rendering)
    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels().as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels().len()
    }

    // === Perf ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
