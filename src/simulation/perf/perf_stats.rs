use wasm_bindgen::prelude::*;

/// Per-tick metrics, filled only while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) clear_ms: f64,
    pub(super) steer_ms: f64,
    pub(super) diffuse_ms: f64,
    pub(super) agents_processed: u32,
    pub(super) cells_processed: u32,
    pub(super) wobbles: u32,
    pub(super) reflections: u32,
    pub(super) saturated_cells: u32,
    pub(super) total_intensity: f64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn clear_ms(&self) -> f64 { self.clear_ms }
    #[wasm_bindgen(getter)]
    pub fn steer_ms(&self) -> f64 { self.steer_ms }
    #[wasm_bindgen(getter)]
    pub fn diffuse_ms(&self) -> f64 { self.diffuse_ms }
    #[wasm_bindgen(getter)]
    pub fn agents_processed(&self) -> u32 { self.agents_processed }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn wobbles(&self) -> u32 { self.wobbles }
    #[wasm_bindgen(getter)]
    pub fn reflections(&self) -> u32 { self.reflections }
    #[wasm_bindgen(getter)]
    pub fn saturated_cells(&self) -> u32 { self.saturated_cells }
    #[wasm_bindgen(getter)]
    pub fn total_intensity(&self) -> f64 { self.total_intensity }
}
