use std::sync::Arc;

use log::info;

use crate::core::field::FieldBuffers;
use crate::core::utils::alloc::try_filled;
use crate::domain::config::SimConfig;
use crate::domain::error::SimError;
use crate::systems::seed_agents;

use super::perf_stats::PerfStats;
use super::render_extract::OPAQUE_BLACK;
use super::{FramePhase, SimulationCore};

pub(super) fn create_simulation_core(config: &SimConfig) -> Result<SimulationCore, SimError> {
    let (layout, params, palette) = config.split()?;

    let buffers = FieldBuffers::new(layout.width, layout.height)?;
    let size = buffers.current.size();
    let agents = seed_agents(&layout, &palette)?;
    let pixels = try_filled("pixel buffer", size, OPAQUE_BLACK)?;

    info!(
        "slime simulation initialized: {}x{} field, {} agents, {} species",
        layout.width,
        layout.height,
        layout.agent_count,
        palette.len()
    );

    Ok(SimulationCore {
        layout,
        params,
        palette: Arc::new(palette),
        agents,
        buffers,
        phase: FramePhase::Idle,
        frame: 0,
        presented: 0,
        pixels,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
