use std::sync::Arc;

use log::trace;

use crate::systems::{diffuse, steer_agents, SteerContext};

use super::perf_timer::timed;
use super::{FramePhase, PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore) -> FramePhase {
    // Tick-start snapshot; the passes only see these copies.
    let params = sim.params;
    let palette = Arc::clone(&sim.palette);

    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    sim.presented += 1;
    if params.paused {
        sim.phase = FramePhase::Presenting;
        if let Some(t0) = step_start {
            sim.perf_stats.step_ms = t0.elapsed_ms();
        }
        return sim.phase;
    }

    sim.phase = FramePhase::Stepping;

    // Fresh write target for this tick's deposits
    timed(perf_on, &mut sim.perf_stats.clear_ms, || sim.buffers.prepare_write());

    let (current, deposits, next) = sim.buffers.split();
    let ctx = SteerContext {
        field: current,
        deposits,
        params,
        palette: &palette,
        seed: sim.layout.seed,
        tick: sim.frame,
    };

    // Barrier: every deposit lands before diffusion reads the buffer.
    let steered = timed(perf_on, &mut sim.perf_stats.steer_ms, || {
        steer_agents(sim.agents.as_mut_slice(), &ctx)
    });
    let diffused = timed(perf_on, &mut sim.perf_stats.diffuse_ms, || {
        diffuse(current, deposits, next, &params)
    });

    sim.buffers.swap();
    sim.frame += 1;
    sim.phase = FramePhase::Presenting;

    if let Some(t0) = step_start {
        let stats = &mut sim.perf_stats;
        stats.agents_processed = steered.agents;
        stats.wobbles = steered.wobbles;
        stats.reflections = steered.reflections;
        stats.cells_processed = diffused.cells;
        stats.saturated_cells = sim.buffers.current.saturated_cells();
        stats.total_intensity = sim.buffers.current.total_intensity();
        stats.step_ms = t0.elapsed_ms();
        trace!(
            "tick {}: steer {:.3}ms, diffuse {:.3}ms, {} wobbles, {} reflections",
            sim.frame,
            stats.steer_ms,
            stats.diffuse_ms,
            stats.wobbles,
            stats.reflections
        );
    }

    sim.phase
}
