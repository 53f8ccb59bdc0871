use std::sync::Arc;

use log::{debug, warn};

use crate::core::field::Rgb;
use crate::core::vec2::Vec2;
use crate::domain::config::{
    check_angle, check_kernel_radius, check_sensor_distance, check_speed, check_unit, SimConfig,
    SpeciesAffinity,
};
use crate::domain::error::SimError;

use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

/// Log and pass through a rejected update; the old value stays in force.
fn rejected(err: SimError) -> SimError {
    warn!("rejected configuration update: {}", err);
    err
}

pub(super) fn set_sensor_distance(sim: &mut SimulationCore, v: f32) -> Result<(), SimError> {
    check_sensor_distance(v).map_err(rejected)?;
    sim.params.sensor_distance = v;
    debug!("sensorDistance = {}", v);
    Ok(())
}

pub(super) fn set_sensor_angle(sim: &mut SimulationCore, v: f32) -> Result<(), SimError> {
    check_angle("sensorAngle", v).map_err(rejected)?;
    sim.params.sensor_angle = v;
    debug!("sensorAngle = {}", v);
    Ok(())
}

pub(super) fn set_max_turn(sim: &mut SimulationCore, v: f32) -> Result<(), SimError> {
    check_angle("maxTurn", v).map_err(rejected)?;
    sim.params.max_turn = v;
    debug!("maxTurn = {}", v);
    Ok(())
}

pub(super) fn set_speed(sim: &mut SimulationCore, v: f32) -> Result<(), SimError> {
    check_speed(v).map_err(rejected)?;
    sim.params.speed = v;
    debug!("speed = {}", v);
    Ok(())
}

pub(super) fn set_reduce_amount(sim: &mut SimulationCore, v: f32) -> Result<(), SimError> {
    check_unit("reduceAmount", v).map_err(rejected)?;
    sim.params.reduce_amount = v;
    debug!("reduceAmount = {}", v);
    Ok(())
}

pub(super) fn set_diffusion_amount(sim: &mut SimulationCore, v: f32) -> Result<(), SimError> {
    check_unit("diffusionAmount", v).map_err(rejected)?;
    sim.params.diffusion_amount = v;
    debug!("diffusionAmount = {}", v);
    Ok(())
}

pub(super) fn set_draw_strength(sim: &mut SimulationCore, v: f32) -> Result<(), SimError> {
    check_unit("drawStrength", v).map_err(rejected)?;
    sim.params.draw_strength = v;
    debug!("drawStrength = {}", v);
    Ok(())
}

pub(super) fn set_kernel_radius(sim: &mut SimulationCore, v: u32) -> Result<(), SimError> {
    check_kernel_radius(v).map_err(rejected)?;
    sim.params.kernel_radius = v;
    debug!("kernelRadius = {}", v);
    Ok(())
}

pub(super) fn set_paused(sim: &mut SimulationCore, paused: bool) {
    if sim.params.paused != paused {
        debug!("{} at frame {}", if paused { "paused" } else { "resumed" }, sim.frame);
    }
    sim.params.paused = paused;
}

pub(super) fn set_show_trails(sim: &mut SimulationCore, show: bool) {
    sim.params.show_trails = show;
}

pub(super) fn set_species_affinity(sim: &mut SimulationCore, affinity: SpeciesAffinity) {
    sim.params.species_affinity = affinity;
    debug!("speciesAffinity = {:?}", affinity);
}

/// Copy-on-write: a renderer still holding the old `Arc` keeps its snapshot.
pub(super) fn set_species_color(sim: &mut SimulationCore, index: usize, color: Rgb) -> Result<(), SimError> {
    Arc::make_mut(&mut sim.palette)
        .set_color(index, color)
        .map_err(rejected)?;
    debug!("species {} colour = {:?}", index, color);
    Ok(())
}

pub(super) fn apply_config(sim: &mut SimulationCore, config: &SimConfig) -> Result<(), SimError> {
    ensure_unchanged("width", sim.layout.width as u64, config.width as u64).map_err(rejected)?;
    ensure_unchanged("height", sim.layout.height as u64, config.height as u64).map_err(rejected)?;
    ensure_unchanged("agent count", sim.layout.agent_count as u64, config.agent_count as u64)
        .map_err(rejected)?;
    ensure_unchanged("seed", sim.layout.seed, config.seed).map_err(rejected)?;
    ensure_unchanged(
        "species count",
        sim.layout.species_count as u64,
        config.species.len() as u64,
    )
    .map_err(rejected)?;

    let (_, params, palette) = config.split().map_err(rejected)?;
    if params.paused != sim.params.paused {
        set_paused(sim, params.paused);
    }
    sim.params = params;
    if *sim.palette != palette {
        sim.palette = Arc::new(palette);
    }
    debug!("configuration replaced at frame {}", sim.frame);
    Ok(())
}

pub(super) fn apply_config_json(sim: &mut SimulationCore, json: &str) -> Result<(), SimError> {
    let config = sim.config().merged_with_json(json).map_err(rejected)?;
    apply_config(sim, &config)
}

pub(super) fn resize(sim: &mut SimulationCore, width: u32, height: u32) -> Result<(), SimError> {
    ensure_unchanged("width", sim.layout.width as u64, width as u64).map_err(rejected)?;
    ensure_unchanged("height", sim.layout.height as u64, height as u64).map_err(rejected)
}

pub(super) fn set_agent_count(sim: &mut SimulationCore, count: u32) -> Result<(), SimError> {
    ensure_unchanged("agent count", sim.layout.agent_count as u64, count as u64).map_err(rejected)
}

pub(super) fn set_agent_pose(
    sim: &mut SimulationCore,
    index: usize,
    position: Vec2,
    heading: f32,
) -> Result<(), SimError> {
    if !sim.buffers.current.contains(position) {
        let value = if sim.buffers.current.contains(Vec2::new(position.x, 0.0)) {
            position.y
        } else {
            position.x
        };
        return Err(SimError::InvalidParameter {
            name: "agent position",
            expected: "inside [0, width) x [0, height)",
            value: value as f64,
        });
    }
    if !heading.is_finite() {
        return Err(SimError::InvalidParameter {
            name: "agent heading",
            expected: "finite",
            value: heading as f64,
        });
    }
    sim.agents.set_pose(index, position, heading)
}

fn ensure_unchanged(what: &'static str, current: u64, requested: u64) -> Result<(), SimError> {
    if current == requested {
        Ok(())
    } else {
        Err(SimError::Frozen { what, current, requested })
    }
}
