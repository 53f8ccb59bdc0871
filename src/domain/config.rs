//! Simulation configuration.
//!
//! `SimConfig` is the serialisable form (camelCase JSON, every field optional).
//! At initialization it splits into:
//! - `FieldLayout` - dimensions, population, seed, species count. Frozen.
//! - `SimParams`   - the tunables. Replaceable between ticks, snapshotted per tick.

use std::f32::consts::{FRAC_PI_6, PI};

use serde::{Deserialize, Serialize};

use crate::core::field::Rgb;

use super::error::SimError;
use super::species::{SpeciesPalette, DEFAULT_SPECIES};

/// Largest accepted blur radius (the kernel is `(2r + 1)^2` cells)
pub const MAX_KERNEL_RADIUS: u32 = 32;

/// How an agent weighs the channels of a trail sample against its own colour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpeciesAffinity {
    /// Attracted to its own colour's channels, repelled by every other channel
    #[default]
    AttractOwn,
    /// Follows its own colour's channels, ignores the rest
    OwnOnly,
    /// Follows any trail regardless of colour
    Indifferent,
}

impl SpeciesAffinity {
    /// Per-channel weights applied (dot product) to a sensor sample.
    #[inline]
    pub fn weights(self, color: Rgb) -> Rgb {
        match self {
            SpeciesAffinity::AttractOwn => [color[0] * 2.0 - 1.0, color[1] * 2.0 - 1.0, color[2] * 2.0 - 1.0],
            SpeciesAffinity::OwnOnly => color,
            SpeciesAffinity::Indifferent => [1.0, 1.0, 1.0],
        }
    }

    pub fn from_name(name: &str) -> Result<Self, SimError> {
        serde_json::from_value(serde_json::Value::String(name.to_string())).map_err(SimError::from)
    }
}

/// Everything fixed at initialization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub width: u32,
    pub height: u32,
    pub agent_count: u32,
    pub species_count: usize,
    pub seed: u64,
}

/// Tunables, copied once per tick so a pass never sees a half-applied update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    pub sensor_distance: f32,
    pub sensor_angle: f32,
    pub max_turn: f32,
    pub speed: f32,
    pub reduce_amount: f32,
    pub diffusion_amount: f32,
    pub draw_strength: f32,
    pub kernel_radius: u32,
    pub paused: bool,
    pub show_trails: bool,
    pub species_affinity: SpeciesAffinity,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            sensor_distance: 40.0,
            sensor_angle: FRAC_PI_6,
            max_turn: PI / 12.0,
            speed: 1.0,
            reduce_amount: 0.01,
            diffusion_amount: 0.2,
            draw_strength: 0.1,
            kernel_radius: 1,
            paused: false,
            show_trails: true,
            species_affinity: SpeciesAffinity::AttractOwn,
        }
    }
}

impl SimParams {
    pub fn validate(&self) -> Result<(), SimError> {
        check_sensor_distance(self.sensor_distance)?;
        check_angle("sensorAngle", self.sensor_angle)?;
        check_angle("maxTurn", self.max_turn)?;
        check_speed(self.speed)?;
        check_unit("reduceAmount", self.reduce_amount)?;
        check_unit("diffusionAmount", self.diffusion_amount)?;
        check_unit("drawStrength", self.draw_strength)?;
        check_kernel_radius(self.kernel_radius)?;
        Ok(())
    }
}

/// Serialisable configuration; missing JSON fields take the startup defaults
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    pub agent_count: u32,
    pub seed: u64,
    pub species: Vec<Rgb>,
    pub sensor_distance: f32,
    pub sensor_angle: f32,
    pub max_turn: f32,
    pub speed: f32,
    pub reduce_amount: f32,
    pub diffusion_amount: f32,
    pub draw_strength: f32,
    pub kernel_radius: u32,
    pub paused: bool,
    pub show_trails: bool,
    pub species_affinity: SpeciesAffinity,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::from_parts(
            &FieldLayout {
                width: 1280,
                height: 720,
                agent_count: 1_000_000,
                species_count: DEFAULT_SPECIES.len(),
                seed: 0x5EED,
            },
            &SimParams::default(),
            &SpeciesPalette::default(),
        )
    }
}

impl SimConfig {
    /// Default tunables with explicit dimensions and population.
    pub fn new(width: u32, height: u32, agent_count: u32) -> Self {
        Self { width, height, agent_count, ..Self::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.split()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Overlay a partial JSON object onto this config. Fields absent from
    /// `json` keep their current values rather than the startup defaults.
    pub fn merged_with_json(&self, json: &str) -> Result<SimConfig, SimError> {
        let serde_json::Value::Object(patch) = serde_json::from_str(json)? else {
            return Err(SimError::Json("config update must be a JSON object".to_string()));
        };
        let mut base = serde_json::to_value(self)?;
        if let serde_json::Value::Object(fields) = &mut base {
            fields.extend(patch);
        }
        let merged: SimConfig = serde_json::from_value(base)?;
        merged.split()?;
        Ok(merged)
    }

    pub fn from_parts(layout: &FieldLayout, params: &SimParams, palette: &SpeciesPalette) -> Self {
        Self {
            width: layout.width,
            height: layout.height,
            agent_count: layout.agent_count,
            seed: layout.seed,
            species: palette.colors().to_vec(),
            sensor_distance: params.sensor_distance,
            sensor_angle: params.sensor_angle,
            max_turn: params.max_turn,
            speed: params.speed,
            reduce_amount: params.reduce_amount,
            diffusion_amount: params.diffusion_amount,
            draw_strength: params.draw_strength,
            kernel_radius: params.kernel_radius,
            paused: params.paused,
            show_trails: params.show_trails,
            species_affinity: params.species_affinity,
        }
    }

    pub fn params(&self) -> SimParams {
        SimParams {
            sensor_distance: self.sensor_distance,
            sensor_angle: self.sensor_angle,
            max_turn: self.max_turn,
            speed: self.speed,
            reduce_amount: self.reduce_amount,
            diffusion_amount: self.diffusion_amount,
            draw_strength: self.draw_strength,
            kernel_radius: self.kernel_radius,
            paused: self.paused,
            show_trails: self.show_trails,
            species_affinity: self.species_affinity,
        }
    }

    /// Validate everything and split into the frozen and tunable halves.
    pub fn split(&self) -> Result<(FieldLayout, SimParams, SpeciesPalette), SimError> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::EmptyField { width: self.width, height: self.height });
        }
        if self.agent_count == 0 {
            return Err(SimError::NoAgents);
        }
        let palette = SpeciesPalette::new(self.species.clone())?;
        let params = self.params();
        params.validate()?;
        let layout = FieldLayout {
            width: self.width,
            height: self.height,
            agent_count: self.agent_count,
            species_count: palette.len(),
            seed: self.seed,
        };
        Ok((layout, params, palette))
    }
}

// === Range checks (shared by setters and whole-config validation) ===

fn invalid(name: &'static str, expected: &'static str, value: f32) -> SimError {
    SimError::InvalidParameter { name, expected, value: value as f64 }
}

pub(crate) fn check_sensor_distance(v: f32) -> Result<(), SimError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(invalid("sensorDistance", "finite and > 0", v))
    }
}

pub(crate) fn check_angle(name: &'static str, v: f32) -> Result<(), SimError> {
    if (0.0..=PI).contains(&v) {
        Ok(())
    } else {
        Err(invalid(name, "radians in [0, pi]", v))
    }
}

pub(crate) fn check_speed(v: f32) -> Result<(), SimError> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(invalid("speed", "finite and >= 0", v))
    }
}

pub(crate) fn check_unit(name: &'static str, v: f32) -> Result<(), SimError> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(invalid(name, "in [0, 1]", v))
    }
}

pub(crate) fn check_kernel_radius(v: u32) -> Result<(), SimError> {
    if v <= MAX_KERNEL_RADIUS {
        Ok(())
    } else {
        Err(SimError::InvalidParameter {
            name: "kernelRadius",
            expected: "an integer in [0, 32]",
            value: v as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_startup_values() {
        let c = SimConfig::default();
        assert_eq!(c.agent_count, 1_000_000);
        assert_eq!(c.species.len(), 3);
        assert!((c.sensor_angle - PI / 6.0).abs() < 1e-6);
        assert_eq!(c.kernel_radius, 1);
        assert!(c.show_trails);
        assert!(c.split().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = SimConfig::from_json(r#"{"width": 64, "height": 32, "agentCount": 10, "reduceAmount": 0.5}"#)
            .unwrap();
        assert_eq!((c.width, c.height, c.agent_count), (64, 32, 10));
        assert_eq!(c.reduce_amount, 0.5);
        assert_eq!(c.speed, 1.0);
        assert_eq!(c.species_affinity, SpeciesAffinity::AttractOwn);
    }

    #[test]
    fn json_round_trip_keeps_camel_case() {
        let c = SimConfig::new(10, 10, 5);
        let json = c.to_json().unwrap();
        assert!(json.contains("\"diffusionAmount\""));
        assert!(json.contains("\"speciesAffinity\":\"attractOwn\""));
        assert_eq!(SimConfig::from_json(&json).unwrap(), c);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut c = SimConfig::new(10, 10, 5);
        c.reduce_amount = -0.1;
        assert!(matches!(
            c.split(),
            Err(SimError::InvalidParameter { name: "reduceAmount", .. })
        ));

        let mut c = SimConfig::new(10, 10, 5);
        c.sensor_distance = 0.0;
        assert!(c.split().is_err());

        let mut c = SimConfig::new(10, 10, 5);
        c.max_turn = 4.0;
        assert!(c.split().is_err());

        let mut c = SimConfig::new(10, 10, 5);
        c.kernel_radius = MAX_KERNEL_RADIUS + 1;
        assert!(c.split().is_err());

        assert_eq!(SimConfig::new(0, 10, 5).split().unwrap_err(), SimError::EmptyField { width: 0, height: 10 });
        assert_eq!(SimConfig::new(10, 10, 0).split().unwrap_err(), SimError::NoAgents);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(SimConfig::from_json("{not json"), Err(SimError::Json(_))));
        assert!(SimConfig::from_json(r#"{"speed": -1}"#).is_err());
    }

    #[test]
    fn partial_update_keeps_current_values() {
        let mut base = SimConfig::new(64, 64, 10);
        base.speed = 2.0;
        let merged = base.merged_with_json(r#"{"reduceAmount": 0.5}"#).unwrap();
        assert_eq!((merged.width, merged.height, merged.agent_count), (64, 64, 10));
        assert_eq!(merged.speed, 2.0);
        assert_eq!(merged.reduce_amount, 0.5);

        assert!(base.merged_with_json(r#"{"reduceAmount": 5}"#).is_err());
        assert!(matches!(base.merged_with_json("[1, 2]"), Err(SimError::Json(_))));
    }

    #[test]
    fn affinity_weights_and_names() {
        let blue = [0.0, 0.0, 1.0];
        assert_eq!(SpeciesAffinity::AttractOwn.weights(blue), [-1.0, -1.0, 1.0]);
        assert_eq!(SpeciesAffinity::OwnOnly.weights(blue), blue);
        assert_eq!(SpeciesAffinity::from_name("indifferent").unwrap(), SpeciesAffinity::Indifferent);
        assert!(SpeciesAffinity::from_name("hostile").is_err());
    }
}
