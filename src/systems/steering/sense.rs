//! Three forward sensors: left (heading - angle), centre, right (heading + angle).

use crate::core::field::{Rgb, TrailField};
use crate::core::vec2::Vec2;

/// Weighted trail strength seen by each sensor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorReading {
    pub left: f32,
    pub center: f32,
    pub right: f32,
}

/// World positions of the left, centre and right sensors.
#[inline]
pub fn sensor_positions(position: Vec2, heading: f32, sensor_angle: f32, sensor_distance: f32) -> [Vec2; 3] {
    [
        position + Vec2::from_angle(heading - sensor_angle) * sensor_distance,
        position + Vec2::from_angle(heading) * sensor_distance,
        position + Vec2::from_angle(heading + sensor_angle) * sensor_distance,
    ]
}

/// Sample the current generation at each sensor and score it with `weights`.
/// Sensors past the edge read the nearest edge cell.
#[inline]
pub fn sense(
    field: &TrailField,
    position: Vec2,
    heading: f32,
    sensor_angle: f32,
    sensor_distance: f32,
    weights: Rgb,
) -> SensorReading {
    let [l, c, r] = sensor_positions(position, heading, sensor_angle, sensor_distance);
    SensorReading {
        left: score(field.sample_clamped(l), weights),
        center: score(field.sample_clamped(c), weights),
        right: score(field.sample_clamped(r), weights),
    }
}

#[inline]
fn score(sample: Rgb, weights: Rgb) -> f32 {
    sample[0] * weights[0] + sample[1] * weights[1] + sample[2] * weights[2]
}
