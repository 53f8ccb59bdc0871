//! Advance along the heading; reflect off the field walls.

use std::f32::consts::{PI, TAU};

use crate::core::vec2::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moved {
    pub position: Vec2,
    pub heading: f32,
    pub reflected: bool,
}

/// Move `speed` cells along `heading`. A coordinate leaving `[0, extent)` is
/// clamped back inside and the heading is mirrored across that wall's normal.
pub fn advance(position: Vec2, heading: f32, speed: f32, width: f32, height: f32) -> Moved {
    let mut p = position + Vec2::from_angle(heading) * speed;
    let mut h = heading;
    let mut reflected = false;

    if p.x < 0.0 || p.x >= width {
        h = PI - h;
        p.x = p.x.clamp(0.0, just_below(width));
        reflected = true;
    }
    if p.y < 0.0 || p.y >= height {
        h = -h;
        p.y = p.y.clamp(0.0, just_below(height));
        reflected = true;
    }

    Moved { position: p, heading: normalize_angle(h), reflected }
}

/// Wrap into `[0, 2π)`.
#[inline]
pub fn normalize_angle(theta: f32) -> f32 {
    let t = theta.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs
    if t >= TAU {
        0.0
    } else {
        t
    }
}

/// Largest float strictly below a positive extent.
#[inline]
fn just_below(extent: f32) -> f32 {
    f32::from_bits(extent.to_bits() - 1)
}
