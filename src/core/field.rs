//! Trail Field - Structure of Arrays for the shared pheromone grid
//!
//! One contiguous `Vec<f32>` per colour channel instead of `Vec<[f32; 3]>`,
//! so the diffusion pass can stream a single channel row by row.
//!
//! Generations:
//! - `current`  - read-only for the whole tick (sensors, blur input, renderer)
//! - `deposits` - write target of the steering pass (atomic accumulation)
//! - `next`     - written only by diffusion, swapped in at the tick boundary

use crate::core::utils::alloc::try_filled;
use crate::core::vec2::Vec2;
use crate::domain::error::SimError;

mod indexing;
mod deposits;
mod buffers;

pub use buffers::FieldBuffers;
pub use deposits::{DepositBuffer, DEPOSIT_SCALE};

/// Number of colour channels held per cell
pub const CHANNELS: usize = 3;

/// Upper bound of a cell channel after every diffusion pass
pub const SATURATION: f32 = 1.0;

/// RGB triple, one intensity per channel
pub type Rgb = [f32; CHANNELS];

/// Dense `width x height` grid of RGB trail intensities
#[derive(Clone, Debug, PartialEq)]
pub struct TrailField {
    width: u32,
    height: u32,
    size: usize,
    channels: [Vec<f32>; CHANNELS],
}

impl TrailField {
    /// Allocate an all-zero field. Fails with `SimError::Allocation` rather than aborting.
    pub fn new(width: u32, height: u32) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::EmptyField { width, height });
        }
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(SimError::Allocation { what: "trail field", bytes: usize::MAX })?;
        Ok(Self {
            width,
            height,
            size,
            channels: [
                try_filled("trail field", size, 0.0f32)?,
                try_filled("trail field", size, 0.0f32)?,
                try_filled("trail field", size, 0.0f32)?,
            ],
        })
    }

    #[inline]
    pub fn channel(&self, c: usize) -> &[f32] {
        &self.channels[c]
    }

    #[inline]
    pub fn channel_mut(&mut self, c: usize) -> &mut [f32] {
        &mut self.channels[c]
    }

    /// RGB value of a cell. Panics if `(x, y)` is outside the field.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        let idx = self.index(x, y);
        self.get_idx(idx)
    }

    /// RGB value at a flat index. Panics if `idx >= size()`.
    #[inline]
    pub fn get_idx(&self, idx: usize) -> Rgb {
        [self.channels[0][idx], self.channels[1][idx], self.channels[2][idx]]
    }

    /// Overwrite a cell, saturating each channel into `[0, SATURATION]`.
    pub fn set(&mut self, x: u32, y: u32, rgb: Rgb) {
        let idx = self.index(x, y);
        for (c, v) in rgb.iter().enumerate() {
            self.channels[c][idx] = saturate(*v);
        }
    }

    /// Fill every cell with one (saturated) value.
    pub fn fill(&mut self, rgb: Rgb) {
        for (c, v) in rgb.iter().enumerate() {
            self.channels[c].fill(saturate(*v));
        }
    }

    pub fn clear(&mut self) {
        self.fill([0.0; CHANNELS]);
    }

    /// Read the cell under a (possibly out-of-field) sample point.
    /// Coordinates outside the field clamp to the nearest edge cell.
    #[inline]
    pub fn sample_clamped(&self, pos: Vec2) -> Rgb {
        let (x, y) = self.cell_of(pos);
        self.get_idx(self.index_unchecked(x, y))
    }

    /// Sum of every channel of every cell.
    pub fn total_intensity(&self) -> f64 {
        self.channels
            .iter()
            .map(|ch| ch.iter().map(|&v| v as f64).sum::<f64>())
            .sum()
    }

    /// Smallest and largest channel value anywhere in the field.
    pub fn value_range(&self) -> (f32, f32) {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for ch in self.channels.iter() {
            for &v in ch.iter() {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        (lo, hi)
    }

    /// Number of cells with at least one channel at `SATURATION`.
    pub fn saturated_cells(&self) -> u32 {
        let mut n = 0u32;
        for idx in 0..self.size {
            if self.get_idx(idx).iter().any(|&v| v >= SATURATION) {
                n = n.saturating_add(1);
            }
        }
        n
    }
}

/// Clamp a channel value into `[0, SATURATION]`; NaN becomes 0.
#[inline]
pub fn saturate(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, SATURATION)
    }
}
