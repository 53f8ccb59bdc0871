//! Deposit buffer - the one place parallel workers write shared memory.
//!
//! Cells are fixed-point `AtomicU32` counters (`DEPOSIT_SCALE` units per 1.0).
//! Saturating integer addition of non-negative values does not depend on the
//! order in which agents land, so the accumulated buffer is identical across
//! runs and thread counts.

use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::utils::alloc::try_with_capacity;

use super::*;

/// Fixed-point units per 1.0 of deposited intensity
pub const DEPOSIT_SCALE: f32 = 65536.0;

/// Write target of the steering pass, cleared at the start of every tick
#[derive(Debug)]
pub struct DepositBuffer {
    width: u32,
    height: u32,
    size: usize,
    channels: [Vec<AtomicU32>; CHANNELS],
}

impl DepositBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::EmptyField { width, height });
        }
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(SimError::Allocation { what: "deposit buffer", bytes: usize::MAX })?;
        Ok(Self {
            width,
            height,
            size,
            channels: [
                zeroed_counters(size)?,
                zeroed_counters(size)?,
                zeroed_counters(size)?,
            ],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    /// Accumulate `rgb` into the cell under `pos` (clamped to the field).
    /// Takes `&self`: safe to call from every worker of a pass at once.
    #[inline]
    pub fn deposit(&self, pos: Vec2, rgb: Rgb) {
        let (x, y) = super::indexing::clamp_cell(pos, self.width, self.height);
        let idx = (y as usize) * (self.width as usize) + x as usize;
        for (c, &v) in rgb.iter().enumerate() {
            let q = quantize(v);
            if q == 0 {
                continue;
            }
            // Closure always returns Some, so the update cannot fail.
            let _ = fast!(self.channels[c], [idx]).fetch_update(
                Ordering::Relaxed,
                Ordering::Relaxed,
                |old| Some(old.saturating_add(q)),
            );
        }
    }

    /// Deposited intensity of one channel at a flat index.
    /// Panics if `idx >= size()` or `c >= CHANNELS`.
    #[inline]
    pub fn intensity(&self, c: usize, idx: usize) -> f32 {
        self.channels[c][idx].load(Ordering::Relaxed) as f32 / DEPOSIT_SCALE
    }

    /// RGB deposit at a cell. Panics if `(x, y)` is outside the field.
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) outside deposit buffer");
        let idx = (y as usize) * (self.width as usize) + x as usize;
        [self.intensity(0, idx), self.intensity(1, idx), self.intensity(2, idx)]
    }

    /// Reset every counter. Needs `&mut self`, so no pass can be writing.
    pub fn clear(&mut self) {
        for ch in self.channels.iter_mut() {
            #[cfg(feature = "parallel")]
            {
                ch.par_iter_mut().for_each(|a| *a.get_mut() = 0);
            }
            #[cfg(not(feature = "parallel"))]
            {
                ch.iter_mut().for_each(|a| *a.get_mut() = 0);
            }
        }
    }

    /// Sum of all deposited intensity.
    pub fn total_intensity(&self) -> f64 {
        self.channels
            .iter()
            .map(|ch| {
                ch.iter()
                    .map(|a| a.load(Ordering::Relaxed) as f64 / DEPOSIT_SCALE as f64)
                    .sum::<f64>()
            })
            .sum()
    }

    /// Copy the deposits into a saturated `TrailField` (the "instant" view).
    pub fn to_field(&self) -> Result<TrailField, SimError> {
        let mut field = TrailField::new(self.width, self.height)?;
        for c in 0..CHANNELS {
            for (idx, out) in field.channel_mut(c).iter_mut().enumerate() {
                *out = saturate(self.intensity(c, idx));
            }
        }
        Ok(field)
    }
}

/// Convert an intensity to fixed-point units; negatives and NaN deposit nothing.
#[inline]
pub fn quantize(v: f32) -> u32 {
    if !(v > 0.0) {
        return 0;
    }
    let scaled = (v * DEPOSIT_SCALE).round();
    if scaled >= u32::MAX as f32 {
        u32::MAX
    } else {
        scaled as u32
    }
}

fn zeroed_counters(len: usize) -> Result<Vec<AtomicU32>, SimError> {
    let mut v = try_with_capacity("deposit buffer", len)?;
    v.extend((0..len).map(|_| AtomicU32::new(0)));
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposits_accumulate_instead_of_overwriting() {
        let buf = DepositBuffer::new(8, 8).unwrap();
        let pos = Vec2::new(3.5, 4.2);
        buf.deposit(pos, [0.0, 0.0, 1.0]);
        buf.deposit(pos, [0.0, 0.0, 1.0]);
        buf.deposit(pos, [0.5, 0.0, 0.0]);
        assert_eq!(buf.get(3, 4), [0.5, 0.0, 2.0]);
    }

    #[test]
    fn concurrent_deposits_sum_exactly() {
        let buf = DepositBuffer::new(4, 4).unwrap();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..1000 {
                        buf.deposit(Vec2::new(1.0, 1.0), [0.0, 1.0, 0.0]);
                    }
                });
            }
        });
        assert_eq!(buf.get(1, 1), [0.0, 8000.0, 0.0]);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let buf = DepositBuffer::new(2, 2).unwrap();
        for _ in 0..3 {
            buf.deposit(Vec2::zero(), [f32::MAX, 0.0, 0.0]);
        }
        assert_eq!(buf.get(0, 0)[0], u32::MAX as f32 / DEPOSIT_SCALE);
    }

    #[test]
    fn clear_and_instant_view() {
        let mut buf = DepositBuffer::new(3, 3).unwrap();
        buf.deposit(Vec2::new(-5.0, 99.0), [4.0, 0.25, 0.0]);
        let view = buf.to_field().unwrap();
        assert_eq!(view.get(0, 2), [1.0, 0.25, 0.0]);
        buf.clear();
        assert_eq!(buf.total_intensity(), 0.0);
    }

    #[test]
    #[should_panic]
    fn intensity_past_the_end_panics() {
        let buf = DepositBuffer::new(2, 2).unwrap();
        buf.intensity(0, 3000);
    }

    #[test]
    fn quantize_rejects_negative_and_nan() {
        assert_eq!(quantize(-1.0), 0);
        assert_eq!(quantize(f32::NAN), 0);
        assert_eq!(quantize(1.0), 65536);
    }
}
