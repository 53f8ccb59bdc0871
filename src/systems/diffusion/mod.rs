//! Diffusion/Decay pass.
//!
//! Reads the current generation and the tick's deposits, writes the next
//! generation. Each output cell depends only on its input neighbourhood, so
//! rows are independent and processed in parallel.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::field::{saturate, DepositBuffer, TrailField, CHANNELS};
use crate::domain::config::SimParams;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DiffuseCounters {
    pub cells: u32,
}

/// Per cell and channel:
/// `combined = cur + drawStrength * dep`,
/// `blurred  = mean of combined over the (2k+1)^2 window, edges clamped`,
/// `next     = saturate((combined + diffusion * (blurred - combined)) * (1 - reduce))`.
pub fn diffuse(
    current: &TrailField,
    deposits: &DepositBuffer,
    next: &mut TrailField,
    params: &SimParams,
) -> DiffuseCounters {
    let width = current.width() as usize;
    let height = current.height() as usize;
    assert_eq!(
        (next.width() as usize, next.height() as usize),
        (width, height),
        "diffusion output must match the current generation"
    );

    for c in 0..CHANNELS {
        let source = Source { cur: current.channel(c), deposits, channel: c, draw: params.draw_strength };
        let out = next.channel_mut(c);

        #[cfg(feature = "parallel")]
        {
            out.par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| blur_row(&source, row, y, width, height, params));
        }
        #[cfg(not(feature = "parallel"))]
        {
            for (y, row) in out.chunks_mut(width).enumerate() {
                blur_row(&source, row, y, width, height, params);
            }
        }
    }

    DiffuseCounters { cells: cell_count(width, height) }
}

/// Cells in a pass, saturating like the other perf counters.
#[inline]
fn cell_count(width: usize, height: usize) -> u32 {
    width
        .checked_mul(height)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(u32::MAX)
}

/// One channel of `current + drawStrength * deposits`, read without a scratch copy
struct Source<'a> {
    cur: &'a [f32],
    deposits: &'a DepositBuffer,
    channel: usize,
    draw: f32,
}

impl Source<'_> {
    #[inline(always)]
    fn combined(&self, idx: usize) -> f32 {
        *fast!(self.cur, [idx]) + self.draw * self.deposits.intensity(self.channel, idx)
    }
}

#[inline]
fn blur_row(src: &Source<'_>, row: &mut [f32], y: usize, width: usize, height: usize, params: &SimParams) {
    let k = params.kernel_radius as i64;
    let keep = 1.0 - params.reduce_amount;
    let window = ((2 * k + 1) * (2 * k + 1)) as f32;
    let (w, h) = (width as i64, height as i64);

    for (x, out) in row.iter_mut().enumerate() {
        let mut sum = 0.0f32;
        for dy in -k..=k {
            let sy = (y as i64 + dy).clamp(0, h - 1) as usize;
            for dx in -k..=k {
                let sx = (x as i64 + dx).clamp(0, w - 1) as usize;
                sum += src.combined(sy * width + sx);
            }
        }
        let centre = src.combined(y * width + x);
        let blurred = sum / window;
        let mixed = centre + params.diffusion_amount * (blurred - centre);
        *out = saturate(mixed * keep);
    }
}
