//! Render hand-off: pack the selected view into `0xAABBGGRR` pixels
//! (little-endian RGBA bytes, ready for `ImageData`/texture upload).

use crate::core::field::{saturate, Rgb, CHANNELS};

use super::{SimulationCore, TrailView};

pub(super) const OPAQUE_BLACK: u32 = 0xFF00_0000;

/// One channel value to a byte.
#[inline]
fn to_byte(v: f32) -> u32 {
    (saturate(v) * 255.0).round() as u32
}

/// Pack an RGB cell as opaque ABGR.
#[inline]
pub fn pack_abgr(rgb: Rgb) -> u32 {
    OPAQUE_BLACK | (to_byte(rgb[2]) << 16) | (to_byte(rgb[1]) << 8) | to_byte(rgb[0])
}

pub(super) fn compose_pixels(sim: &mut SimulationCore) -> &[u32] {
    match sim.view() {
        TrailView::Accumulated => {
            let field = &sim.buffers.current;
            for (idx, px) in sim.pixels.iter_mut().enumerate() {
                *px = pack_abgr(field.get_idx(idx));
            }
        }
        TrailView::Instant => {
            let deposits = &sim.buffers.deposits;
            for (idx, px) in sim.pixels.iter_mut().enumerate() {
                let mut rgb = [0.0; CHANNELS];
                for (c, v) in rgb.iter_mut().enumerate() {
                    *v = deposits.intensity(c, idx);
                }
                *px = pack_abgr(rgb);
            }
        }
    }
    &sim.pixels
}
