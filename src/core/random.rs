//! Per-agent random streams (xorshift32).
//!
//! Workers of a parallel pass cannot share one RNG state, so each agent derives
//! its own stream from `(seed, agent index, tick)`. Identical inputs replay the
//! identical stream.

/// Random number generator (xorshift32)
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Seed a stream for one agent on one tick. Never returns 0 (xorshift fixpoint).
#[inline]
pub fn agent_stream(seed: u64, index: u32, tick: u64) -> u32 {
    let mixed = (seed as u32)
        ^ ((seed >> 32) as u32).wrapping_mul(0x9E37_79B9)
        ^ index.wrapping_mul(73_856_093)
        ^ (tick as u32).wrapping_mul(19_349_663)
        ^ ((tick >> 32) as u32).wrapping_mul(83_492_791);
    let mut state = mixed | 1;
    // Discard the first outputs; nearby seeds otherwise start correlated.
    xorshift32(&mut state);
    xorshift32(&mut state);
    state
}

/// Uniform float in `[0, 1)`.
#[inline]
pub fn unit_f32(state: &mut u32) -> f32 {
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform float in `[-1, 1)`.
#[inline]
pub fn signed_unit_f32(state: &mut u32) -> f32 {
    unit_f32(state) * 2.0 - 1.0
}
