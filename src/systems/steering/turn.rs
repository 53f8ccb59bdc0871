//! Turn decision from a sensor reading.

use crate::core::random::{signed_unit_f32, xorshift32};

use super::sense::SensorReading;

/// Readings whose spread is within this are treated as a tie
pub const TIE_EPSILON: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnDecision {
    /// Centre strongest, or all three effectively tied
    Keep,
    /// All three exactly equal: small random turn to break symmetry
    Wobble,
    Left,
    Right,
    /// Both sides equal and stronger than the centre
    EitherSide,
}

pub fn decide(r: SensorReading) -> TurnDecision {
    if r.left == r.center && r.center == r.right {
        return TurnDecision::Wobble;
    }
    let hi = r.left.max(r.center).max(r.right);
    let lo = r.left.min(r.center).min(r.right);
    if hi - lo <= TIE_EPSILON || (r.center >= r.left && r.center >= r.right) {
        TurnDecision::Keep
    } else if r.left > r.right {
        TurnDecision::Left
    } else if r.right > r.left {
        TurnDecision::Right
    } else {
        TurnDecision::EitherSide
    }
}

/// Heading change in radians, always within `[-max_turn, max_turn]`.
/// `rng` is only drawn from for `Wobble` and `EitherSide`.
pub fn turn_delta(decision: TurnDecision, max_turn: f32, rng: &mut u32) -> f32 {
    match decision {
        TurnDecision::Keep => 0.0,
        TurnDecision::Wobble => signed_unit_f32(rng) * max_turn,
        TurnDecision::Left => -max_turn,
        TurnDecision::Right => max_turn,
        TurnDecision::EitherSide => {
            if xorshift32(rng) & 1 == 0 {
                -max_turn
            } else {
                max_turn
            }
        }
    }
}
