//! Sensing & Steering pass.
//!
//! Every agent reads only the current trail generation and writes only its
//! own record plus the shared `DepositBuffer`, so agents are processed as
//! an independent parallel map (rayon under the `parallel` feature).

mod movement;
mod sense;
mod turn;

pub use movement::{advance, normalize_angle, Moved};
pub use sense::{sense, sensor_positions, SensorReading};
pub use turn::{decide, turn_delta, TurnDecision, TIE_EPSILON};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::field::{DepositBuffer, TrailField};
use crate::core::random::agent_stream;
use crate::domain::agent::Agent;
use crate::domain::config::SimParams;
use crate::domain::species::SpeciesPalette;

/// Read-only inputs shared by every agent of one tick
pub struct SteerContext<'a> {
    pub field: &'a TrailField,
    pub deposits: &'a DepositBuffer,
    pub params: SimParams,
    pub palette: &'a SpeciesPalette,
    pub seed: u64,
    pub tick: u64,
}

/// Per-pass tallies for perf stats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SteerCounters {
    pub agents: u32,
    pub wobbles: u32,
    pub reflections: u32,
}

impl SteerCounters {
    #[inline]
    fn merge(self, other: Self) -> Self {
        Self {
            agents: self.agents + other.agents,
            wobbles: self.wobbles + other.wobbles,
            reflections: self.reflections + other.reflections,
        }
    }
}

/// Sense, turn, move and deposit for every agent.
pub fn steer_agents(agents: &mut [Agent], ctx: &SteerContext<'_>) -> SteerCounters {
    #[cfg(feature = "parallel")]
    {
        agents
            .par_iter_mut()
            .map(|agent| steer_agent(agent, ctx))
            .reduce(SteerCounters::default, SteerCounters::merge)
    }

    #[cfg(not(feature = "parallel"))]
    {
        agents
            .iter_mut()
            .map(|agent| steer_agent(agent, ctx))
            .fold(SteerCounters::default(), SteerCounters::merge)
    }
}

/// One agent's step. Randomness comes from a stream keyed by
/// `(seed, agent index, tick)`, so results do not depend on scheduling.
pub fn steer_agent(agent: &mut Agent, ctx: &SteerContext<'_>) -> SteerCounters {
    let p = &ctx.params;
    let color = ctx.palette.color(agent.species);
    let weights = p.species_affinity.weights(color);

    let reading = sense(
        ctx.field,
        agent.position,
        agent.heading,
        p.sensor_angle,
        p.sensor_distance,
        weights,
    );
    let decision = decide(reading);
    let mut rng = agent_stream(ctx.seed, agent.index, ctx.tick);
    let heading = agent.heading + turn_delta(decision, p.max_turn, &mut rng);

    let moved = advance(
        agent.position,
        heading,
        p.speed,
        ctx.field.width() as f32,
        ctx.field.height() as f32,
    );
    agent.position = moved.position;
    agent.heading = moved.heading;

    ctx.deposits.deposit(agent.position, color);

    SteerCounters {
        agents: 1,
        wobbles: (decision == TurnDecision::Wobble) as u32,
        reflections: moved.reflected as u32,
    }
}
