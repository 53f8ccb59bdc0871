//! Initial agent layout.
//!
//! Agents start uniformly inside the disc inscribed in the field, heading a
//! quarter turn back from radially outward, so the population begins swirling
//! tangentially around the centre instead of exploding straight out.

use std::f32::consts::{FRAC_PI_2, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::vec2::Vec2;
use crate::domain::agent::{Agent, AgentStore};
use crate::domain::config::FieldLayout;
use crate::domain::error::SimError;
use crate::domain::species::SpeciesPalette;

/// Build the whole population from the layout's seed.
pub fn seed_agents(layout: &FieldLayout, palette: &SpeciesPalette) -> Result<AgentStore, SimError> {
    let mut rng = StdRng::seed_from_u64(layout.seed);
    let width = layout.width as f32;
    let height = layout.height as f32;
    let center = Vec2::new(width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0;

    AgentStore::try_from_fn(layout.agent_count, |i| {
        let position = sample_in_disc(&mut rng, center, radius, width, height);
        let outward = (position - center).angle();
        Agent {
            position,
            heading: (outward - FRAC_PI_2).rem_euclid(TAU),
            species: palette.species_for(i),
            index: i,
        }
    })
}

/// Rejection-sample a point strictly inside the disc (and the field).
///
/// The disc covers π/4 of its bounding square, so the expected number of
/// draws is below 1.3 and the loop always terminates.
pub fn sample_in_disc<R: Rng>(rng: &mut R, center: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    let r2 = radius * radius;
    loop {
        let offset = Vec2::new(rng.gen_range(-radius..radius), rng.gen_range(-radius..radius));
        if offset.length_squared() >= r2 {
            continue;
        }
        let p = center + offset;
        // Rounding in `center + offset` can land exactly on the far edge.
        if p.x >= 0.0 && p.x < width && p.y >= 0.0 && p.y < height {
            return p;
        }
    }
}
