//! Agent Store - fixed population of mutable agent records.
//!
//! Allocated once from the layout; agents are only ever mutated in place.
//! The store exposes no push/remove, so its length never changes after
//! construction.

use serde::{Deserialize, Serialize};

use crate::core::utils::alloc::try_with_capacity;
use crate::core::vec2::Vec2;

use super::error::SimError;
use super::species::SpeciesId;

/// One simulated slime agent
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Always inside `[0, width) x [0, height)`
    pub position: Vec2,
    /// Direction of travel in radians, normalised to `[0, 2π)`
    pub heading: f32,
    pub species: SpeciesId,
    /// Stable identity, equal to the agent's slot in the store
    pub index: u32,
}

pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    /// Build a store of exactly `count` agents from a per-index constructor.
    pub fn try_from_fn<F>(count: u32, mut make: F) -> Result<Self, SimError>
    where
        F: FnMut(u32) -> Agent,
    {
        let mut agents = try_with_capacity("agent store", count as usize)?;
        for i in 0..count {
            let mut agent = make(i);
            agent.index = i;
            agents.push(agent);
        }
        Ok(Self { agents })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable view for a pass. Slice, not Vec: the population cannot change.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Overwrite the pose of one agent.
    pub fn set_pose(&mut self, index: usize, position: Vec2, heading: f32) -> Result<(), SimError> {
        let count = self.agents.len();
        let agent = self
            .agents
            .get_mut(index)
            .ok_or(SimError::UnknownAgent { index, count })?;
        agent.position = position;
        agent.heading = heading.rem_euclid(std::f32::consts::TAU);
        Ok(())
    }
}
