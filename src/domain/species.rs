//! Species palette - ordered, bounded list of trail colours.

use serde::{Deserialize, Serialize};

use crate::core::field::{Rgb, CHANNELS};

use super::error::SimError;

/// Index into the palette
pub type SpeciesId = u8;

/// Upper bound on palette size (fixed at initialization)
pub const MAX_SPECIES: usize = 8;

/// Start-up palette: blue, green, red.
pub const DEFAULT_SPECIES: [Rgb; 3] = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]];

/// Ordered species colours, shared by `Arc` with the render hand-off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesPalette {
    colors: Vec<Rgb>,
}

impl SpeciesPalette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self, SimError> {
        if colors.is_empty() || colors.len() > MAX_SPECIES {
            return Err(SimError::SpeciesCount { count: colors.len(), max: MAX_SPECIES });
        }
        for color in colors.iter() {
            validate_color(color)?;
        }
        Ok(Self { colors })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colour of a species. Ids outside the palette wrap round-robin.
    #[inline]
    pub fn color(&self, id: SpeciesId) -> Rgb {
        self.colors[id as usize % self.colors.len()]
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Species for the agent at `index` (round-robin assignment).
    #[inline]
    pub fn species_for(&self, index: u32) -> SpeciesId {
        (index as usize % self.colors.len()) as SpeciesId
    }

    /// Replace one colour; the palette length never changes.
    pub fn set_color(&mut self, index: usize, color: Rgb) -> Result<(), SimError> {
        validate_color(&color)?;
        let count = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(SimError::UnknownSpecies { index, count })?;
        *slot = color;
        Ok(())
    }
}

impl Default for SpeciesPalette {
    fn default() -> Self {
        Self { colors: DEFAULT_SPECIES.to_vec() }
    }
}

fn validate_color(color: &Rgb) -> Result<(), SimError> {
    for c in 0..CHANNELS {
        let v = color[c];
        if !(0.0..=1.0).contains(&v) {
            return Err(SimError::InvalidParameter {
                name: "species colour channel",
                expected: "in [0, 1]",
                value: v as f64,
            });
        }
    }
    Ok(())
}
