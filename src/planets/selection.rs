use thiserror::Error;

use crate::planets::table::{self, Planet, EARTH_INDEX, PLANETS, PLANET_COUNT};

#[derive(Debug, Error, PartialEq)]
#[error("Unknown planet {0}")]
pub struct UnknownPlanet(pub String);

/// Which planet checkboxes are ticked. Earth is always part of the
/// selection and has no checkbox of its own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanetSelection {
    checked: [bool; PLANET_COUNT],
}

impl PlanetSelection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        let mut selection = Self::default();
        selection.set_all(true);
        selection
    }

    /// Builds a selection from checkbox names, failing on the first name
    /// that is not in the table.
    pub fn from_names<'a, I>(names: I) -> Result<Self, UnknownPlanet>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut selection = Self::default();
        for name in names {
            let idx = table::index_of_name(name).ok_or_else(|| UnknownPlanet(name.to_string()))?;
            selection.checked[idx] = true;
        }
        Ok(selection)
    }

    /// Flips one checkbox. Returns `None` for an unknown planet name,
    /// otherwise the new checked state.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let idx = table::index_of_name(name)?;
        if idx == EARTH_INDEX {
            return Some(true);
        }
        self.checked[idx] = !self.checked[idx];
        Some(self.checked[idx])
    }

    pub fn set_all(&mut self, checked: bool) {
        for (idx, slot) in self.checked.iter_mut().enumerate() {
            if idx != EARTH_INDEX {
                *slot = checked;
            }
        }
    }

    /// State for the "select all" checkbox: true once every planet
    /// checkbox is ticked.
    pub fn all_checked(&self) -> bool {
        self.checked
            .iter()
            .enumerate()
            .all(|(idx, &checked)| idx == EARTH_INDEX || checked)
    }

    /// Selected planets in table order, Earth included.
    pub fn planets(&self) -> impl Iterator<Item = &'static Planet> + '_ {
        PLANETS
            .iter()
            .enumerate()
            .filter(move |(idx, _)| *idx == EARTH_INDEX || self.checked[*idx])
            .map(|(_, planet)| planet)
    }
}
