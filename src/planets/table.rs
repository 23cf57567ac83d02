use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// A planet and its mean distance from the Sun, in millions of kilometers.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct Planet {
    pub name: &'static str,
    pub mean_distance_mkm: f64,
}

/// Earth's mean distance from the Sun; every other distance is scaled against it.
pub const EARTH_DISTANCE_MKM: f64 = 149.6;

pub const EARTH: Planet = Planet {
    name: "Earth",
    mean_distance_mkm: EARTH_DISTANCE_MKM,
};

pub const PLANET_COUNT: usize = 8;

/// The eight planets, ordered outward from the Sun.
pub static PLANETS: [Planet; PLANET_COUNT] = [
    Planet { name: "Mercury", mean_distance_mkm: 57.9 },
    Planet { name: "Venus", mean_distance_mkm: 108.2 },
    EARTH,
    Planet { name: "Mars", mean_distance_mkm: 227.9 },
    Planet { name: "Jupiter", mean_distance_mkm: 778.5 },
    Planet { name: "Saturn", mean_distance_mkm: 1434.0 },
    Planet { name: "Uranus", mean_distance_mkm: 2871.0 },
    Planet { name: "Neptune", mean_distance_mkm: 4495.0 },
];

static NAME_INDEX: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    PLANETS
        .iter()
        .enumerate()
        .map(|(idx, planet)| (planet.name.to_ascii_lowercase(), idx))
        .collect()
});

/// Position of the planet in [`PLANETS`], matching the name case-insensitively.
pub fn index_of_name(name: &str) -> Option<usize> {
    NAME_INDEX.get(&name.trim().to_ascii_lowercase()).copied()
}

/// Position of Earth in [`PLANETS`].
pub(crate) const EARTH_INDEX: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(index_of_name("mars").map(|i| PLANETS[i].name), Some("Mars"));
        assert_eq!(
            index_of_name(" NEPTUNE ").map(|i| PLANETS[i].mean_distance_mkm),
            Some(4495.0)
        );
        assert!(index_of_name("Pluto").is_none());
    }

    #[test]
    fn table_is_ordered_outward() {
        assert!(PLANETS
            .windows(2)
            .all(|w| w[0].mean_distance_mkm < w[1].mean_distance_mkm));
        assert_eq!(PLANETS[EARTH_INDEX], EARTH);
    }
}
