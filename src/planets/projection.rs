use log::debug;
use serde::Serialize;

use crate::planets::selection::PlanetSelection;
use crate::planets::table::{Planet, EARTH_DISTANCE_MKM};
use crate::selection::overlay::MarkerLabel;
use crate::GeoPoint;

/// One planet placed on the map.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProjectedPlanet {
    pub planet: Planet,
    pub point: GeoPoint,
    /// Distance from the Sun point on the map, in kilometers.
    pub scaled_distance_km: f64,
}

impl ProjectedPlanet {
    pub fn label(&self) -> MarkerLabel {
        MarkerLabel {
            title: self.planet.name.to_string(),
            lines: vec![
                format!("Distance from Sun: {:.1} million km", self.planet.mean_distance_mkm),
                format!("(scaled distance: {:.2} km)", self.scaled_distance_km),
            ],
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Projection {
    /// Great-circle distance between the Sun and Earth points.
    pub real_distance_km: f64,
    pub bearing_rad: f64,
    pub planets: Vec<ProjectedPlanet>,
}

/// Distance of `planet` from the Sun point when Earth sits `real_distance_km` away.
pub fn scaled_distance_km(planet: &Planet, real_distance_km: f64) -> f64 {
    real_distance_km * planet.mean_distance_mkm / EARTH_DISTANCE_MKM
}

/// Lays every selected planet out along the Sun→Earth great circle.
///
/// When both points coincide the distance is zero and every planet lands on
/// the Sun, whatever bearing comes back.
pub fn project_planets(sun: &GeoPoint, earth: &GeoPoint, selection: &PlanetSelection) -> Projection {
    let real_distance_km = sun.distance_to(earth);
    let bearing_rad = sun.bearing_to(earth);
    debug!(
        "projecting planets: sun-earth {:.3} km at {:.3} deg",
        real_distance_km,
        bearing_rad.to_degrees()
    );

    let planets = selection
        .planets()
        .map(|planet| {
            let scaled = scaled_distance_km(planet, real_distance_km);
            ProjectedPlanet {
                planet: *planet,
                point: sun.destination(scaled, bearing_rad),
                scaled_distance_km: scaled,
            }
        })
        .collect();

    Projection {
        real_distance_km,
        bearing_rad,
        planets,
    }
}
