pub mod config;
pub mod geodesy;
pub mod planets;
pub mod search;
pub mod selection;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geodesy::sphere;

/// Raw `[lat, lon]` vertex of a drawn line. Longitude may fall outside
/// (-180, 180] when a segment is shifted across the antimeridian.
pub type LatLng = [f64; 2];

#[derive(Debug, Error, PartialEq)]
pub enum GeoPointError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("coordinate ({0}, {1}) is not finite")]
    NotFinite(f64, f64),
}

/// A position on the map, in degrees.
///
/// Latitude lies in [-90, 90] and longitude is kept in (-180, 180].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Validates latitude and normalizes longitude. Clicks on a wrapped copy
    /// of the world map arrive with longitudes like 200 or -190.
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, GeoPointError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(GeoPointError::NotFinite(lat, lon));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoPointError::LatitudeOutOfRange(lat));
        }
        Ok(GeoPoint {
            lat,
            lon: sphere::normalize_longitude(lon),
        })
    }

    /// Best-effort point for input that cannot be rejected, such as a map
    /// click: latitude is clamped to the poles and longitude normalized.
    /// Only non-finite input yields `None`.
    pub fn clamped(lat: f64, lon: f64) -> Option<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        Some(GeoPoint {
            lat: lat.clamp(-90.0, 90.0),
            lon: sphere::normalize_longitude(lon),
        })
    }

    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        sphere::distance_km(self, other)
    }

    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        sphere::bearing_rad(self, other)
    }

    pub fn destination(&self, distance_km: f64, bearing_rad: f64) -> GeoPoint {
        sphere::destination_point(self, distance_km, bearing_rad)
    }
}
