use crate::{GeoPoint, LatLng};

/// Vertices of the straight line joining Sun and Earth on the map.
///
/// Longitudes more than 180° apart would make the widget draw the long way
/// round through the seam, so Earth is moved onto the neighbouring world
/// copy (±360°) next to the Sun.
pub fn connecting_line(sun: &GeoPoint, earth: &GeoPoint) -> Vec<LatLng> {
    let delta = earth.lon - sun.lon;
    let earth_lon = if delta > 180.0 {
        earth.lon - 360.0
    } else if delta < -180.0 {
        earth.lon + 360.0
    } else {
        earth.lon
    };
    vec![[sun.lat, sun.lon], [earth.lat, earth_lon]]
}
