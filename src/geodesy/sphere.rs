use crate::GeoPoint;

/// Radius of the spherical Earth model, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Maps any longitude into (-180, 180].
pub fn normalize_longitude(lon: f64) -> f64 {
    if lon > -180.0 && lon <= 180.0 {
        return lon;
    }
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Great-circle distance between two points using the
/// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
/// Returns the result in kilometers.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let sin_dlat_half = ((b.lat - a.lat).to_radians() * 0.5).sin();
    let sin_dlon_half = ((b.lon - a.lon).to_radians() * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;
    // rounding can push h a hair past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial bearing of the great-circle path from `a` to `b`, in radians
/// clockwise from north, within (-π, π].
///
/// Coincident points have no direction; the result is then 0.
pub fn bearing_rad(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dlambda = (b.lon - a.lon).to_radians();

    let y = dlambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * dlambda.cos();
    y.atan2(x)
}

/// Point reached by travelling `distance_km` from `start` along the great
/// circle leaving at `bearing_rad`.
pub fn destination_point(start: &GeoPoint, distance_km: f64, bearing_rad: f64) -> GeoPoint {
    let delta = distance_km / EARTH_RADIUS_KM;
    let phi1 = start.lat.to_radians();
    let lambda1 = start.lon.to_radians();

    let sin_phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * bearing_rad.cos())
        .clamp(-1.0, 1.0);
    let phi2 = sin_phi2.asin();
    let lambda2 = lambda1
        + (bearing_rad.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

    GeoPoint {
        lat: phi2.to_degrees(),
        lon: normalize_longitude(lambda2.to_degrees()),
    }
}
