use crate::planets::EARTH_DISTANCE_MKM;
use crate::selection::overlay::MarkerLabel;
use crate::selection::state::Body;
use crate::GeoPoint;

pub fn latitude_text(lat: f64) -> String {
    if lat >= 0.0 {
        format!("N {:.6}°", lat)
    } else {
        format!("S {:.6}°", lat.abs())
    }
}

pub fn longitude_text(lon: f64) -> String {
    if lon >= 0.0 {
        format!("E {:.6}°", lon)
    } else {
        format!("W {:.6}°", lon.abs())
    }
}

/// Popup for a clicked point. The Sun is the origin so it also states its
/// own zero distance.
pub fn body_label(body: Body, at: &GeoPoint) -> MarkerLabel {
    let mut lines = vec![latitude_text(at.lat), longitude_text(at.lon)];
    if body == Body::Sun {
        lines.push("(distance: 0 km)".to_string());
    }
    MarkerLabel {
        title: body.name().to_string(),
        lines,
    }
}

pub fn distance_banner(distance_km: f64) -> String {
    format!(
        "Selected Sun-Earth distance: {:.2} km (actual distance is about {:.1} million km)",
        distance_km, EARTH_DISTANCE_MKM
    )
}
