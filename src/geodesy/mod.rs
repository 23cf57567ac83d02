pub mod bounds;
pub mod sphere;

pub use bounds::Bounds;
pub use sphere::{bearing_rad, destination_point, distance_km, normalize_longitude, EARTH_RADIUS_KM};
