pub mod projection;
pub mod selection;
pub mod table;

pub use projection::{project_planets, ProjectedPlanet, Projection};
pub use selection::{PlanetSelection, UnknownPlanet};
pub use table::{Planet, EARTH, EARTH_DISTANCE_MKM, PLANETS, PLANET_COUNT};
