use serde::Serialize;

use crate::GeoPoint;

/// Axis-aligned lat/lon box used to refit the map view.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Smallest box containing every point, or `None` for an empty input.
    pub fn enclosing<'a, I>(points: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Bounds {
            south: first.lat,
            west: first.lon,
            north: first.lat,
            east: first.lon,
        };
        Some(iter.fold(init, |b, p| Bounds {
            south: b.south.min(p.lat),
            west: b.west.min(p.lon),
            north: b.north.max(p.lat),
            east: b.east.max(p.lon),
        }))
    }

    pub fn contains(&self, p: &GeoPoint) -> bool {
        (self.south..=self.north).contains(&p.lat) && (self.west..=self.east).contains(&p.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enclosing_covers_all_points() {
        let pts = [
            GeoPoint { lat: 10.0, lon: 20.0 },
            GeoPoint { lat: -5.0, lon: 30.0 },
            GeoPoint { lat: 2.0, lon: -40.0 },
        ];
        let b = Bounds::enclosing(&pts).expect("bounds");
        assert_eq!(
            b,
            Bounds {
                south: -5.0,
                west: -40.0,
                north: 10.0,
                east: 30.0
            }
        );
        assert!(pts.iter().all(|p| b.contains(p)));
    }

    #[test]
    fn enclosing_empty_is_none() {
        assert!(Bounds::enclosing(std::iter::empty::<&GeoPoint>()).is_none());
    }
}
