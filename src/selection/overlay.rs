use log::info;
use serde::Serialize;

use crate::geodesy::Bounds;
use crate::{GeoPoint, LatLng};

/// Handle to something drawn on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct OverlayId(pub u64);

/// Popup text bound to a marker: a bold title and a few value lines.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MarkerLabel {
    pub title: String,
    pub lines: Vec<String>,
}

impl MarkerLabel {
    pub fn text(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            out.push_str(" | ");
            out.push_str(line);
        }
        out
    }
}

/// What the map widget must be able to do for us. Rendering, hit-testing
/// and tiles stay on the widget side.
pub trait OverlayRenderer {
    /// Places a marker with its label popup opened.
    fn add_marker(&mut self, at: GeoPoint, label: &MarkerLabel) -> OverlayId;
    fn add_polyline(&mut self, path: &[LatLng]) -> OverlayId;
    fn remove_overlay(&mut self, id: OverlayId);
    fn fit_bounds(&mut self, bounds: Bounds, padding_px: u32);
    fn set_view(&mut self, center: GeoPoint, zoom: u8);
    /// Shows the Sun-Earth distance banner, or hides it on `None`.
    fn show_distance(&mut self, text: Option<&str>);
}

/// Renderer that only logs what it is asked to draw. Used by the command
/// line front end.
#[derive(Debug, Default)]
pub struct LogRenderer {
    next_id: u64,
    live: Vec<OverlayId>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlays currently on the map.
    pub fn live_overlays(&self) -> usize {
        self.live.len()
    }

    fn allocate(&mut self) -> OverlayId {
        self.next_id += 1;
        let id = OverlayId(self.next_id);
        self.live.push(id);
        id
    }
}

impl OverlayRenderer for LogRenderer {
    fn add_marker(&mut self, at: GeoPoint, label: &MarkerLabel) -> OverlayId {
        let id = self.allocate();
        info!("marker #{} at ({:.6}, {:.6}): {}", id.0, at.lat, at.lon, label.text());
        id
    }

    fn add_polyline(&mut self, path: &[LatLng]) -> OverlayId {
        let id = self.allocate();
        info!("line #{} through {:?}", id.0, path);
        id
    }

    fn remove_overlay(&mut self, id: OverlayId) {
        self.live.retain(|live| *live != id);
        info!("removed #{}", id.0);
    }

    fn fit_bounds(&mut self, bounds: Bounds, padding_px: u32) {
        info!(
            "fit view to [{:.4}, {:.4}] - [{:.4}, {:.4}] (padding {}px)",
            bounds.south, bounds.west, bounds.north, bounds.east, padding_px
        );
    }

    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        info!("view centered on ({:.6}, {:.6}) at zoom {}", center.lat, center.lon, zoom);
    }

    fn show_distance(&mut self, text: Option<&str>) {
        match text {
            Some(text) => info!("{}", text),
            None => info!("distance banner hidden"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_renderer_tracks_live_overlays() {
        let mut renderer = LogRenderer::new();
        let a = renderer.add_marker(GeoPoint { lat: 0.0, lon: 0.0 }, &MarkerLabel::default());
        let b = renderer.add_polyline(&[[0.0, 0.0], [1.0, 1.0]]);
        assert_ne!(a, b);
        assert_eq!(renderer.live_overlays(), 2);
        renderer.remove_overlay(a);
        assert_eq!(renderer.live_overlays(), 1);
    }

    #[test]
    fn label_text_joins_lines() {
        let label = MarkerLabel {
            title: "Sun".into(),
            lines: vec!["N 1.000000°".into(), "E 2.000000°".into()],
        };
        assert_eq!(label.text(), "Sun | N 1.000000° | E 2.000000°");
    }
}
