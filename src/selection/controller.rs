use log::{debug, info, warn};

use crate::config::AppConfig;
use crate::geodesy::Bounds;
use crate::planets::{project_planets, PlanetSelection, Projection};
use crate::selection::labels::{body_label, distance_banner};
use crate::selection::line::connecting_line;
use crate::selection::overlay::{OverlayId, OverlayRenderer};
use crate::selection::state::{ClickOutcome, SelectionState};
use crate::GeoPoint;

/// Owns everything the page keeps between events: the clicked points, the
/// checked planets and the handles of what has been drawn for them.
pub struct MapController<R: OverlayRenderer> {
    renderer: R,
    state: SelectionState,
    selection: PlanetSelection,
    point_markers: Vec<OverlayId>,
    planet_markers: Vec<OverlayId>,
    line: Option<OverlayId>,
    projection: Option<Projection>,
    fit_padding_px: u32,
}

impl<R: OverlayRenderer> MapController<R> {
    pub fn new(mut renderer: R, config: &AppConfig) -> Self {
        renderer.set_view(config.initial_center, config.initial_zoom);
        MapController {
            renderer,
            state: SelectionState::Empty,
            selection: PlanetSelection::none(),
            point_markers: Vec::new(),
            planet_markers: Vec::new(),
            line: None,
            projection: None,
            fit_padding_px: config.fit_padding_px,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selection(&self) -> &PlanetSelection {
        &self.selection
    }

    /// Current planet layout; present only while both points are placed.
    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Handles a click on the map. A third click wipes the previous pair
    /// before the new point becomes the Sun. Clicks with non-finite
    /// coordinates are ignored and return `None`.
    pub fn click(&mut self, at: GeoPoint) -> Option<ClickOutcome> {
        let Some(at) = GeoPoint::clamped(at.lat, at.lon) else {
            warn!("ignoring click at non-finite position {:?}", at);
            return None;
        };
        if self.state.len() >= 2 {
            self.clear_overlays();
        }

        let outcome = self.state.click(at);
        debug!("click {:?} -> {:?}", at, self.state);

        let label = body_label(outcome.body, &at);
        let marker = self.renderer.add_marker(at, &label);
        self.point_markers.push(marker);

        if let Some((sun, earth)) = self.state.pair() {
            self.line = Some(self.renderer.add_polyline(&connecting_line(&sun, &earth)));
            self.show_planets(&sun, &earth);
            let distance = sun.distance_to(&earth);
            info!("sun-earth distance {:.2} km", distance);
            self.renderer.show_distance(Some(&distance_banner(distance)));
        }
        Some(outcome)
    }

    /// Flips one planet checkbox and redraws. Returns the new state of the
    /// "select all" checkbox, or `None` when the planet is unknown.
    pub fn toggle_planet(&mut self, name: &str) -> Option<bool> {
        self.selection.toggle(name)?;
        self.refresh_planets();
        Some(self.selection.all_checked())
    }

    pub fn select_all(&mut self, checked: bool) {
        self.selection.set_all(checked);
        self.refresh_planets();
    }

    /// The "clear" button: back to an empty map.
    pub fn clear(&mut self) {
        self.clear_overlays();
        self.state.clear();
        info!("cleared all points");
    }

    fn refresh_planets(&mut self) {
        if let Some((sun, earth)) = self.state.pair() {
            self.show_planets(&sun, &earth);
        }
    }

    fn show_planets(&mut self, sun: &GeoPoint, earth: &GeoPoint) {
        self.clear_planet_markers();
        let projection = project_planets(sun, earth, &self.selection);
        for projected in &projection.planets {
            let marker = self.renderer.add_marker(projected.point, &projected.label());
            self.planet_markers.push(marker);
        }

        let mut visible = self.state.points();
        visible.extend(projection.planets.iter().map(|p| p.point));
        if let Some(bounds) = Bounds::enclosing(&visible) {
            self.renderer.fit_bounds(bounds, self.fit_padding_px);
        }
        self.projection = Some(projection);
    }

    fn clear_planet_markers(&mut self) {
        for id in self.planet_markers.drain(..) {
            self.renderer.remove_overlay(id);
        }
        self.projection = None;
    }

    fn clear_overlays(&mut self) {
        for id in self.point_markers.drain(..) {
            self.renderer.remove_overlay(id);
        }
        self.clear_planet_markers();
        if let Some(line) = self.line.take() {
            self.renderer.remove_overlay(line);
        }
        self.renderer.show_distance(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::overlay::LogRenderer;
    use crate::selection::state::Body;

    fn controller() -> MapController<LogRenderer> {
        MapController::new(LogRenderer::new(), &AppConfig::default())
    }

    #[test]
    fn two_clicks_draw_points_line_and_earth() {
        let mut map = controller();
        map.click(GeoPoint { lat: 0.0, lon: 0.0 });
        assert!(map.projection().is_none());
        assert_eq!(map.renderer().live_overlays(), 1);

        let outcome = map.click(GeoPoint { lat: 0.0, lon: 1.0 }).expect("click");
        assert_eq!(outcome.body, Body::Earth);
        // sun, earth, line, projected earth
        assert_eq!(map.renderer().live_overlays(), 4);
        assert_eq!(map.projection().map(|p| p.planets.len()), Some(1));
    }

    #[test]
    fn checkbox_changes_redraw_planets() {
        let mut map = controller();
        map.click(GeoPoint { lat: 10.0, lon: 10.0 });
        map.click(GeoPoint { lat: 10.0, lon: 10.5 });

        map.select_all(true);
        assert_eq!(map.renderer().live_overlays(), 3 + 8);
        assert_eq!(map.toggle_planet("Neptune"), Some(false));
        assert_eq!(map.renderer().live_overlays(), 3 + 7);
        assert_eq!(map.toggle_planet("Neptune"), Some(true));
        assert_eq!(map.toggle_planet("Ceres"), None);
    }

    #[test]
    fn checkbox_before_second_point_only_updates_selection() {
        let mut map = controller();
        map.click(GeoPoint { lat: 0.0, lon: 0.0 });
        map.select_all(true);
        assert!(map.selection().all_checked());
        assert_eq!(map.renderer().live_overlays(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let mut map = controller();
        map.select_all(true);
        map.click(GeoPoint { lat: 0.0, lon: 0.0 });
        map.click(GeoPoint { lat: 1.0, lon: 1.0 });
        map.clear();
        assert!(map.state().is_empty());
        assert!(map.projection().is_none());
        assert_eq!(map.renderer().live_overlays(), 0);
    }

    #[test]
    fn wrapped_click_is_normalized() {
        let mut map = controller();
        map.click(GeoPoint { lat: 0.0, lon: 200.0 });
        assert_eq!(
            *map.state(),
            SelectionState::OneSelected {
                sun: GeoPoint { lat: 0.0, lon: -160.0 }
            }
        );
    }

    #[test]
    fn out_of_range_click_is_pinned_to_pole() {
        let mut map = controller();
        map.click(GeoPoint { lat: 95.0, lon: 0.0 });
        assert_eq!(
            *map.state(),
            SelectionState::OneSelected {
                sun: GeoPoint { lat: 90.0, lon: 0.0 }
            }
        );
    }

    #[test]
    fn non_finite_click_is_ignored() {
        let mut map = controller();
        map.click(GeoPoint { lat: 1.0, lon: 1.0 });
        assert!(map.click(GeoPoint { lat: f64::NAN, lon: 0.0 }).is_none());
        assert_eq!(map.state().len(), 1);
        assert_eq!(map.renderer().live_overlays(), 1);
    }
}
