use log::info;

use crate::config::AppConfig;
use crate::search::{search_view, Geocoder, Place, SearchView};
use crate::selection::labels::{latitude_text, longitude_text};
use crate::selection::overlay::{MarkerLabel, OverlayId, OverlayRenderer};

/// Search box state: the dropdown contents and the single marker dropped
/// for the chosen place.
pub struct SearchPanel<G: Geocoder> {
    geocoder: G,
    limit: usize,
    zoom: u8,
    view: SearchView,
    marker: Option<OverlayId>,
}

impl<G: Geocoder> SearchPanel<G> {
    pub fn new(geocoder: G, config: &AppConfig) -> Self {
        SearchPanel {
            geocoder,
            limit: config.geocoder.result_limit,
            zoom: config.search_zoom,
            view: SearchView::Hidden,
            marker: None,
        }
    }

    pub fn view(&self) -> &SearchView {
        &self.view
    }

    pub fn marker(&self) -> Option<OverlayId> {
        self.marker
    }

    /// Runs a lookup and refreshes the dropdown. Blank input hides it
    /// without touching the network; failures end up as an error item.
    pub async fn search(&mut self, query: &str) -> &SearchView {
        self.view = search_view(&self.geocoder, query, self.limit).await;
        &self.view
    }

    /// Recenters on the `index`-th result and swaps in a fresh marker.
    pub fn pick<R: OverlayRenderer>(&mut self, index: usize, renderer: &mut R) -> Option<Place> {
        let place = self.view.places().get(index)?.clone();
        info!("jumping to {}", place.display_name);

        renderer.set_view(place.point, self.zoom);
        if let Some(old) = self.marker.take() {
            renderer.remove_overlay(old);
        }
        let label = MarkerLabel {
            title: place.display_name.clone(),
            lines: vec![latitude_text(place.point.lat), longitude_text(place.point.lon)],
        };
        self.marker = Some(renderer.add_marker(place.point, &label));
        self.view = SearchView::Hidden;
        Some(place)
    }

    /// Enter in the search box: search right away and take the first hit.
    pub async fn submit<R: OverlayRenderer>(&mut self, query: &str, renderer: &mut R) -> Option<Place> {
        self.search(query).await;
        self.pick(0, renderer)
    }
}
