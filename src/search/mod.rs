pub mod debounce;
pub mod nominatim;
pub mod panel;
pub mod results;

use std::future::Future;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GeoPoint;

pub use debounce::Debouncer;
pub use nominatim::NominatimClient;
pub use panel::SearchPanel;
pub use results::SearchView;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid coordinate {value:?} for {name}")]
    BadCoordinate { name: String, value: String },
}

/// A geocoder match.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub display_name: String,
    pub point: GeoPoint,
}

/// Free-text place lookup.
pub trait Geocoder {
    fn lookup(&self, query: &str) -> impl Future<Output = Result<Vec<Place>, SearchError>> + Send;
}

/// Looks `query` up and turns the outcome into dropdown contents. Blank
/// input hides the list without a lookup; failures become an error item.
pub async fn search_view<G: Geocoder>(geocoder: &G, query: &str, limit: usize) -> SearchView {
    let query = query.trim();
    if query.is_empty() {
        return SearchView::Hidden;
    }

    let result = geocoder.lookup(query).await;
    if let Err(err) = &result {
        warn!("search for {:?} failed: {}", query, err);
    }
    SearchView::from_lookup(result, limit)
}
