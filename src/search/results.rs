use serde::Serialize;

use crate::search::{Place, SearchError};

pub const NOT_FOUND_TEXT: &str = "No matching places found";

/// What the dropdown under the search box shows.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "snake_case")]
pub enum SearchView {
    #[default]
    Hidden,
    NotFound,
    Results(Vec<Place>),
    Error(String),
}

impl SearchView {
    pub fn from_lookup(result: Result<Vec<Place>, SearchError>, limit: usize) -> Self {
        match result {
            Ok(places) if places.is_empty() => SearchView::NotFound,
            Ok(mut places) => {
                places.truncate(limit);
                SearchView::Results(places)
            }
            Err(err) => SearchView::Error(format!("search error: {err}")),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, SearchView::Hidden)
    }

    pub fn places(&self) -> &[Place] {
        match self {
            SearchView::Results(places) => places,
            _ => &[],
        }
    }

    /// One line per dropdown entry.
    pub fn items(&self) -> Vec<String> {
        match self {
            SearchView::Hidden => Vec::new(),
            SearchView::NotFound => vec![NOT_FOUND_TEXT.to_string()],
            SearchView::Results(places) => places.iter().map(|p| p.display_name.clone()).collect(),
            SearchView::Error(message) => vec![message.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint;

    fn place(name: &str) -> Place {
        Place {
            display_name: name.to_string(),
            point: GeoPoint { lat: 0.0, lon: 0.0 },
        }
    }

    #[test]
    fn zero_matches_show_placeholder() {
        let view = SearchView::from_lookup(Ok(Vec::new()), 5);
        assert_eq!(view, SearchView::NotFound);
        assert_eq!(view.items(), vec![NOT_FOUND_TEXT.to_string()]);
        assert!(view.is_visible());
    }

    #[test]
    fn results_are_capped() {
        let found = (0..8).map(|i| place(&format!("place {i}"))).collect();
        let view = SearchView::from_lookup(Ok(found), 5);
        assert_eq!(view.places().len(), 5);
        assert_eq!(view.items()[4], "place 4");
    }

    #[test]
    fn failure_becomes_error_item() {
        let err = SearchError::BadCoordinate {
            name: "x".into(),
            value: "y".into(),
        };
        let view = SearchView::from_lookup(Err(err), 5);
        match &view {
            SearchView::Error(message) => assert!(message.starts_with("search error")),
            other => panic!("unexpected view {other:?}"),
        }
        assert!(view.places().is_empty());
    }

    #[test]
    fn hidden_serializes_without_items() {
        let json = serde_json::to_value(SearchView::Hidden).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "hidden" }));
    }
}
