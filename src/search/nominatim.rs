use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::config::GeocoderConfig;
use crate::search::{Geocoder, Place, SearchError};
use crate::GeoPoint;

/// Nominatim reports coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    display_name: String,
    lat: String,
    lon: String,
}

impl TryFrom<NominatimPlace> for Place {
    type Error = SearchError;

    fn try_from(raw: NominatimPlace) -> Result<Self, Self::Error> {
        let lat = parse_coordinate(&raw.display_name, &raw.lat)?;
        let lon = parse_coordinate(&raw.display_name, &raw.lon)?;
        let point = GeoPoint::try_new(lat, lon).map_err(|_| SearchError::BadCoordinate {
            name: raw.display_name.clone(),
            value: format!("{},{}", raw.lat, raw.lon),
        })?;
        Ok(Place {
            display_name: raw.display_name,
            point,
        })
    }
}

fn parse_coordinate(name: &str, value: &str) -> Result<f64, SearchError> {
    value.trim().parse().map_err(|_| SearchError::BadCoordinate {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Decodes a Nominatim `format=json` response body. Entries with unusable
/// coordinates are dropped so the remaining matches still show.
pub fn parse_response(body: &[u8]) -> Result<Vec<Place>, SearchError> {
    let raw: Vec<NominatimPlace> = serde_json::from_slice(body)?;
    Ok(raw
        .into_iter()
        .filter_map(|entry| match Place::try_from(entry) {
            Ok(place) => Some(place),
            Err(err) => {
                warn!("skipping geocoder match: {}", err);
                None
            }
        })
        .collect())
}

/// Geocoder backed by an OpenStreetMap Nominatim endpoint.
#[derive(Clone, Debug)]
pub struct NominatimClient {
    client: Client,
    endpoint: String,
    limit: usize,
}

impl NominatimClient {
    pub fn new(config: &GeocoderConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(NominatimClient {
            client,
            endpoint: config.endpoint.clone(),
            limit: config.result_limit,
        })
    }
}

impl Geocoder for NominatimClient {
    async fn lookup(&self, query: &str) -> Result<Vec<Place>, SearchError> {
        let limit = self.limit.to_string();
        debug!("geocoding {:?} via {}", query, self.endpoint);
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json"), ("q", query), ("limit", limit.as_str())])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        parse_response(&body)
    }
}
