use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use solar_map_engine::config::AppConfig;
use solar_map_engine::planets::{project_planets, PlanetSelection};
use solar_map_engine::search::{search_view, Geocoder, NominatimClient, SearchView};
use solar_map_engine::selection::connecting_line;
use solar_map_engine::selection::labels::distance_banner;
use solar_map_engine::{GeoPoint, LatLng};

#[derive(Debug, Deserialize)]
struct PointInput {
    lat: f64,
    lon: f64,
}

impl PointInput {
    fn validate(&self, role: &str) -> Result<GeoPoint, String> {
        GeoPoint::try_new(self.lat, self.lon).map_err(|err| format!("invalid {role} point: {err}"))
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum MapRequest {
    Measure {
        sun: PointInput,
        earth: PointInput,
    },
    Project {
        sun: PointInput,
        earth: PointInput,
        #[serde(default)]
        planets: Vec<String>,
        #[serde(default)]
        all: bool,
    },
    Search {
        query: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum MapResponse {
    Measure {
        distance_km: f64,
        bearing_deg: f64,
        line: Vec<LatLng>,
        banner: String,
    },
    Project {
        distance_km: f64,
        bearing_deg: f64,
        planets: Vec<PlanetResult>,
    },
    Search {
        view: SearchView,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Serialize)]
struct PlanetResult {
    name: String,
    mean_distance_mkm: f64,
    scaled_distance_km: f64,
    point: GeoPoint,
    label: Vec<String>,
}

async fn handler<G: Geocoder>(
    geocoder: &G,
    limit: usize,
    event: LambdaEvent<MapRequest>,
) -> Result<MapResponse, Error> {
    let req = event.payload;
    match req {
        MapRequest::Measure { sun, earth } => {
            let (sun, earth) = match (sun.validate("sun"), earth.validate("earth")) {
                (Ok(sun), Ok(earth)) => (sun, earth),
                (Err(message), _) | (_, Err(message)) => return Ok(MapResponse::Error { message }),
            };
            let distance_km = sun.distance_to(&earth);
            Ok(MapResponse::Measure {
                distance_km,
                bearing_deg: sun.bearing_to(&earth).to_degrees(),
                line: connecting_line(&sun, &earth),
                banner: distance_banner(distance_km),
            })
        }
        MapRequest::Project {
            sun,
            earth,
            planets,
            all,
        } => {
            let (sun, earth) = match (sun.validate("sun"), earth.validate("earth")) {
                (Ok(sun), Ok(earth)) => (sun, earth),
                (Err(message), _) | (_, Err(message)) => return Ok(MapResponse::Error { message }),
            };
            let selection = if all {
                PlanetSelection::all()
            } else {
                match PlanetSelection::from_names(planets.iter().map(String::as_str)) {
                    Ok(selection) => selection,
                    Err(err) => return Ok(MapResponse::Error { message: err.to_string() }),
                }
            };
            let projection = project_planets(&sun, &earth, &selection);
            let planets = projection
                .planets
                .iter()
                .map(|p| PlanetResult {
                    name: p.planet.name.to_string(),
                    mean_distance_mkm: p.planet.mean_distance_mkm,
                    scaled_distance_km: p.scaled_distance_km,
                    point: p.point,
                    label: p.label().lines,
                })
                .collect();
            Ok(MapResponse::Project {
                distance_km: projection.real_distance_km,
                bearing_deg: projection.bearing_rad.to_degrees(),
                planets,
            })
        }
        MapRequest::Search { query } => Ok(MapResponse::Search {
            view: search_view(geocoder, &query, limit).await,
        }),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let config = AppConfig::from_env()?;
    let geocoder = NominatimClient::new(&config.geocoder)?;
    let limit = config.geocoder.result_limit;
    let func = service_fn(move |event| {
        let geocoder = geocoder.clone();
        async move { handler(&geocoder, limit, event).await }
    });
    lambda_runtime::run(func).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use lambda_runtime::Context;
    use serde_json::json;
    use solar_map_engine::search::{Place, SearchError};

    struct OneCityGeocoder;

    impl Geocoder for OneCityGeocoder {
        async fn lookup(&self, query: &str) -> Result<Vec<Place>, SearchError> {
            if query == "Quito" {
                Ok(vec![Place {
                    display_name: "Quito, Ecuador".into(),
                    point: GeoPoint { lat: -0.22, lon: -78.51 },
                }])
            } else {
                Ok(Vec::new())
            }
        }
    }

    async fn call(payload: serde_json::Value) -> MapResponse {
        let req: MapRequest = serde_json::from_value(payload).expect("request");
        handler(&OneCityGeocoder, 5, LambdaEvent::new(req, Context::default()))
            .await
            .expect("response")
    }

    fn error_message(resp: MapResponse) -> String {
        match resp {
            MapResponse::Error { message } => message,
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn measure_one_degree_east() {
        let resp = call(json!({
            "kind": "measure",
            "sun": { "lat": 0.0, "lon": 0.0 },
            "earth": { "lat": 0.0, "lon": 1.0 }
        }))
        .await;
        match resp {
            MapResponse::Measure {
                distance_km,
                bearing_deg,
                line,
                banner,
            } => {
                assert_approx_eq!(distance_km, 111.19, 0.01);
                assert_approx_eq!(bearing_deg, 90.0, 1e-9);
                assert_eq!(line, vec![[0.0, 0.0], [0.0, 1.0]]);
                assert!(banner.contains("111.19 km"));
            }
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_latitude_is_an_error_response() {
        let message = error_message(
            call(json!({
                "kind": "project",
                "sun": { "lat": 95.0, "lon": 0.0 },
                "earth": { "lat": 0.0, "lon": 1.0 }
            }))
            .await,
        );
        assert!(message.starts_with("invalid sun point"), "{message}");

        let message = error_message(
            call(json!({
                "kind": "measure",
                "sun": { "lat": 0.0, "lon": 0.0 },
                "earth": { "lat": -100.0, "lon": 1.0 }
            }))
            .await,
        );
        assert!(message.starts_with("invalid earth point"), "{message}");
    }

    #[tokio::test]
    async fn unknown_planet_is_an_error_response() {
        let message = error_message(
            call(json!({
                "kind": "project",
                "sun": { "lat": 0.0, "lon": 0.0 },
                "earth": { "lat": 0.0, "lon": 1.0 },
                "planets": ["Mars", "Pluto"]
            }))
            .await,
        );
        assert_eq!(message, "Unknown planet Pluto");
    }

    #[tokio::test]
    async fn project_all_and_named_planets() {
        let all = call(json!({
            "kind": "project",
            "sun": { "lat": 0.0, "lon": 0.0 },
            "earth": { "lat": 0.0, "lon": 1.0 },
            "all": true
        }))
        .await;
        match all {
            MapResponse::Project { planets, .. } => {
                assert_eq!(planets.len(), 8);
                assert_eq!(planets[0].name, "Mercury");
                assert_approx_eq!(planets[0].scaled_distance_km, 43.0, 0.05);
            }
            other => panic!("unexpected response {other:?}"),
        }

        let named = call(json!({
            "kind": "project",
            "sun": { "lat": 0.0, "lon": 0.0 },
            "earth": { "lat": 0.0, "lon": 1.0 },
            "planets": ["mars"]
        }))
        .await;
        match named {
            MapResponse::Project { planets, .. } => {
                let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, vec!["Earth", "Mars"]);
            }
            other => panic!("unexpected response {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_maps_to_dropdown_view() {
        match call(json!({ "kind": "search", "query": "Quito" })).await {
            MapResponse::Search { view } => assert_eq!(view.places().len(), 1),
            other => panic!("unexpected response {other:?}"),
        }
        match call(json!({ "kind": "search", "query": "  " })).await {
            MapResponse::Search { view } => assert_eq!(view, SearchView::Hidden),
            other => panic!("unexpected response {other:?}"),
        }
        match call(json!({ "kind": "search", "query": "Atlantis" })).await {
            MapResponse::Search { view } => assert_eq!(view, SearchView::NotFound),
            other => panic!("unexpected response {other:?}"),
        }
    }
}
