use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::GeoPoint;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "SOLAR_MAP_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeocoderConfig {
    /// Nominatim-compatible search endpoint.
    pub endpoint: String,
    pub user_agent: String,
    pub result_limit: usize,
    pub debounce_ms: u64,
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        GeocoderConfig {
            endpoint: "https://nominatim.openstreetmap.org/search".to_string(),
            user_agent: concat!("solar-map-engine/", env!("CARGO_PKG_VERSION")).to_string(),
            result_limit: 5,
            debounce_ms: 300,
            timeout_secs: 10,
        }
    }
}

impl GeocoderConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub initial_center: GeoPoint,
    pub initial_zoom: u8,
    /// Zoom used when jumping to a search result.
    pub search_zoom: u8,
    pub fit_padding_px: u32,
    pub geocoder: GeocoderConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            initial_center: GeoPoint {
                lat: 39.9042,
                lon: 116.4074,
            },
            initial_zoom: 13,
            search_zoom: 13,
            fit_padding_px: 50,
            geocoder: GeocoderConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reads the file named by `SOLAR_MAP_CONFIG`, or falls back to defaults
    /// when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => {
                debug!("loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "initial_zoom": 4, "geocoder": {{ "debounce_ms": 150 }} }}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.initial_zoom, 4);
        assert_eq!(config.geocoder.debounce(), Duration::from_millis(150));
        assert_eq!(config.geocoder.result_limit, 5);
        assert_eq!(config.fit_padding_px, 50);
        assert_eq!(config.initial_center, AppConfig::default().initial_center);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppConfig::load(dir.path().join("absent.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
