//! # genie-config
//!
//! Layered configuration loading for Travel Genie using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GENIE_*` prefix, `__` as separator)
//! 2. Project-level `.genie/config.toml`
//! 3. User-level `~/.config/travel-genie/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GENIE_SERVER__PORT` -> `server.port`, `GENIE_GEOCODING__ENDPOINT`
//! -> `geocoding.endpoint`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use genie_config::GenieConfig;
//!
//! let config = GenieConfig::load_with_dotenv().expect("config");
//! println!("API on {}", config.server.bind_addr());
//! ```

mod error;
mod geocoding;
mod map;
mod relay;
mod server;
mod storage;

pub use error::ConfigError;
pub use geocoding::GeocodingConfig;
pub use map::MapConfig;
pub use relay::RelayConfig;
pub use server::ServerConfig;
pub use storage::{STATE_FILE_NAME, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound Nominatim accepts for `limit`.
const MAX_RESULT_LIMIT: usize = 40;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenieConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub map: MapConfig,
}

impl GenieConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".genie/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GENIE_").split("__"))
    }

    /// Reject values the services cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if self.geocoding.result_limit == 0 || self.geocoding.result_limit > MAX_RESULT_LIMIT {
            return Err(invalid(
                "geocoding.result_limit",
                "must be between 1 and 40",
            ));
        }
        if !self.geocoding.endpoint.starts_with("http://")
            && !self.geocoding.endpoint.starts_with("https://")
        {
            return Err(invalid("geocoding.endpoint", "must be an http(s) URL"));
        }
        if self.server.frontend_url.trim().is_empty() {
            return Err(invalid("server.frontend_url", "must not be empty"));
        }
        if self.relay.max_frame_bytes == 0 {
            return Err(invalid("relay.max_frame_bytes", "must be greater than zero"));
        }
        if self.server.port != 0 && self.server.port == self.relay.port {
            return Err(invalid(
                "relay.port",
                "must differ from server.port",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("travel-genie").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GenieConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.relay.port, 5001);
        assert_eq!(config.geocoding.result_limit, 5);
        assert_eq!(config.map.default_zoom, 10);
    }

    #[test]
    fn figment_builds_without_files() {
        let config: GenieConfig = GenieConfig::figment()
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.geocoding.endpoint, "https://nominatim.openstreetmap.org");
    }

    #[test]
    fn zero_result_limit_is_rejected() {
        let mut config = GenieConfig::default();
        config.geocoding.result_limit = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "geocoding.result_limit"));
    }

    #[test]
    fn zero_frame_limit_is_rejected() {
        let mut config = GenieConfig::default();
        config.relay.max_frame_bytes = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "relay.max_frame_bytes"));
    }

    #[test]
    fn clashing_ports_are_rejected() {
        let mut config = GenieConfig::default();
        config.relay.port = config.server.port;
        assert!(config.validate().is_err());
    }
}
