//! # genie-geo
//!
//! Map helpers for Travel Genie:
//! - free-text geocoding search against a Nominatim-compatible service
//! - straight-line route estimates per travel mode
//! - tile URL selection per map style and theme
//!
//! Searches are single attempts: no cache, no retry.

pub mod nominatim;
pub mod route;
pub mod tiles;

mod error;
mod http;

pub use error::GeoError;
pub use route::{RouteEstimate, estimate_route};
pub use tiles::tile_url;

use std::time::Duration;

use genie_config::GeocodingConfig;

/// HTTP client for the geocoding service.
pub struct GeoClient {
    http: reqwest::Client,
    endpoint: String,
    result_limit: usize,
}

impl GeoClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeoError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            result_limit: config.result_limit,
        })
    }

    /// Number of results a search takes when the caller has no preference.
    #[must_use]
    pub const fn default_limit(&self) -> usize {
        self.result_limit
    }
}
