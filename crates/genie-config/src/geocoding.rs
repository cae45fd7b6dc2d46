//! Geocoding search configuration.

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    String::from("https://nominatim.openstreetmap.org")
}

const fn default_result_limit() -> usize {
    5
}

fn default_user_agent() -> String {
    String::from("travel-genie/0.1")
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeocodingConfig {
    /// Base URL of a Nominatim-compatible service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Results taken from each search.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Nominatim's usage policy requires an identifying agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            result_limit: default_result_limit(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
