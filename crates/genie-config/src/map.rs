//! Map defaults.

use genie_core::entities::LatLng;
use serde::{Deserialize, Serialize};

const fn default_lat() -> f64 {
    LatLng::DEFAULT_CENTER.lat
}

const fn default_lng() -> f64 {
    LatLng::DEFAULT_CENTER.lng
}

const fn default_zoom() -> u8 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    #[serde(default = "default_lat")]
    pub default_lat: f64,

    #[serde(default = "default_lng")]
    pub default_lng: f64,

    #[serde(default = "default_zoom")]
    pub default_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_lat: default_lat(),
            default_lng: default_lng(),
            default_zoom: default_zoom(),
        }
    }
}

impl MapConfig {
    #[must_use]
    pub const fn default_center(&self) -> LatLng {
        LatLng {
            lat: self.default_lat,
            lng: self.default_lng,
        }
    }
}
