use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::{self, PREFIX_MARKER, PREFIX_PLACE};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// New Delhi, the map's fallback center.
    pub const DEFAULT_CENTER: Self = Self {
        lat: 28.6139,
        lng: 77.2090,
    };

    /// Build a coordinate, rejecting values outside the valid ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `lat` is outside -90..=90 or `lng`
    /// outside -180..=180.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoreError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::Validation(format!("latitude {lat} out of range")));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::Validation(format!("longitude {lng} out of range")));
        }
        Ok(Self { lat, lng })
    }
}

impl std::str::FromStr for LatLng {
    type Err = CoreError;

    /// Parse `"<lat>,<lng>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| CoreError::Validation(format!("expected 'lat,lng', got '{s}'")))?;
        let parse = |value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|e| CoreError::Validation(format!("invalid coordinate '{value}': {e}")))
        };
        Self::new(parse(lat)?, parse(lng)?)
    }
}

/// A pin dropped on the map, session-only unless saved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub saved: bool,
    pub created_at: DateTime<Utc>,
}

impl Marker {
    #[must_use]
    pub fn new(position: LatLng, title: &str) -> Self {
        Self {
            id: ids::generate_id(PREFIX_MARKER),
            lat: position.lat,
            lng: position.lng,
            title: title.to_string(),
            description: None,
            saved: false,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A bookmarked location, persisted with the store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlace {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub address: String,
    pub saved_at: DateTime<Utc>,
}

impl SavedPlace {
    /// Save a location. A blank title becomes `"Saved Location"`.
    #[must_use]
    pub fn new(position: LatLng, title: &str, address: &str) -> Self {
        let title = title.trim();
        Self {
            id: ids::generate_id(PREFIX_PLACE),
            lat: position.lat,
            lng: position.lng,
            title: if title.is_empty() {
                String::from("Saved Location")
            } else {
                title.to_string()
            },
            address: address.to_string(),
            saved_at: Utc::now(),
        }
    }
}

/// One geocoding search hit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeocodedPlace {
    pub display_name: String,
    pub lat: f64,
    pub lng: f64,
    pub kind: Option<String>,
    pub importance: Option<f64>,
}

impl GeocodedPlace {
    #[must_use]
    pub const fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}
