use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::LatLng;
use crate::ids::{self, PREFIX_LOCATION};

/// Maximum number of entries kept in the location history.
pub const LOCATION_HISTORY_LIMIT: usize = 100;

/// A point the traveller has been at.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub recorded_at: DateTime<Utc>,
}

impl LocationRecord {
    #[must_use]
    pub fn new(position: LatLng) -> Self {
        Self {
            id: ids::generate_id(PREFIX_LOCATION),
            lat: position.lat,
            lng: position.lng,
            recorded_at: Utc::now(),
        }
    }
}
