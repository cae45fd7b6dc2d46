use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{self, PREFIX_NOTIFICATION};

/// An in-app notice. Session-only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    #[must_use]
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            id: ids::generate_id(PREFIX_NOTIFICATION),
            title: title.to_string(),
            body: body.to_string(),
            created_at: Utc::now(),
        }
    }
}
