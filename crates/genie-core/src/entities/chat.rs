use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ChatRole;
use crate::ids::{self, PREFIX_MESSAGE};

/// A message in the assistant chat panel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn new(role: ChatRole, text: &str) -> Self {
        Self {
            id: ids::generate_id(PREFIX_MESSAGE),
            role,
            text: text.to_string(),
            sent_at: Utc::now(),
        }
    }
}
