//! The JSON envelope every `/api/*` route answers with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{success, message, data}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiEnvelope {
    pub success: bool,
    pub message: String,
    pub data: Value,
}

impl ApiEnvelope {
    #[must_use]
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    /// Failure envelope; `data` is always `null`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Value::Null,
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub environment: String,
}

impl HealthStatus {
    #[must_use]
    pub fn running(environment: &str) -> Self {
        Self {
            status: String::from("OK"),
            message: String::from("Travel Genie API is running"),
            timestamp: Utc::now(),
            environment: environment.to_string(),
        }
    }
}
