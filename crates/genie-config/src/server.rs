//! REST API server configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    5000
}

fn default_frontend_url() -> String {
    String::from("http://localhost:5173")
}

fn default_environment() -> String {
    String::from("development")
}

/// 10 MiB, the JSON and form body limit.
const fn default_body_limit() -> u64 {
    10 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin allowed by CORS and used to build share links.
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,

    /// Reported by `/api/health` (e.g., `development`, `production`).
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Requests with a larger `Content-Length` are rejected with 413.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            frontend_url: default_frontend_url(),
            environment: default_environment(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}
