//! Realtime relay configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    5001
}

/// Longest accepted frame line; longer lines close the connection.
const fn default_max_frame_bytes() -> usize {
    64 * 1024
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelayConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_frame_bytes: default_max_frame_bytes(),
        }
    }
}

impl RelayConfig {
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Address a local client dials. A wildcard bind host maps to loopback.
    #[must_use]
    pub fn connect_addr(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" | "" => "127.0.0.1",
            host => host,
        };
        format!("{host}:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_host_connects_over_loopback() {
        let config = RelayConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5001");
        assert_eq!(config.connect_addr(), "127.0.0.1:5001");

        let config = RelayConfig {
            host: "relay.internal".into(),
            ..RelayConfig::default()
        };
        assert_eq!(config.connect_addr(), "relay.internal:5001");
    }
}
