//! Integration tests for TOML + environment layering.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use genie_config::{ConfigError, GenieConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
port = 8080
frontend_url = "https://genie.example"
environment = "production"

[relay]
port = 8081

[geocoding]
endpoint = "http://localhost:7070"
result_limit = 3

[storage]
state_path = "/var/lib/genie/state.json"

[map]
default_lat = 15.2993
default_lng = 74.1240
default_zoom = 12
"#,
        )?;

        let config: GenieConfig = Figment::from(Serialized::defaults(GenieConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.bind_addr(), "0.0.0.0:8080");
        assert!(config.server.is_production());
        assert_eq!(config.relay.port, 8081);
        assert_eq!(config.geocoding.endpoint, "http://localhost:7070");
        assert_eq!(config.geocoding.result_limit, 3);
        assert_eq!(config.storage.state_path, "/var/lib/genie/state.json");
        assert_eq!(config.map.default_zoom, 12);
        // Untouched fields keep their defaults.
        assert_eq!(config.geocoding.timeout_secs, 10);
        assert_eq!(config.server.body_limit_bytes, 10 * 1024 * 1024);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".genie")?;
        jail.create_file(
            ".genie/config.toml",
            r#"
[server]
port = 7000
"#,
        )?;

        let config = GenieConfig::load().expect("config loads");
        assert_eq!(config.server.port, 7000);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".genie")?;
        jail.create_file(
            ".genie/config.toml",
            r#"
[geocoding]
result_limit = 3
"#,
        )?;
        jail.set_env("GENIE_GEOCODING__RESULT_LIMIT", "8");
        jail.set_env("GENIE_SERVER__FRONTEND_URL", "http://localhost:3000");

        let config = GenieConfig::load().expect("config loads");
        assert_eq!(config.geocoding.result_limit, 8);
        assert_eq!(config.server.frontend_url, "http://localhost:3000");
        Ok(())
    });
}

#[test]
fn invalid_env_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("GENIE_GEOCODING__ENDPOINT", "ftp://nominatim");

        let err = GenieConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn zero_frame_limit_from_env_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("GENIE_RELAY__MAX_FRAME_BYTES", "0");

        let err = GenieConfig::load().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "relay.max_frame_bytes")
        );
        Ok(())
    });
}
