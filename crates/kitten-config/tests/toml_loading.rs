//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and working-directory
//! manipulation.

use kitten_config::{ConfigError, KittenConfig};
use pretty_assertions::assert_eq;
use std::path::Path;

#[test]
fn loads_local_kitten_toml() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "kitten.toml",
            r#"
[database]
path = "/var/lib/rescue/weights.db"

[server]
host = "0.0.0.0"
port = 8080
cors_origins = ["http://localhost:5173"]

[general]
recent_weights_limit = 25
"#,
        )?;

        let config = KittenConfig::load(None).expect("config loads");
        assert_eq!(config.database.path, "/var/lib/rescue/weights.db");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.general.recent_weights_limit, 25);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("kitten.toml", "[server]\nport = 9000\n")?;

        let config = KittenConfig::load(None).expect("config loads");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.path, "kitten_weights.db");
        assert_eq!(config.general.recent_weights_limit, 10);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("kitten.toml", "[server]\nport = 9000\n")?;
        jail.set_env("KITTEN_SERVER__PORT", "9100");
        jail.set_env("KITTEN_DATABASE__PATH", ":memory:");

        let config = KittenConfig::load(None).expect("config loads");
        assert_eq!(config.server.port, 9100);
        assert!(config.database.is_in_memory());
        Ok(())
    });
}

#[test]
fn explicit_file_beats_local_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("kitten.toml", "[general]\nrecent_weights_limit = 5\n")?;
        jail.create_file("override.toml", "[general]\nrecent_weights_limit = 50\n")?;

        let config = KittenConfig::load(Some(Path::new("override.toml"))).expect("config loads");
        assert_eq!(config.general.recent_weights_limit, 50);
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    figment::Jail::expect_with(|_jail| {
        let result = KittenConfig::load(Some(Path::new("does-not-exist.toml")));
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("KITTEN_GENERAL__RECENT_WEIGHTS_LIMIT", "0");

        let result = KittenConfig::load(None);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_port_is_an_extraction_error() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("KITTEN_SERVER__PORT", "not-a-port");

        let result = KittenConfig::load(None);
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
