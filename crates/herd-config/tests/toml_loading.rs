//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and cwd manipulation.

use figment::Jail;
use herd_config::{ConfigError, HerdConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_local_herd_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "herd.toml",
            r#"
[database]
path = "/var/lib/herd/livestock.db"

[server]
host = "0.0.0.0"
port = 8080
cors_max_age_secs = 60

[analytics]
underweight_kg = 120.0
low_feed = 75.5
low_water = 40.0
"#,
        )?;

        let config = HerdConfig::load().expect("config loads");

        assert_eq!(config.database.path, "/var/lib/herd/livestock.db");
        assert!(!config.database.is_remote());
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.server.cors_max_age_secs, 60);
        assert!((config.analytics.underweight_kg - 120.0).abs() < f64::EPSILON);
        assert!((config.analytics.low_feed - 75.5).abs() < f64::EPSILON);
        assert!((config.analytics.low_water - 40.0).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "herd.toml",
            r#"
[analytics]
low_water = 10.0
"#,
        )?;

        let config = HerdConfig::load().expect("config loads");

        assert!((config.analytics.low_water - 10.0).abs() < f64::EPSILON);
        assert!((config.analytics.low_feed - 100.0).abs() < f64::EPSILON);
        assert!((config.analytics.underweight_kg - 100.0).abs() < f64::EPSILON);
        assert_eq!(config.server.port, 5000);
        Ok(())
    });
}

#[test]
fn invalid_port_in_toml_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "herd.toml",
            r#"
[server]
port = 0
"#,
        )?;

        let err = HerdConfig::load().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.port"),
            "unexpected error: {err}"
        );
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("herd.toml", "[server\nport = ")?;

        let err = HerdConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)), "unexpected error: {err}");
        Ok(())
    });
}
