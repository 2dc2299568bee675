//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use lab_config::LabConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://search.example.org"
profile_base_url = "https://app.example.org"
timeout_secs = 3
user_agent = "labnet-test"
"#,
        )?;

        let config: LabConfig = Figment::from(Serialized::defaults(LabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://search.example.org");
        assert_eq!(config.api.profile_url_base(), "https://app.example.org");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.user_agent, "labnet-test");
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
dir = "/var/lib/labnet"
"#,
        )?;

        let config: LabConfig = Figment::from(Serialized::defaults(LabConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.storage.dir, "/var/lib/labnet");
        assert_eq!(config.storage.key, "auth-storage");
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".labnet")?;
        jail.create_file(
            ".labnet/config.toml",
            r#"
[general]
default_limit = 5
"#,
        )?;

        let config = LabConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_base_url() {
    Jail::expect_with(|jail| {
        jail.create_dir(".labnet")?;
        jail.create_file(
            ".labnet/config.toml",
            r#"
[api]
base_url = "ftp://files.example.org"
"#,
        )?;

        let err = LabConfig::load().unwrap_err();
        assert!(err.to_string().contains("api.base_url"), "{err}");
        Ok(())
    });
}
