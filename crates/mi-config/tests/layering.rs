//! Integration tests for TOML + environment layering.
//!
//! Uses `figment::Jail` for sandboxed working directory and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use mi_config::{ConfigError, MiConfig};

/// Point the user-global config dir at the jail so a developer's real
/// `~/.config/mi/config.toml` never leaks into a test.
fn isolate_home(jail: &mut Jail) {
    let dir = jail.directory().to_path_buf();
    jail.set_env("HOME", dir.display());
    jail.set_env("XDG_CONFIG_HOME", dir.join(".config").display());
}

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[management]
base_url = "https://mi.example.com:9164/management"

[http]
timeout_secs = 3
accept_invalid_certs = false
"#,
        )?;

        let config: MiConfig = Figment::from(Serialized::defaults(MiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.management.base_url,
            "https://mi.example.com:9164/management"
        );
        assert_eq!(config.http.timeout_secs, 3);
        assert!(!config.http.accept_invalid_certs);
        assert!(config.http.user_agent.starts_with("mi-cli/"));
        Ok(())
    });
}

#[test]
fn defaults_without_any_source() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        let config = MiConfig::load().expect("defaults load");
        assert_eq!(config.management.base(), mi_config::DEFAULT_BASE_URL);
        assert_eq!(config.http.timeout_secs, 10);
        Ok(())
    });
}

#[test]
fn project_file_beats_user_file() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_dir(".config/mi")?;
        jail.create_file(
            ".config/mi/config.toml",
            r#"
[management]
base_url = "http://global:9164/management"

[http]
timeout_secs = 30
"#,
        )?;
        jail.create_dir(".mi")?;
        jail.create_file(
            ".mi/config.toml",
            r#"
[management]
base_url = "http://project:9164/management"
"#,
        )?;

        let config = MiConfig::load().expect("config loads");
        assert_eq!(config.management.base(), "http://project:9164/management");
        assert_eq!(config.http.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_dir(".mi")?;
        jail.create_file(
            ".mi/config.toml",
            r#"
[management]
base_url = "http://project:9164/management"
"#,
        )?;
        jail.set_env("MI_MANAGEMENT__BASE_URL", "http://from-env:9164/management");
        jail.set_env("MI_HTTP__TIMEOUT_SECS", "2");

        let config = MiConfig::load().expect("config loads");
        assert_eq!(config.management.base(), "http://from-env:9164/management");
        assert_eq!(config.http.timeout_secs, 2);
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.set_env("MI_MANAGEMENT__BASE_URL", "localhost:9164");

        let err = MiConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_surfaces_figment_error() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_dir(".mi")?;
        jail.create_file(".mi/config.toml", "[http]\ntimeout_secs = \"soon\"\n")?;

        let err = MiConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
