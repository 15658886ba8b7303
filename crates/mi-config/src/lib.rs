//! # mi-config
//!
//! Layered configuration loading for the `mi` CLI using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MI_*` prefix, `__` as separator)
//! 2. Project-level `.mi/config.toml`
//! 3. User-level `~/.config/mi/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MI_MANAGEMENT__BASE_URL` -> `management.base_url`,
//! `MI_HTTP__TIMEOUT_SECS` -> `http.timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use mi_config::MiConfig;
//!
//! let config = MiConfig::load_with_dotenv().expect("config");
//! println!("management API: {}", config.management.base());
//! ```

mod error;
mod http;
mod management;

pub use error::ConfigError;
pub use http::HttpConfig;
pub use management::{DEFAULT_BASE_URL, ManagementConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config path, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".mi/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MiConfig {
    #[serde(default)]
    pub management: ManagementConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl MiConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`MiConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.management.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`MiConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("MI_").split("__"))
    }

    /// Replace the management API base, e.g. from a `--base-url` flag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the new base is not an http(s) URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        self.management.base_url = base_url.to_string();
        self.management.validate()?;
        Ok(self)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mi").join("config.toml"))
    }
}
