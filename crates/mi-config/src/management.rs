//! Management API endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default management API base of a locally running micro-integrator.
pub const DEFAULT_BASE_URL: &str = "https://localhost:9164/management";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ManagementConfig {
    /// Base URL of the management REST API, without a trailing resource path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ManagementConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ManagementConfig {
    /// Base URL with any trailing `/` removed.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check that the base URL is a usable absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the URL is empty or uses
    /// another scheme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.base();
        if base.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "management.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "management.base_url".into(),
                reason: format!("expected an http:// or https:// URL, got '{base}'"),
            });
        }
        Ok(())
    }
}
