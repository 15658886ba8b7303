//! # mi-client
//!
//! HTTP client for the micro-integrator management REST API.
//!
//! Each call is a single GET against the configured base URL whose JSON body
//! is decoded into a typed `mi-core` entity. There are no retries and no
//! caching; a failed call is returned to the caller as [`ClientError`].

mod error;
mod http;
pub mod tasks;

pub use error::ClientError;
pub use tasks::TaskApi;

use mi_config::MiConfig;
use serde::de::DeserializeOwned;

use crate::http::{check_response, decode_json};

/// Client bound to one management API base URL.
#[derive(Debug, Clone)]
pub struct ManagementClient {
    http: reqwest::Client,
    base: String,
}

impl ManagementClient {
    /// Build a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialization failure).
    pub fn new(config: &MiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.http.user_agent.as_str())
            .timeout(config.http.timeout())
            .danger_accept_invalid_certs(config.http.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            base: config.management.base().to_string(),
        })
    }

    /// Management API base URL, without a trailing `/`.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Join a resource path (starting with `/`) onto the base URL.
    #[must_use]
    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base)
    }

    /// GET `url` and decode the JSON response as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the URL is malformed, the request fails,
    /// the server answers with a non-success status, or the body does not
    /// decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ClientError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(url = %parsed, "management API request");
        let resp = self
            .http
            .get(parsed)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let resp = check_response(resp).await?;
        decode_json(resp).await
    }
}
