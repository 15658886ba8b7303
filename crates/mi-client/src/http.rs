//! Shared HTTP response helpers for the management client.
//!
//! Centralizes the status-code check and JSON decoding so endpoint modules
//! stay focused on URL construction.

use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on 2xx. Anything else becomes
/// [`ClientError::Api`] carrying the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Read the full body and decode it as `T`.
///
/// Decoding goes through `serde_json` directly so a malformed body surfaces as
/// [`ClientError::Parse`] instead of a transport error.
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}
