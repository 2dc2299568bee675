//! Shared HTTP response helpers.
//!
//! Centralizes the status-code check so the endpoint methods stay focused on
//! request construction and response mapping.

use crate::error::ClientError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on 2xx; otherwise [`ClientError::Api`] with
/// the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
