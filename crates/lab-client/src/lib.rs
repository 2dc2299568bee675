//! # lab-client
//!
//! HTTP client for the Labnet backend.
//!
//! Two endpoints are used:
//! - `GET  {base_url}/api/v1/search?query=<urlencoded>` returns a JSON array
//!   of researcher records
//! - `PUT  {profile_base_url}/api/profile` with `Authorization: Bearer <token>`
//!   and the profile as JSON body

mod error;
mod http;

pub use error::ClientError;

use lab_config::ApiConfig;
use lab_core::entities::{Profile, Researcher};

/// HTTP client for the search and profile endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    profile_base_url: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` if the underlying `reqwest::Client` fails
    /// to build (e.g. no TLS backend available).
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            profile_base_url: config.profile_url_base().trim_end_matches('/').to_string(),
        })
    }

    /// Full search URL for `query`, percent-encoded.
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/api/v1/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }

    #[must_use]
    pub fn profile_url(&self) -> String {
        format!("{}/api/profile", self.profile_base_url)
    }

    /// Run a researcher search. Results are returned in server order.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` on transport failure, `ClientError::Api`
    /// on a non-2xx status, and `ClientError::Parse` if the body is not a
    /// JSON array of researchers.
    pub async fn search_researchers(&self, query: &str) -> Result<Vec<Researcher>, ClientError> {
        let url = self.search_url(query);
        tracing::debug!(%url, "search request");

        let resp = self.http.get(&url).send().await?;
        let resp = http::check_response(resp).await?;
        let body = resp.text().await?;
        let researchers: Vec<Researcher> =
            serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))?;

        tracing::debug!(count = researchers.len(), "search response");
        Ok(researchers)
    }

    /// Save the profile of the user identified by `token`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Http` on transport failure and `ClientError::Api`
    /// on a non-2xx status.
    pub async fn save_profile(&self, token: &str, profile: &Profile) -> Result<(), ClientError> {
        let resp = self
            .http
            .put(self.profile_url())
            .bearer_auth(token)
            .json(profile)
            .send()
            .await?;
        http::check_response(resp).await?;
        Ok(())
    }
}
