//! Backend API configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    String::from("http://localhost:8000")
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("labnet/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the search service (`/api/v1/search` is appended).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL for `PUT /api/profile`. Empty means "same as `base_url`".
    #[serde(default)]
    pub profile_base_url: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            profile_base_url: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Base URL used for profile saves.
    #[must_use]
    pub fn profile_url_base(&self) -> &str {
        if self.profile_base_url.is_empty() {
            &self.base_url
        } else {
            &self.profile_base_url
        }
    }

    /// Reject URLs without an http(s) scheme and a zero timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("api.base_url", &self.base_url)?;
        if !self.profile_base_url.is_empty() {
            check_url("api.profile_base_url", &self.profile_base_url)?;
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

fn check_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
        _ => Err(ConfigError::InvalidValue {
            field: field.into(),
            reason: format!("'{value}' is not an http(s) URL"),
        }),
    }
}
