//! # lab-config
//!
//! Layered configuration loading for Labnet using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LABNET_*` prefix, `__` as separator)
//! 2. Project-level `.labnet/config.toml`
//! 3. User-level `~/.config/labnet/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LABNET_API__BASE_URL` -> `api.base_url`,
//! `LABNET_STORAGE__DIR` -> `storage.dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lab_config::LabConfig;
//!
//! let config = LabConfig::load_with_dotenv().expect("config");
//! println!("search endpoint: {}/api/v1/search", config.api.base_url);
//! ```

mod api;
mod error;
mod general;
mod storage;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LabConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LabConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed and
    /// `ConfigError::InvalidValue` if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".labnet/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LABNET_").split("__"))
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("labnet").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = LabConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage.key, "auth-storage");
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: LabConfig = LabConfig::figment().extract()?;
            assert_eq!(config.api.timeout_secs, 10);
            Ok(())
        });
    }
}
