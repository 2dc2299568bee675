//! Persisted client state location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_key() -> String {
    String::from("auth-storage")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding persisted records. Empty means `~/.labnet`.
    #[serde(default)]
    pub dir: String,

    /// Key the session record is stored under.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// Resolve the storage directory. `None` if no override is set and the
    /// home directory cannot be determined.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.is_empty() {
            dirs::home_dir().map(|home| home.join(".labnet"))
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_matches_persisted_record_name() {
        assert_eq!(StorageConfig::default().key, "auth-storage");
    }

    #[test]
    fn explicit_dir_wins() {
        let config = StorageConfig {
            dir: "/tmp/labnet-test".into(),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_dir(),
            Some(PathBuf::from("/tmp/labnet-test"))
        );
    }

    #[test]
    fn default_dir_is_under_home() {
        if let Some(dir) = StorageConfig::default().resolved_dir() {
            assert!(dir.ends_with(".labnet"));
        }
    }
}
