//! Persistence adapters for the session record.
//!
//! The session store only sees [`SessionStorage`]; the binary injects
//! [`FileStorage`] and tests inject [`MemoryStorage`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuthError;

/// Key/value storage for serialized client state.
pub trait SessionStorage: Send + Sync {
    /// Read the record stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, AuthError>;

    /// Overwrite the record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the backing store cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), AuthError>;
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// One `<key>.json` file per record inside `dir`.
///
/// The directory is created on first write with mode 0700 and each file is
/// written with mode 0600 on Unix.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if `key` contains anything other than
    /// ASCII alphanumerics, `-` and `_`.
    pub fn record_path(&self, key: &str) -> Result<PathBuf, AuthError> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AuthError::Storage(format!("invalid storage key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AuthError> {
        let path = self.record_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::Storage(format!("read {}: {e}", path.display()))),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let path = self.record_path(key)?;
        fs::create_dir_all(&self.dir)
            .map_err(|e| AuthError::Storage(format!("mkdir {}: {e}", self.dir.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }

        fs::write(&path, value)
            .map_err(|e| AuthError::Storage(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::Storage(format!("chmod {}: {e}", path.display())))?;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `key`, e.g. to simulate a record left by a previous run.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the internal lock is poisoned.
    pub fn seed(&self, key: &str, value: &str) -> Result<(), AuthError> {
        self.save(key, value)
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, AuthError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| AuthError::Storage(format!("lock poisoned: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| AuthError::Storage(format!("lock poisoned: {e}")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
