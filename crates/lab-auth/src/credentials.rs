//! In-process credential set.
//!
//! Stands in for a real identity backend: records live in memory, passwords
//! are compared verbatim. Clones share the same underlying set, so a signup
//! through one store is visible to a login through another.

use std::fmt;
use std::sync::Arc;

use lab_core::entities::AuthUser;
use tokio::sync::RwLock;

use crate::error::AuthError;

/// Role assigned to every self-registered account.
pub const DEFAULT_ROLE: &str = "researcher";

#[derive(Clone)]
pub struct CredentialRecord {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: String,
}

impl CredentialRecord {
    /// Strip the password and attach a session token.
    #[must_use]
    pub fn to_user(&self, token: &str) -> AuthUser {
        AuthUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            token: token.to_string(),
        }
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct CredentialDirectory {
    records: Arc<RwLock<Vec<CredentialRecord>>>,
}

impl Default for CredentialDirectory {
    /// Directory seeded with the built-in test account
    /// (`test@example.com` / `password123`).
    fn default() -> Self {
        Self::with_records(vec![CredentialRecord {
            id: "1".into(),
            email: "test@example.com".into(),
            password: "password123".into(),
            name: "Test User".into(),
            role: DEFAULT_ROLE.into(),
        }])
    }
}

impl CredentialDirectory {
    #[must_use]
    pub fn with_records(records: Vec<CredentialRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    /// Find the record matching both `email` and `password` exactly.
    pub async fn authenticate(&self, email: &str, password: &str) -> Option<CredentialRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.email == email && r.password == password)
            .cloned()
    }

    pub async fn contains_email(&self, email: &str) -> bool {
        self.records.read().await.iter().any(|r| r.email == email)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Append a new record with the next sequential id and the default role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::DuplicateEmail` if `email` is already registered;
    /// the set is left unchanged.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<CredentialRecord, AuthError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.email == email) {
            return Err(AuthError::DuplicateEmail(email.to_string()));
        }
        let record = CredentialRecord {
            id: (records.len() + 1).to_string(),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            role: DEFAULT_ROLE.into(),
        };
        records.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_account_authenticates() {
        let dir = CredentialDirectory::default();
        let record = dir
            .authenticate("test@example.com", "password123")
            .await
            .expect("seeded account");
        assert_eq!(record.id, "1");
        assert_eq!(record.role, "researcher");
    }

    #[tokio::test]
    async fn wrong_password_does_not_match() {
        let dir = CredentialDirectory::default();
        assert!(dir.authenticate("test@example.com", "nope").await.is_none());
        assert!(dir.authenticate("TEST@example.com", "password123").await.is_none());
    }

    #[tokio::test]
    async fn register_assigns_sequential_ids() {
        let dir = CredentialDirectory::default();
        let a = dir.register("a@x.org", "pw", "A").await.unwrap();
        let b = dir.register("b@x.org", "pw", "B").await.unwrap();
        assert_eq!(a.id, "2");
        assert_eq!(b.id, "3");
        assert_eq!(dir.len().await, 3);
    }

    #[tokio::test]
    async fn duplicate_email_leaves_set_unchanged() {
        let dir = CredentialDirectory::default();
        let err = dir
            .register("test@example.com", "other", "Dup")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail(_)));
        assert_eq!(dir.len().await, 1);
    }

    #[tokio::test]
    async fn clones_share_records() {
        let dir = CredentialDirectory::empty();
        let clone = dir.clone();
        clone.register("a@x.org", "pw", "A").await.unwrap();
        assert!(dir.contains_email("a@x.org").await);
        assert!(!dir.is_empty().await);
    }

    #[test]
    fn debug_redacts_password() {
        let record = CredentialRecord {
            id: "1".into(),
            email: "e".into(),
            password: "hunter2".into(),
            name: "n".into(),
            role: DEFAULT_ROLE.into(),
        };
        let out = format!("{record:?}");
        assert!(!out.contains("hunter2"));
        assert!(out.contains("<redacted>"));
    }
}
