//! Session state and its persisted form.

use lab_core::entities::AuthUser;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Version written into the persisted envelope. Records with another version
/// are ignored on startup.
pub const PERSIST_VERSION: u32 = 0;

/// Full observable state of the session store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub user: Option<AuthUser>,
    pub token: Option<String>,
    /// Always equal to `user.is_some()`.
    pub is_authenticated: bool,
    pub is_loading: bool,
    /// Message from the last failed operation, until cleared.
    pub error: Option<String>,
    pub signup_success: bool,
}

impl SessionState {
    /// Subset of the state that survives a restart.
    #[must_use]
    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            token: self.token.clone(),
            is_authenticated: self.is_authenticated,
        }
    }

    /// Rebuild state from a persisted record. Transient flags start cleared
    /// and `is_authenticated` is re-derived from the user.
    #[must_use]
    pub fn rehydrate(persisted: PersistedSession) -> Self {
        let is_authenticated = persisted.user.is_some();
        Self {
            token: if is_authenticated { persisted.token } else { None },
            user: persisted.user,
            is_authenticated,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

/// `{"state": {...}, "version": 0}` as written to storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Envelope {
    state: PersistedSession,
    version: u32,
}

/// Serialize the persisted subset inside a versioned envelope.
///
/// # Errors
///
/// Returns `AuthError::MalformedRecord` if serialization fails.
pub fn encode_record(session: &PersistedSession) -> Result<String, AuthError> {
    let envelope = Envelope {
        state: session.clone(),
        version: PERSIST_VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a stored record. `Ok(None)` for a record from another version.
///
/// # Errors
///
/// Returns `AuthError::MalformedRecord` if the text is not a valid envelope.
pub fn decode_record(raw: &str) -> Result<Option<PersistedSession>, AuthError> {
    let envelope: Envelope = serde_json::from_str(raw)?;
    if envelope.version != PERSIST_VERSION {
        return Ok(None);
    }
    Ok(Some(envelope.state))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn user() -> AuthUser {
        AuthUser {
            id: "1".into(),
            email: "test@example.com".into(),
            name: "Test User".into(),
            role: "researcher".into(),
            token: "mock-jwt-token".into(),
        }
    }

    #[test]
    fn record_uses_camel_case_envelope() {
        let session = PersistedSession {
            user: Some(user()),
            token: Some("mock-jwt-token".into()),
            is_authenticated: true,
        };
        let raw = encode_record(&session).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 0);
        assert_eq!(value["state"]["isAuthenticated"], true);
        assert_eq!(value["state"]["user"]["email"], "test@example.com");
        assert_eq!(decode_record(&raw).unwrap(), Some(session));
    }

    #[test]
    fn other_version_is_ignored() {
        let raw = r#"{"state":{"user":null,"token":null,"isAuthenticated":false},"version":7}"#;
        assert_eq!(decode_record(raw).unwrap(), None);
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            decode_record("not json"),
            Err(AuthError::MalformedRecord(_))
        ));
    }

    #[test]
    fn rehydrate_derives_authentication_from_user() {
        let stale = PersistedSession {
            user: None,
            token: Some("leftover".into()),
            is_authenticated: true,
        };
        let state = SessionState::rehydrate(stale);
        assert!(!state.is_authenticated);
        assert!(state.token.is_none());

        let state = SessionState::rehydrate(PersistedSession {
            user: Some(user()),
            token: Some("mock-jwt-token".into()),
            is_authenticated: false,
        });
        assert!(state.is_authenticated);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }
}
