//! The session store: authentication state, its operations, and persistence.
//!
//! Every mutation goes through [`SessionStore::set`], which applies the
//! change, writes the persisted subset to storage and notifies subscribers.
//! `&mut self` on every operation serializes callers, so there is no way to
//! start a second login while the first is still awaiting the directory.

use std::fmt;
use std::sync::Arc;

use lab_core::entities::AuthUser;

use crate::credentials::CredentialDirectory;
use crate::error::AuthError;
use crate::state::{SessionState, decode_record, encode_record};
use crate::storage::SessionStorage;

/// Default key the session record is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "auth-storage";

/// Placeholder token issued on successful login.
pub const PLACEHOLDER_TOKEN: &str = "mock-jwt-token";

pub const LOGIN_FAILED_MESSAGE: &str = "invalid email or password";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "email is already registered";

type Listener = Box<dyn Fn(&SessionState) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Result of [`SessionStore::signup`]. A rejected signup is not an error; the
/// reason is left in [`SessionState::error`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum SignupOutcome {
    Registered { user_id: String },
    Rejected,
}

pub struct SessionStore {
    state: SessionState,
    credentials: CredentialDirectory,
    storage: Arc<dyn SessionStorage>,
    key: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("key", &self.key)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Open the store, restoring any session persisted under `key`.
    ///
    /// An unreadable, malformed or other-version record is logged and
    /// treated as "no prior session".
    pub fn open(
        credentials: CredentialDirectory,
        storage: Arc<dyn SessionStorage>,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let state = match storage.load(&key) {
            Ok(Some(raw)) => match decode_record(&raw) {
                Ok(Some(persisted)) => SessionState::rehydrate(persisted),
                Ok(None) => {
                    tracing::warn!(%key, "ignoring session record from another version");
                    SessionState::default()
                }
                Err(error) => {
                    tracing::warn!(%key, %error, "ignoring malformed session record");
                    SessionState::default()
                }
            },
            Ok(None) => SessionState::default(),
            Err(error) => {
                tracing::warn!(%key, %error, "failed to read session record; starting signed out");
                SessionState::default()
            }
        };

        tracing::debug!(
            %key,
            authenticated = state.is_authenticated,
            "session store opened"
        );

        Self {
            state,
            credentials,
            storage,
            key,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    #[must_use]
    pub const fn user(&self) -> Option<&AuthUser> {
        self.state.user.as_ref()
    }

    #[must_use]
    pub const fn credentials(&self) -> &CredentialDirectory {
        &self.credentials
    }

    /// Navigation guard for views that need a signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` when no user is signed in.
    pub fn require_authenticated(&self) -> Result<&AuthUser, AuthError> {
        self.state.user.as_ref().ok_or(AuthError::NotAuthenticated)
    }

    /// Register `listener` to be called with the new state after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Sign in with an exact `(email, password)` match.
    ///
    /// Checking for empty inputs is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` when no record matches. The
    /// store's `error` is set and any existing session is left as it was.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        self.set(|s| {
            s.is_loading = true;
            s.error = None;
        });

        if let Some(record) = self.credentials.authenticate(email, password).await {
            let user = record.to_user(PLACEHOLDER_TOKEN);
            tracing::info!(user_id = %user.id, "login succeeded");
            self.set(|s| {
                s.user = Some(user);
                s.token = Some(PLACEHOLDER_TOKEN.to_string());
                s.is_authenticated = true;
                s.is_loading = false;
            });
            Ok(())
        } else {
            tracing::warn!("login rejected: no matching credentials");
            self.set(|s| {
                s.error = Some(LOGIN_FAILED_MESSAGE.to_string());
                s.is_loading = false;
            });
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Register a new account. Does not sign in.
    pub async fn signup(&mut self, email: &str, password: &str, name: &str) -> SignupOutcome {
        self.set(|s| {
            s.is_loading = true;
            s.error = None;
        });

        match self.credentials.register(email, password, name).await {
            Ok(record) => {
                tracing::info!(user_id = %record.id, "signup succeeded");
                self.set(|s| {
                    s.is_loading = false;
                    s.signup_success = true;
                });
                SignupOutcome::Registered { user_id: record.id }
            }
            Err(error) => {
                tracing::warn!(%error, "signup rejected");
                self.set(|s| {
                    s.error = Some(DUPLICATE_EMAIL_MESSAGE.to_string());
                    s.is_loading = false;
                });
                SignupOutcome::Rejected
            }
        }
    }

    /// Drop the session. Calling it again leaves the same state.
    pub fn logout(&mut self) {
        if let Some(user) = &self.state.user {
            tracing::info!(user_id = %user.id, "logout");
        }
        self.set(|s| {
            s.user = None;
            s.token = None;
            s.is_authenticated = false;
            s.error = None;
        });
    }

    pub fn clear_error(&mut self) {
        self.set(|s| s.error = None);
    }

    pub fn clear_signup_success(&mut self) {
        self.set(|s| s.signup_success = false);
    }

    /// Apply a mutation, persist, then notify subscribers.
    ///
    /// A failed write is logged; the in-memory transition stands.
    fn set(&mut self, mutate: impl FnOnce(&mut SessionState)) {
        mutate(&mut self.state);
        debug_assert_eq!(self.state.is_authenticated, self.state.user.is_some());

        if let Err(error) = encode_record(&self.state.persisted())
            .and_then(|raw| self.storage.save(&self.key, &raw))
        {
            tracing::warn!(key = %self.key, %error, "failed to persist session");
        }

        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }
}
