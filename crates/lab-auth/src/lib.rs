//! # lab-auth
//!
//! Session state for the Labnet client.
//!
//! Provides the [`SessionStore`] (login, signup, logout, subscribe), the
//! in-process [`CredentialDirectory`] it authenticates against, pluggable
//! persistence ([`SessionStorage`] with file and in-memory adapters) so a
//! session survives restarts, and the route [`guard`].

pub mod credentials;
pub mod error;
pub mod guard;
pub mod state;
pub mod storage;
pub mod store;

pub use credentials::CredentialDirectory;
pub use error::AuthError;
pub use guard::{Route, guard};
pub use state::SessionState;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{DEFAULT_STORAGE_KEY, SessionStore, SignupOutcome, SubscriptionId};
