use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Authenticated user held by the session store.
///
/// The credential password is stripped before a record becomes an `AuthUser`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    /// Placeholder bearer token sent with profile saves.
    pub token: String,
}
