use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `lbn auth login`")]
    NotAuthenticated,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email is already registered: {0}")]
    DuplicateEmail(String),

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("session record is malformed: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}
