use lab_auth::AuthError;
use lab_client::ClientError;
use lab_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// The editor was opened without a signed-in user.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A local rule was broken (empty title, nothing staged, unknown item).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backend rejected or never received the save.
    #[error("profile save failed: {0}")]
    SaveFailed(#[source] ClientError),
}
