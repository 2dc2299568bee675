use std::future::Future;

use lab_client::{ApiClient, ClientError};
use lab_core::entities::Profile;

/// Where a finished profile is sent.
pub trait ProfileGateway {
    /// Store `profile` for the user identified by `token`.
    fn save_profile(
        &self,
        token: &str,
        profile: &Profile,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}

impl ProfileGateway for ApiClient {
    fn save_profile(
        &self,
        token: &str,
        profile: &Profile,
    ) -> impl Future<Output = Result<(), ClientError>> + Send {
        Self::save_profile(self, token, profile)
    }
}
