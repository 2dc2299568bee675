use std::future::Future;

use lab_client::{ApiClient, ClientError};
use lab_core::entities::Researcher;

/// Anything that can answer a researcher query.
pub trait SearchBackend {
    /// Researchers matching `query`, in the backend's order.
    fn search_researchers(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Researcher>, ClientError>> + Send;
}

impl SearchBackend for ApiClient {
    fn search_researchers(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Researcher>, ClientError>> + Send {
        Self::search_researchers(self, query)
    }
}
