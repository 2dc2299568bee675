//! Runs searches in the background, last call wins.
//!
//! Submitting a new query aborts the task still waiting on the previous one.
//! An abort can race with a response that already arrived, so the session's
//! sequence guard stays the final word on what gets applied.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::backend::SearchBackend;
use crate::error::SearchError;
use crate::session::{Resolution, SearchSession};

pub struct SearchController<B> {
    session: Arc<Mutex<SearchSession>>,
    backend: Arc<B>,
    in_flight: Option<JoinHandle<Resolution>>,
}

impl<B> SearchController<B>
where
    B: SearchBackend + Send + Sync + 'static,
{
    #[must_use]
    pub fn new(backend: B, session: SearchSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            backend: Arc::new(backend),
            in_flight: None,
        }
    }

    /// Shared handle to the session, for rendering and selection.
    #[must_use]
    pub fn session(&self) -> Arc<Mutex<SearchSession>> {
        Arc::clone(&self.session)
    }

    /// Start a search for `query` in the background, cancelling any search
    /// still in flight. Returns `false` for a blank query.
    pub async fn submit(&mut self, query: &str) -> bool {
        let Some(ticket) = self.session.lock().await.begin(query) else {
            return false;
        };

        if let Some(previous) = self.in_flight.take() {
            previous.abort();
            tracing::debug!("previous search aborted");
        }

        let session = Arc::clone(&self.session);
        let backend = Arc::clone(&self.backend);
        self.in_flight = Some(tokio::spawn(async move {
            let outcome = backend.search_researchers(ticket.query()).await;
            session.lock().await.resolve(ticket, outcome)
        }));
        true
    }

    /// Wait for the latest search to finish. `Ok(None)` if none is running.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Task` if the search task panicked.
    pub async fn settle(&mut self) -> Result<Option<Resolution>, SearchError> {
        let Some(handle) = self.in_flight.take() else {
            return Ok(None);
        };
        handle
            .await
            .map(Some)
            .map_err(|e| SearchError::Task(e.to_string()))
    }
}

impl<B> Drop for SearchController<B> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
