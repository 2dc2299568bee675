//! Search state machine with per-list card selection.
//!
//! `Idle -> Searching -> Results`. A failed request still ends in `Results`,
//! holding the fallback sample set and tagged [`ResultSource::Fallback`].
//!
//! Every request gets a sequence number. Only the newest request may apply
//! its outcome; older ones resolve as [`Resolution::Stale`] and are dropped.

use std::fmt;

use lab_client::ClientError;
use lab_core::entities::Researcher;
use lab_core::enums::ResultList;
use serde::Serialize;

use crate::backend::SearchBackend;
use crate::error::SearchError;
use crate::fallback::sample_researchers;
use crate::selection::Selection;

/// Where the current result list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultSource {
    Live,
    Fallback,
}

impl fmt::Display for ResultSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching {
        query: String,
        request_id: u64,
    },
    Results {
        query: String,
        researchers: Vec<Researcher>,
        source: ResultSource,
    },
}

/// Handle for one outstanding request, redeemed by [`SearchSession::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    request_id: u64,
    query: String,
}

impl SearchTicket {
    #[must_use]
    pub const fn request_id(&self) -> u64 {
        self.request_id
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was started; the outcome was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    phase: SearchPhase,
    latest_request: u64,
    results_selection: Selection,
    similar: Vec<Researcher>,
    similar_selection: Selection,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// Idle session whose similar-researchers list is the sample set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: SearchPhase::Idle,
            latest_request: 0,
            results_selection: Selection::default(),
            similar: sample_researchers(),
            similar_selection: Selection::default(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    #[must_use]
    pub const fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    /// Source of the current search results, once there are any.
    #[must_use]
    pub const fn source(&self) -> Option<ResultSource> {
        match &self.phase {
            SearchPhase::Results { source, .. } => Some(*source),
            _ => None,
        }
    }

    /// Cards currently rendered in `list`.
    #[must_use]
    pub fn results(&self, list: ResultList) -> &[Researcher] {
        match (list, &self.phase) {
            (ResultList::SearchResults, SearchPhase::Results { researchers, .. }) => {
                researchers.as_slice()
            }
            (ResultList::SearchResults, _) => &[],
            (ResultList::SimilarResearchers, _) => self.similar.as_slice(),
        }
    }

    /// Start a request for `query`. Returns `None` and changes nothing if the
    /// query is blank.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        if query.trim().is_empty() {
            return None;
        }
        self.latest_request += 1;
        let ticket = SearchTicket {
            request_id: self.latest_request,
            query: query.to_string(),
        };
        tracing::debug!(request_id = ticket.request_id, query, "search started");
        self.phase = SearchPhase::Searching {
            query: ticket.query.clone(),
            request_id: ticket.request_id,
        };
        Some(ticket)
    }

    /// Apply the outcome of the request behind `ticket`.
    ///
    /// Errors are not returned: they switch the results to the fallback set.
    pub fn resolve(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<Researcher>, ClientError>,
    ) -> Resolution {
        if ticket.request_id != self.latest_request || !self.is_searching() {
            tracing::debug!(
                request_id = ticket.request_id,
                latest = self.latest_request,
                "dropping stale search response"
            );
            return Resolution::Stale;
        }

        let (researchers, source) = match outcome {
            Ok(researchers) => (researchers, ResultSource::Live),
            Err(e) => {
                tracing::warn!(query = %ticket.query, error = %e, "search failed; showing sample researchers");
                (sample_researchers(), ResultSource::Fallback)
            }
        };
        tracing::debug!(count = researchers.len(), %source, "search results applied");

        self.phase = SearchPhase::Results {
            query: ticket.query,
            researchers,
            source,
        };
        self.results_selection.clear();
        Resolution::Applied
    }

    /// Run one search against `backend` from start to finish.
    /// Returns `None` for a blank query.
    pub async fn search<B: SearchBackend>(
        &mut self,
        backend: &B,
        query: &str,
    ) -> Option<Resolution> {
        let ticket = self.begin(query)?;
        let outcome = backend.search_researchers(ticket.query()).await;
        Some(self.resolve(ticket, outcome))
    }

    /// Expand card `index` of `list`, or collapse it if it is already
    /// expanded. Returns the new selection. The other list is not affected.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::SelectionOutOfRange` if `list` has no card at
    /// `index`; the selection is left unchanged.
    pub fn select_for_detail(
        &mut self,
        list: ResultList,
        index: usize,
    ) -> Result<Option<usize>, SearchError> {
        let len = self.results(list).len();
        if index >= len {
            return Err(SearchError::SelectionOutOfRange { list, index, len });
        }
        Ok(self.selection_mut(list).toggle(index))
    }

    #[must_use]
    pub const fn selected(&self, list: ResultList) -> Option<usize> {
        match list {
            ResultList::SearchResults => self.results_selection.index(),
            ResultList::SimilarResearchers => self.similar_selection.index(),
        }
    }

    /// The researcher whose card is expanded in `list`.
    #[must_use]
    pub fn expanded(&self, list: ResultList) -> Option<&Researcher> {
        self.selected(list)
            .and_then(|index| self.results(list).get(index))
    }

    pub const fn collapse(&mut self, list: ResultList) {
        self.selection_mut(list).clear();
    }

    /// Replace the similar-researchers list and clear its selection.
    pub fn set_similar(&mut self, researchers: Vec<Researcher>) {
        self.similar = researchers;
        self.similar_selection.clear();
    }

    const fn selection_mut(&mut self, list: ResultList) -> &mut Selection {
        match list {
            ResultList::SearchResults => &mut self.results_selection,
            ResultList::SimilarResearchers => &mut self.similar_selection,
        }
    }
}
