//! Search error types for lab-search.

use lab_core::enums::ResultList;

/// Errors from the search session and its controller.
///
/// Backend failures are not here: a failed search degrades to the fallback
/// set instead of surfacing an error.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A card index outside the rendered list was selected.
    #[error("{list} has no entry {index} (showing {len})")]
    SelectionOutOfRange {
        list: ResultList,
        index: usize,
        len: usize,
    },

    /// The spawned search task panicked.
    #[error("search task failed: {0}")]
    Task(String),
}
