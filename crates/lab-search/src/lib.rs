//! # lab-search
//!
//! Researcher search for Labnet.
//!
//! - [`SearchSession`]: the `Idle -> Searching -> Results` state machine,
//!   the request-sequence guard, and one card selection slot per rendered
//!   list
//! - [`fallback`]: the fixed sample set shown when a search fails
//! - [`SearchController`]: background searches where a new query aborts
//!   the one in flight

pub mod backend;
pub mod controller;
pub mod error;
pub mod fallback;
pub mod selection;
pub mod session;

pub use backend::SearchBackend;
pub use controller::SearchController;
pub use error::SearchError;
pub use selection::Selection;
pub use session::{ResultSource, Resolution, SearchPhase, SearchSession, SearchTicket};
