//! # lab-profile
//!
//! The signed-in researcher's profile: editable fields, research interests,
//! and the ongoing/past research lists with their draft, commit and
//! two-phase delete protocol.

pub mod collection;
pub mod draft;
pub mod editor;
pub mod error;
pub mod gateway;
mod tags;

pub use collection::{Pending, ResearchCollection};
pub use draft::ResearchDraft;
pub use editor::ProfileEditor;
pub use error::ProfileError;
pub use gateway::ProfileGateway;
