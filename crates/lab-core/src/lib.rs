//! # lab-core
//!
//! Core types, ID generation, and error types for Labnet.
//!
//! This crate provides the foundational types shared across all Labnet crates:
//! - Entity structs for the session user, profiles, research items and
//!   researcher search results
//! - Enums naming the two research lists and the two rendered result lists
//! - ID prefix constants and formatting helpers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;

pub use errors::CoreError;
