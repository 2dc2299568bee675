//! List selectors for Labnet.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ResearchList
// ---------------------------------------------------------------------------

/// One of the two named research lists a profile owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResearchList {
    Ongoing,
    Past,
}

impl ResearchList {
    pub const ALL: [Self; 2] = [Self::Ongoing, Self::Past];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Past => "past",
        }
    }

    /// Field name of this list in the profile payload.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing_research",
            Self::Past => "past_research",
        }
    }
}

impl fmt::Display for ResearchList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResearchList {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ongoing" | "ongoing_research" => Ok(Self::Ongoing),
            "past" | "past_research" => Ok(Self::Past),
            other => Err(CoreError::Validation(format!(
                "unknown research list '{other}' (expected 'ongoing' or 'past')"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ResultList
// ---------------------------------------------------------------------------

/// A rendered list of researcher cards. Each list owns its own selection slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultList {
    SearchResults,
    SimilarResearchers,
}

impl ResultList {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchResults => "search_results",
            Self::SimilarResearchers => "similar_researchers",
        }
    }
}

impl fmt::Display for ResultList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
