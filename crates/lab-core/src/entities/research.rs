use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::{PREFIX_RESEARCH_ITEM, generate_id};

/// A titled record of the equipment and reagents used by one research effort.
///
/// `id` is assigned on the client when the item enters a collection and never
/// leaves it: payloads from the search endpoint carry no id, so it defaults to
/// empty, and it is not written into profile bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResearchItem {
    #[serde(default, skip_serializing)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub reagents: Vec<String>,
}

impl ResearchItem {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_equipment<I, S>(mut self, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipment = equipment.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_reagents<I, S>(mut self, reagents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reagents = reagents.into_iter().map(Into::into).collect();
        self
    }

    /// An item may only be stored when its title is non-empty.
    ///
    /// Equipment and reagent labels are not checked; empty slots are allowed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title is empty or whitespace.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation(
                "research item title must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Assign a fresh id if the item has none. Returns the id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Other` if id generation fails.
    pub fn ensure_id(&mut self) -> Result<&str, CoreError> {
        if self.id.is_empty() {
            self.id = generate_id(PREFIX_RESEARCH_ITEM)?;
        }
        Ok(&self.id)
    }
}
