use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ResearchItem;
use crate::enums::ResearchList;
use crate::errors::CoreError;

/// Editable profile of the signed-in researcher. Also the body of the
/// profile save request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub research_interests: Vec<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub ongoing_research: Vec<ResearchItem>,
    #[serde(default)]
    pub past_research: Vec<ResearchItem>,
}

impl Profile {
    /// Empty profile seeded with the identity of the session user.
    #[must_use]
    pub fn for_user(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn research(&self, list: ResearchList) -> &[ResearchItem] {
        match list {
            ResearchList::Ongoing => &self.ongoing_research,
            ResearchList::Past => &self.past_research,
        }
    }

    /// Check every research item in both lists.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first offending list and index.
    pub fn validate(&self) -> Result<(), CoreError> {
        for list in ResearchList::ALL {
            for (index, item) in self.research(list).iter().enumerate() {
                item.validate().map_err(|_| {
                    CoreError::Validation(format!(
                        "{}[{index}] has an empty title",
                        list.field_name()
                    ))
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_user_seeds_identity_only() {
        let profile = Profile::for_user("Test User", "test@example.com");
        assert_eq!(profile.name, "Test User");
        assert_eq!(profile.email, "test@example.com");
        assert!(profile.ongoing_research.is_empty());
        assert!(profile.profile_image.is_none());
    }

    #[test]
    fn validate_names_offending_item() {
        let mut profile = Profile::for_user("a", "b");
        profile.past_research.push(ResearchItem::new("ok"));
        profile.past_research.push(ResearchItem::new(""));
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("past_research[1]"), "{err}");
    }

    #[test]
    fn research_selects_list() {
        let mut profile = Profile::default();
        profile.ongoing_research.push(ResearchItem::new("a"));
        assert_eq!(profile.research(ResearchList::Ongoing).len(), 1);
        assert!(profile.research(ResearchList::Past).is_empty());
    }
}
