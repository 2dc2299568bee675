use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::ResearchItem;

/// Papers shown on an expanded researcher card.
pub const PAPER_PREVIEW_LEN: usize = 2;

/// A paper attached to a search result.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Paper {
    pub title: String,
}

/// Read-only researcher snapshot returned by the search endpoint.
///
/// Only `user_id`, `email` and `name` are required; every list defaults to
/// empty so sparse server records still parse.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Researcher {
    pub user_id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub google_scholar_id: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    /// ISO-8601 timestamp as sent by the server; kept verbatim.
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub current_interests: Vec<String>,
    #[serde(default)]
    pub ongoing_research: Vec<ResearchItem>,
    #[serde(default)]
    pub past_research: Vec<ResearchItem>,
    #[serde(default)]
    pub papers: Vec<Paper>,
}

impl Researcher {
    /// First character of the name, shown when there is no profile image.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }

    /// `created_at` parsed as RFC 3339. `None` if absent or unparsable.
    #[must_use]
    pub fn member_since(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Google Scholar citations page, if a scholar id is known.
    #[must_use]
    pub fn scholar_url(&self) -> Option<String> {
        self.google_scholar_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("https://scholar.google.com/citations?user={id}"))
    }

    /// The first papers, as shown on an expanded card.
    #[must_use]
    pub fn paper_preview(&self) -> &[Paper] {
        &self.papers[..self.papers.len().min(PAPER_PREVIEW_LEN)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_record_parses() {
        let researcher: Researcher = serde_json::from_str(
            r#"{"user_id":"u1","email":"a@b.c","name":"Ada","papers":[{"title":"On engines"}]}"#,
        )
        .unwrap();
        assert_eq!(researcher.papers.len(), 1);
        assert!(researcher.affiliation.is_none());
        assert!(researcher.ongoing_research.is_empty());
    }

    #[test]
    fn initial_is_first_char() {
        let researcher: Researcher =
            serde_json::from_str(r#"{"user_id":"u1","email":"a@b.c","name":"김연구"}"#).unwrap();
        assert_eq!(researcher.initial(), Some('김'));
    }

    #[test]
    fn member_since_parses_or_gives_up() {
        let mut researcher: Researcher = serde_json::from_str(
            r#"{"user_id":"u1","email":"a@b.c","name":"Ada","created_at":"2024-01-15T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(
            researcher.member_since().map(|dt| dt.to_rfc3339()),
            Some("2024-01-15T09:00:00+00:00".to_string())
        );

        researcher.created_at = Some("last tuesday".into());
        assert!(researcher.member_since().is_none());
    }

    #[test]
    fn scholar_link_and_paper_preview() {
        let researcher: Researcher = serde_json::from_str(
            r#"{"user_id":"u1","email":"a@b.c","name":"Ada","google_scholar_id":"mzFEJVIAAAAJ",
                "papers":[{"title":"One"},{"title":"Two"},{"title":"Three"}]}"#,
        )
        .unwrap();
        assert_eq!(
            researcher.scholar_url().as_deref(),
            Some("https://scholar.google.com/citations?user=mzFEJVIAAAAJ")
        );
        let titles: Vec<_> = researcher.paper_preview().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }
}
