//! ID prefixes and generation.
//!
//! Client-generated identifiers follow the `{prefix}-{8 hex}` shape, e.g.
//! `rsi-a3f8b2c1`. They only need to be unique within one profile, so four
//! random bytes are plenty.

use crate::errors::CoreError;

/// Prefix for research item IDs.
pub const PREFIX_RESEARCH_ITEM: &str = "rsi";

/// Generate a new `{prefix}-{8 lowercase hex}` identifier.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("failed to read random bytes: {e}")))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

/// Check whether `id` has the `{prefix}-{8 hex}` shape.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| hex.len() == 8 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_has_expected_shape() {
        let id = generate_id(PREFIX_RESEARCH_ITEM).unwrap();
        assert!(id.starts_with("rsi-"), "ID should start with 'rsi-': {id}");
        assert_eq!(id.len(), 12, "3 prefix + 1 dash + 8 hex: {id}");
        assert!(has_prefix(&id, PREFIX_RESEARCH_ITEM));
    }

    #[test]
    fn generated_ids_differ() {
        let a = generate_id(PREFIX_RESEARCH_ITEM).unwrap();
        let b = generate_id(PREFIX_RESEARCH_ITEM).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn has_prefix_rejects_other_shapes() {
        assert!(!has_prefix("rsi-123", PREFIX_RESEARCH_ITEM));
        assert!(!has_prefix("usr-a3f8b2c1", PREFIX_RESEARCH_ITEM));
        assert!(!has_prefix("rsi-zzzzzzzz", PREFIX_RESEARCH_ITEM));
        assert!(!has_prefix("", PREFIX_RESEARCH_ITEM));
    }
}
