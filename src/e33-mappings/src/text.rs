//! Localized display-name resolution.
//!
//! DataTable rows carry display names as localized-text objects with two
//! optional slots: the translated `SourceString` and the engine-internal
//! `CultureInvariantString`. Empty strings count as absent.

use serde::Deserialize;
use serde_json::Value;

/// A localized text object as it appears in DataTable dumps.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedText {
    #[serde(rename = "SourceString")]
    pub source_string: Option<String>,

    #[serde(rename = "CultureInvariantString")]
    pub culture_invariant_string: Option<String>,
}

/// Outcome of resolving a localized text object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedName {
    /// The authoritative, human-facing translation.
    Primary(String),
    /// Engine identifier only; lower confidence.
    Fallback(String),
    /// Neither slot is usable.
    Missing,
}

impl LocalizedText {
    /// Read a localized text field from a row; absent or malformed fields
    /// resolve the same way as an empty object.
    pub fn from_field(row: &Value, field: &str) -> Self {
        row.get(field)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default()
    }

    /// Prefer the translated slot, fall back to the invariant one.
    pub fn resolve(&self) -> ResolvedName {
        if let Some(name) = non_empty(&self.source_string) {
            ResolvedName::Primary(name.to_string())
        } else if let Some(name) = non_empty(&self.culture_invariant_string) {
            ResolvedName::Fallback(name.to_string())
        } else {
            ResolvedName::Missing
        }
    }
}

fn non_empty(slot: &Option<String>) -> Option<&str> {
    slot.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primary_wins() {
        let row = json!({"Name": {"SourceString": "Sword", "CultureInvariantString": "WPN_01"}});
        let resolved = LocalizedText::from_field(&row, "Name").resolve();
        assert_eq!(resolved, ResolvedName::Primary("Sword".to_string()));
    }

    #[test]
    fn test_fallback_when_primary_absent() {
        let row = json!({"Name": {"CultureInvariantString": "WPN_01"}});
        let resolved = LocalizedText::from_field(&row, "Name").resolve();
        assert_eq!(resolved, ResolvedName::Fallback("WPN_01".to_string()));
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let row = json!({"Name": {"SourceString": "", "CultureInvariantString": "WPN_01"}});
        let resolved = LocalizedText::from_field(&row, "Name").resolve();
        assert_eq!(resolved, ResolvedName::Fallback("WPN_01".to_string()));
    }

    #[test]
    fn test_missing_field() {
        let row = json!({"Other": 1});
        assert_eq!(
            LocalizedText::from_field(&row, "Name").resolve(),
            ResolvedName::Missing
        );
    }

    #[test]
    fn test_both_slots_empty() {
        let row = json!({"Name": {"SourceString": "", "CultureInvariantString": ""}});
        assert_eq!(
            LocalizedText::from_field(&row, "Name").resolve(),
            ResolvedName::Missing
        );
    }
}
