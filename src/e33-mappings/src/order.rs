//! Canonical ordering for generated mappings.
//!
//! Entries are partitioned into availability tiers, sorted within each tier
//! by a locale-folded label, and concatenated in ascending tier order.
//! Insertion order of the resulting map is the final, externally observed
//! order; nothing re-sorts at serialization time.

use indexmap::IndexMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Trailing marker on labels of `Restricted` entries.
pub const RESTRICTED_MARKER: &str = "*";

/// Trailing marker on labels of `Unresolved` entries.
pub const UNRESOLVED_MARKER: &str = "**";

/// Availability/confidence classification, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Obtainable, fully resolved.
    Normal,
    /// Present in the data but flagged unobtainable or limited.
    Restricted,
    /// Label derived from the fallback name only.
    Unresolved,
}

impl Tier {
    /// Classify a label by its trailing marker.
    pub fn from_label(label: &str) -> Tier {
        if label.ends_with(UNRESOLVED_MARKER) {
            Tier::Unresolved
        } else if label.ends_with(RESTRICTED_MARKER) {
            Tier::Restricted
        } else {
            Tier::Normal
        }
    }
}

/// Case-insensitive, diacritic-insensitive sort key: NFD-decompose, strip
/// combining marks, lowercase. "Éclat" folds to "eclat".
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// One entry awaiting canonical placement.
#[derive(Debug, Clone)]
pub struct Ranked<V> {
    pub key: String,
    pub sort_label: String,
    pub tier: Tier,
    pub value: V,
}

/// Order entries by `(tier, folded sort label)` and collect into a map.
///
/// The sort is stable, so entries with identical tier and folded label keep
/// their input order and repeated runs produce identical output.
pub fn into_ordered<V>(mut entries: Vec<Ranked<V>>) -> IndexMap<String, V> {
    entries.sort_by_cached_key(|entry| (entry.tier, fold(&entry.sort_label)));
    entries
        .into_iter()
        .map(|entry| (entry.key, entry.value))
        .collect()
}

/// [`into_ordered`] for the common case where the label is the value.
pub fn into_labeled(entries: Vec<(String, String, Tier)>) -> IndexMap<String, String> {
    into_ordered(
        entries
            .into_iter()
            .map(|(key, label, tier)| Ranked {
                key,
                sort_label: label.clone(),
                tier,
                value: label,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, label: &str, tier: Tier) -> (String, String, Tier) {
        (key.to_string(), label.to_string(), tier)
    }

    #[test]
    fn test_fold_strips_diacritics_and_case() {
        assert_eq!(fold("Éclat"), "eclat");
        assert_eq!(fold("Lumière"), "lumiere");
        assert_eq!(fold("ABC"), "abc");
    }

    #[test]
    fn test_tier_from_label() {
        assert_eq!(Tier::from_label("Sword"), Tier::Normal);
        assert_eq!(Tier::from_label("Velokan*"), Tier::Restricted);
        assert_eq!(Tier::from_label("WPN_01**"), Tier::Unresolved);
    }

    #[test]
    fn test_tiers_precede_alphabetic_order() {
        let ordered = into_labeled(vec![
            entry("u", "Aardvark**", Tier::Unresolved),
            entry("r", "Abacus*", Tier::Restricted),
            entry("n", "Zymurgy", Tier::Normal),
        ]);
        let labels: Vec<&str> = ordered.values().map(String::as_str).collect();
        assert_eq!(labels, ["Zymurgy", "Abacus*", "Aardvark**"]);
    }

    #[test]
    fn test_accented_sorts_with_plain_spelling() {
        let ordered = into_labeled(vec![
            entry("z", "Zed", Tier::Normal),
            entry("acc", "Éclat", Tier::Normal),
            entry("plain", "Eclat", Tier::Normal),
            entry("a", "Axe", Tier::Normal),
        ]);
        let keys: Vec<&str> = ordered.keys().map(String::as_str).collect();
        // "Éclat" and "Eclat" fold to the same key; stable sort keeps their
        // input order, adjacent, between "Axe" and "Zed".
        assert_eq!(keys, ["a", "acc", "plain", "z"]);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let build = || {
            into_labeled(vec![
                entry("b", "Métier", Tier::Normal),
                entry("a", "metier", Tier::Normal),
                entry("c", "Metier*", Tier::Restricted),
            ])
        };
        assert_eq!(
            serde_json::to_string(&build()).unwrap(),
            serde_json::to_string(&build()).unwrap()
        );
    }
}
