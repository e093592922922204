//! Gradient skill mapping: per-character list of unlock keys.
//!
//! Unlock keys follow `GradientUnlock_<Character><slot>`; the trailing slot
//! digit is dropped to recover the character name. Keys stay in document
//! order, no labels.

use indexmap::IndexMap;
use serde::Serialize;

use crate::tables::Rows;

const UNLOCK_PREFIX: &str = "GradientUnlock_";

#[derive(Debug, Serialize)]
pub struct GradientMapping {
    #[serde(rename = "GradientSkills")]
    pub characters: IndexMap<String, Vec<String>>,
}

pub fn extract(rows: &Rows) -> GradientMapping {
    let mut characters: IndexMap<String, Vec<String>> = IndexMap::new();

    for key in rows.keys() {
        let Some(rest) = key.strip_prefix(UNLOCK_PREFIX) else {
            continue;
        };
        let Some((last, _)) = rest.char_indices().next_back() else {
            continue;
        };
        characters
            .entry(rest[..last].to_string())
            .or_default()
            .push(key.clone());
    }

    GradientMapping { characters }
}
