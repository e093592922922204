//! Base character save mapping: character key -> verbatim save-state row.
//!
//! The row payload is carried through untouched; the host seeds new
//! characters from it.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::codes::GameTables;
use crate::tables::Rows;

#[derive(Debug, Serialize)]
pub struct CharacterSaveMapping {
    #[serde(rename = "Characters")]
    pub characters: IndexMap<String, Value>,
}

pub fn extract(rows: &Rows, tables: &GameTables) -> CharacterSaveMapping {
    let mut characters = IndexMap::new();

    for (key, row) in rows {
        if tables.disabled_save_characters.contains(key) {
            continue;
        }
        let published = tables.canonical_character(key);
        characters.insert(published.to_string(), row.clone());
    }

    CharacterSaveMapping { characters }
}
