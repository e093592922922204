//! Skin and face mapping: per-character cosmetic key -> display name.
//!
//! Cosmetic rows carry their character and kind in the record key itself:
//! `SkinMaelle_03` is a skin for Maelle, `FaceLune_02` a face for Lune.
//! Keys ending in `_Default` are the base appearance and never emitted.

use indexmap::IndexMap;
use serde::Serialize;

use crate::codes::{self, GameTables, ItemType};
use crate::diag::{Diagnostic, Report};
use crate::order::{self, Ranked, Tier};
use crate::tables::Rows;
use crate::text::{LocalizedText, ResolvedName};

const DEFAULT_SUFFIX: &str = "_Default";
const DELUXE_SUFFIX: &str = " (DLC)";

#[derive(Debug, Serialize)]
pub struct CosmeticMapping {
    #[serde(rename = "Skins")]
    pub skins: IndexMap<String, IndexMap<String, String>>,

    #[serde(rename = "Faces")]
    pub faces: IndexMap<String, IndexMap<String, String>>,
}

pub fn extract(rows: &Rows, tables: &GameTables, report: &mut Report) -> CosmeticMapping {
    let mut skins: IndexMap<String, Vec<Ranked<String>>> = IndexMap::new();
    let mut faces: IndexMap<String, Vec<Ranked<String>>> = IndexMap::new();

    for (key, row) in rows {
        if tables.item_type(row) != Some(ItemType::CharacterCustomization) {
            continue;
        }
        if key.ends_with(DEFAULT_SUFFIX) {
            continue;
        }

        let (groups, rest) = match key.strip_prefix("Skin") {
            Some(rest) => (&mut skins, rest),
            None => (&mut faces, key.strip_prefix("Face").unwrap_or(key)),
        };
        let character = rest.split('_').next().unwrap_or(rest);
        if tables.disabled_cosmetic_characters.contains(character) {
            continue;
        }

        let name = match LocalizedText::from_field(row, codes::ITEM_DISPLAY_NAME_FIELD).resolve() {
            ResolvedName::Primary(name) => name,
            _ => {
                report.push(Diagnostic::UnresolvedName {
                    table: "DT_jRPG_Items_Composite",
                    key: key.clone(),
                });
                continue;
            }
        };
        let label = if tables.deluxe_cosmetics.contains(&name) {
            format!("{name}{DELUXE_SUFFIX}")
        } else {
            name
        };

        groups.entry(character.to_string()).or_default().push(Ranked {
            key: key.clone(),
            sort_label: label.clone(),
            tier: Tier::Normal,
            value: label,
        });
    }

    CosmeticMapping {
        skins: order_groups(skins),
        faces: order_groups(faces),
    }
}

// Groups keep first-seen order; only members are sorted.
fn order_groups(
    groups: IndexMap<String, Vec<Ranked<String>>>,
) -> IndexMap<String, IndexMap<String, String>> {
    groups
        .into_iter()
        .map(|(character, entries)| (character, order::into_ordered(entries)))
        .collect()
}
