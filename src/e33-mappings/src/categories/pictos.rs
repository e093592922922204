//! Picto mapping: flat picto key -> display name.

use indexmap::IndexMap;
use serde::Serialize;

use crate::codes::{self, GameTables, ItemType};
use crate::diag::{Diagnostic, Report};
use crate::order::{self, Tier, RESTRICTED_MARKER, UNRESOLVED_MARKER};
use crate::tables::Rows;
use crate::text::{LocalizedText, ResolvedName};

#[derive(Debug, Serialize)]
pub struct PictoMapping {
    #[serde(rename = "Pictos")]
    pub pictos: IndexMap<String, String>,
}

pub fn extract(rows: &Rows, tables: &GameTables, report: &mut Report) -> PictoMapping {
    let mut entries = Vec::new();

    for (key, row) in rows {
        if tables.item_type(row) != Some(ItemType::Pictos) {
            continue;
        }

        match LocalizedText::from_field(row, codes::ITEM_DISPLAY_NAME_FIELD).resolve() {
            ResolvedName::Primary(name) => {
                if tables.restricted_pictos.contains(&name) {
                    entries.push((
                        key.clone(),
                        format!("{name}{RESTRICTED_MARKER}"),
                        Tier::Restricted,
                    ));
                } else {
                    entries.push((key.clone(), name, Tier::Normal));
                }
            }
            ResolvedName::Fallback(name) => {
                entries.push((
                    key.clone(),
                    format!("{name}{UNRESOLVED_MARKER}"),
                    Tier::Unresolved,
                ));
            }
            ResolvedName::Missing => {
                report.push(Diagnostic::UnresolvedName {
                    table: "DT_jRPG_Items_Composite",
                    key: key.clone(),
                });
            }
        }
    }

    PictoMapping {
        pictos: order::into_labeled(entries),
    }
}
