//! Quest item mapping: record key -> display name.

use indexmap::IndexMap;
use serde::Serialize;

use crate::codes::{self, GameTables};
use crate::diag::{Diagnostic, Report};
use crate::order::{self, Tier, UNRESOLVED_MARKER};
use crate::tables::Rows;
use crate::text::{LocalizedText, ResolvedName};

#[derive(Debug, Serialize)]
pub struct QuestItemMapping {
    #[serde(rename = "QuestItems")]
    pub quest_items: IndexMap<String, String>,
}

pub fn extract(rows: &Rows, _tables: &GameTables, report: &mut Report) -> QuestItemMapping {
    let mut entries = Vec::new();

    for (key, row) in rows {
        match LocalizedText::from_field(row, codes::ITEM_DISPLAY_NAME_FIELD).resolve() {
            ResolvedName::Primary(name) => entries.push((key.clone(), name, Tier::Normal)),
            ResolvedName::Fallback(name) => entries.push((
                key.clone(),
                format!("{name}{UNRESOLVED_MARKER}"),
                Tier::Unresolved,
            )),
            ResolvedName::Missing => report.push(Diagnostic::UnresolvedName {
                table: "DT_QuestItems",
                key: key.clone(),
            }),
        }
    }

    QuestItemMapping {
        quest_items: order::into_labeled(entries),
    }
}
