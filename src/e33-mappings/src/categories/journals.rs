//! Journal mapping: record key -> journal title.

use indexmap::IndexMap;
use serde::Serialize;

use crate::codes::{self, GameTables};
use crate::diag::{Diagnostic, Report};
use crate::order::{self, Tier};
use crate::tables::Rows;
use crate::text::{LocalizedText, ResolvedName};

#[derive(Debug, Serialize)]
pub struct JournalMapping {
    #[serde(rename = "Journals")]
    pub journals: IndexMap<String, String>,
}

pub fn extract(rows: &Rows, _tables: &GameTables, report: &mut Report) -> JournalMapping {
    let mut entries = Vec::new();

    for (key, row) in rows {
        match LocalizedText::from_field(row, codes::ITEM_DISPLAY_NAME_FIELD).resolve() {
            ResolvedName::Primary(name) => entries.push((key.clone(), name, Tier::Normal)),
            _ => report.push(Diagnostic::UnresolvedName {
                table: "DT_Items_Journals",
                key: key.clone(),
            }),
        }
    }

    JournalMapping {
        journals: order::into_labeled(entries),
    }
}
