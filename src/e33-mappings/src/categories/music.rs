//! Music disk mapping: record key -> track name.

use indexmap::IndexMap;
use serde::Serialize;

use crate::codes::{self, GameTables};
use crate::diag::{Diagnostic, Report};
use crate::order::{self, Tier};
use crate::tables::Rows;
use crate::text::{LocalizedText, ResolvedName};

#[derive(Debug, Serialize)]
pub struct MusicDiskMapping {
    #[serde(rename = "MusicDisks")]
    pub music_disks: IndexMap<String, String>,
}

/// Records without a translated name are dropped; the invariant slot is an
/// asset path here, not a usable label.
pub fn extract(rows: &Rows, _tables: &GameTables, report: &mut Report) -> MusicDiskMapping {
    let mut entries = Vec::new();

    for (key, row) in rows {
        match LocalizedText::from_field(row, codes::ITEM_DISPLAY_NAME_FIELD).resolve() {
            ResolvedName::Primary(name) => entries.push((key.clone(), name, Tier::Normal)),
            _ => report.push(Diagnostic::UnresolvedName {
                table: "DT_MusicRecords",
                key: key.clone(),
            }),
        }
    }

    MusicDiskMapping {
        music_disks: order::into_labeled(entries),
    }
}
