//! Level flag mapping: playable levels keyed by display name, with their
//! spawn flags.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::codes::{self, GameTables};
use crate::diag::{Diagnostic, Report};
use crate::order::{self, Ranked, Tier};
use crate::tables::Rows;
use crate::text::{LocalizedText, ResolvedName};

#[derive(Debug, Serialize)]
pub struct FlagMapping {
    #[serde(rename = "Flags")]
    pub flags: IndexMap<String, LevelFlags>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelFlags {
    #[serde(rename = "LevelKey")]
    pub level_key: Option<String>,

    #[serde(rename = "MainSpawnPoint")]
    pub main_spawn_point: Option<String>,

    #[serde(rename = "SubFlags")]
    pub sub_flags: IndexMap<String, Option<String>>,
}

pub fn extract(rows: &Rows, tables: &GameTables, report: &mut Report) -> FlagMapping {
    let mut entries: Vec<Ranked<LevelFlags>> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (key, row) in rows {
        let level_type = row.get(codes::LEVEL_TYPE_FIELD).and_then(Value::as_str);
        if level_type != Some(tables.playable_level_type.as_str()) {
            continue;
        }

        let name = match LocalizedText::from_field(row, codes::LEVEL_DISPLAY_NAME_FIELD).resolve()
        {
            ResolvedName::Primary(name) => name,
            _ => {
                if !tables.silent_nameless_levels.contains(key) {
                    report.push(Diagnostic::EmptyLevelName { key: key.clone() });
                }
                continue;
            }
        };
        // Display-name disambiguation for levels the upstream table leaves
        // ambiguous.
        let name = if key == "SideLevel_CleasTower_Entrance" {
            format!("{name} Entrance")
        } else if name == "Lumière" {
            format!("{name} (ACT 3) except Main")
        } else {
            name
        };

        if !seen.insert(name.clone()) {
            report.push(Diagnostic::DuplicateLevelName { name });
            continue;
        }

        let level_key = row
            .get(codes::LEVEL_ASSET_NAME_FIELD)
            .and_then(Value::as_str)
            .map(str::to_string);
        let main_spawn_point = row
            .get(codes::LEVEL_MAIN_SPAWN_FIELD)
            .and_then(|spawn| spawn.get("TagName"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let mut sub_flags = IndexMap::new();
        if let Some(areas) = row.get(codes::LEVEL_SUB_AREAS_FIELD).and_then(Value::as_array) {
            for area in areas {
                let Some(flag_key) = area
                    .get("Key")
                    .and_then(|k| k.get("TagName"))
                    .and_then(Value::as_str)
                else {
                    continue;
                };
                if Some(flag_key) == main_spawn_point.as_deref() {
                    continue;
                }
                let flag_name = match LocalizedText::from_field(area, "Value").resolve() {
                    ResolvedName::Primary(flag_name) => Some(flag_name),
                    _ => {
                        report.push(Diagnostic::EmptyFlagName {
                            flag: flag_key.to_string(),
                            level: name.clone(),
                        });
                        None
                    }
                };
                sub_flags.insert(flag_key.to_string(), flag_name);
            }
        }

        entries.push(Ranked {
            key: name.clone(),
            sort_label: name.clone(),
            tier: Tier::from_label(&name),
            value: LevelFlags {
                level_key,
                main_spawn_point,
                sub_flags,
            },
        });
    }

    FlagMapping {
        flags: order::into_ordered(entries),
    }
}
