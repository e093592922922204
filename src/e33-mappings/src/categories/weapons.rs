//! Weapon mapping: per-character weapon key -> display name.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::codes::{self, GameTables, ItemType};
use crate::diag::{Diagnostic, Report};
use crate::order::{self, Ranked, Tier, RESTRICTED_MARKER, UNRESOLVED_MARKER};
use crate::tables::Rows;
use crate::text::{LocalizedText, ResolvedName};

/// Weapons grouped per character; groups alphabetical, members in
/// tier-then-name order.
#[derive(Debug, Serialize)]
pub struct WeaponMapping {
    #[serde(rename = "Weapons")]
    pub weapons: IndexMap<String, IndexMap<String, String>>,
}

pub fn extract(rows: &Rows, tables: &GameTables, report: &mut Report) -> WeaponMapping {
    let mut groups: IndexMap<String, Vec<Ranked<String>>> = IndexMap::new();

    for (key, row) in rows {
        if tables.item_type(row) != Some(ItemType::Weapon) {
            continue;
        }

        let code = row
            .get(codes::ITEM_SUBTYPE_FIELD)
            .and_then(Value::as_str)
            .unwrap_or("");
        let Some(character) = tables.item_subtypes.get(code) else {
            report.push(Diagnostic::UnknownSubtype {
                key: key.clone(),
                code: code.to_string(),
            });
            continue;
        };
        let character = tables.canonical_character(character);

        let (label, tier) = match LocalizedText::from_field(row, codes::ITEM_DISPLAY_NAME_FIELD)
            .resolve()
        {
            ResolvedName::Primary(name) => {
                if tables.restricted_weapons.contains(&name) || is_restricted_asset(row, tables) {
                    (format!("{name}{RESTRICTED_MARKER}"), Tier::Restricted)
                } else {
                    (name, Tier::Normal)
                }
            }
            ResolvedName::Fallback(name) => {
                (format!("{name}{UNRESOLVED_MARKER}"), Tier::Unresolved)
            }
            ResolvedName::Missing => {
                report.push(Diagnostic::UnresolvedName {
                    table: "DT_jRPG_Items_Composite",
                    key: key.clone(),
                });
                continue;
            }
        };

        groups
            .entry(character.to_string())
            .or_default()
            .push(Ranked {
                key: key.clone(),
                sort_label: label.clone(),
                tier,
                value: label,
            });
    }

    groups.sort_keys();
    let weapons = groups
        .into_iter()
        .map(|(character, entries)| (character, order::into_ordered(entries)))
        .collect();

    WeaponMapping { weapons }
}

fn is_restricted_asset(row: &Value, tables: &GameTables) -> bool {
    row.get(codes::ITEM_HARDCODED_NAME_FIELD)
        .and_then(Value::as_str)
        .is_some_and(|name| tables.restricted_weapon_assets.contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const WEAPON: &str = "E_jRPG_ItemType::NewEnumerator0";
    const NOAH: &str = "E_jRPG_ItemSubtype::NewEnumerator16";
    const LUNE: &str = "E_jRPG_ItemSubtype::NewEnumerator0";

    fn rows(value: Value) -> Rows {
        value
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn weapon(subtype: &str, name: &str) -> Value {
        json!({
            (codes::ITEM_TYPE_FIELD): WEAPON,
            (codes::ITEM_SUBTYPE_FIELD): subtype,
            (codes::ITEM_DISPLAY_NAME_FIELD): {"SourceString": name},
        })
    }

    #[test]
    fn test_denylisted_weapon_sorts_after_normal() {
        let rows = rows(json!({
            "B": weapon(LUNE, "Velokan"),
            "A": weapon(LUNE, "Sword"),
        }));
        let mut report = Report::new();
        let mapping = extract(&rows, &GameTables::default(), &mut report);

        let lune: Vec<(&str, &str)> = mapping.weapons["Lune"]
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(lune, [("A", "Sword"), ("B", "Velokan*")]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_noah_filed_under_gustave() {
        let rows = rows(json!({"W": weapon(NOAH, "Lanceram")}));
        let mut report = Report::new();
        let mapping = extract(&rows, &GameTables::default(), &mut report);

        assert!(mapping.weapons.contains_key("Gustave"));
        assert!(!mapping.weapons.contains_key("Noah"));
    }

    #[test]
    fn test_fallback_name_marked_unresolved() {
        let rows = rows(json!({
            "W": {
                (codes::ITEM_TYPE_FIELD): WEAPON,
                (codes::ITEM_SUBTYPE_FIELD): LUNE,
                (codes::ITEM_DISPLAY_NAME_FIELD): {"CultureInvariantString": "XYZ"},
            },
        }));
        let mut report = Report::new();
        let mapping = extract(&rows, &GameTables::default(), &mut report);

        assert_eq!(mapping.weapons["Lune"]["W"], "XYZ**");
    }

    #[test]
    fn test_restricted_hardcoded_asset() {
        let rows = rows(json!({
            "W": {
                (codes::ITEM_TYPE_FIELD): WEAPON,
                (codes::ITEM_SUBTYPE_FIELD): LUNE,
                (codes::ITEM_DISPLAY_NAME_FIELD): {"SourceString": "Verso's Blade"},
                (codes::ITEM_HARDCODED_NAME_FIELD): "VD_Verso_2",
            },
        }));
        let mut report = Report::new();
        let mapping = extract(&rows, &GameTables::default(), &mut report);

        assert_eq!(mapping.weapons["Lune"]["W"], "Verso's Blade*");
    }

    #[test]
    fn test_unknown_subtype_reported_and_skipped() {
        let rows = rows(json!({
            "W": weapon("E_jRPG_ItemSubtype::NewEnumerator99", "Ghost"),
        }));
        let mut report = Report::new();
        let mapping = extract(&rows, &GameTables::default(), &mut report);

        assert!(mapping.weapons.is_empty());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_tier_order_within_character() {
        let rows = rows(json!({
            "N2": weapon(LUNE, "Zweihander"),
            "U": {
                (codes::ITEM_TYPE_FIELD): WEAPON,
                (codes::ITEM_SUBTYPE_FIELD): LUNE,
                (codes::ITEM_DISPLAY_NAME_FIELD): {"CultureInvariantString": "AAA"},
            },
            "R": weapon(LUNE, "Beselbum"),
            "N1": weapon(LUNE, "Axe"),
        }));
        let mut report = Report::new();
        let mapping = extract(&rows, &GameTables::default(), &mut report);

        let labels: Vec<&str> = mapping.weapons["Lune"].values().map(String::as_str).collect();
        assert_eq!(labels, ["Axe", "Zweihander", "Beselbum*", "AAA**"]);
    }

    #[test]
    fn test_non_weapons_ignored() {
        let rows = rows(json!({
            "P": {
                (codes::ITEM_TYPE_FIELD): "E_jRPG_ItemType::NewEnumerator10",
                (codes::ITEM_DISPLAY_NAME_FIELD): {"SourceString": "Energising Start"},
            },
        }));
        let mut report = Report::new();
        let mapping = extract(&rows, &GameTables::default(), &mut report);
        assert!(mapping.weapons.is_empty());
    }
}
