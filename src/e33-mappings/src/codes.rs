//! Game code tables and per-category rule configuration.
//!
//! Everything an extractor needs to interpret raw codes lives in
//! [`GameTables`]: enum-code tables, denylists, alias remaps. The `Default`
//! impl carries the shipped game's values; tests substitute synthetic
//! tables.

use serde_json::Value;
use std::collections::{HashMap, HashSet};

// Hash-suffixed Unreal property names used across the item tables.
pub const ITEM_TYPE_FIELD: &str = "Item_Type_88_2F24F8FB4235429B4DE1399DBA533C78";
pub const ITEM_SUBTYPE_FIELD: &str = "Item_Subtype_87_0CE0028F4D632385B61EDABBFBDF5360";
pub const ITEM_DISPLAY_NAME_FIELD: &str = "Item_DisplayName_89_41C0C54E4A55598869C84CA3B5B5DECA";
pub const ITEM_HARDCODED_NAME_FIELD: &str = "Item_HardcodedName_90_C7F763B74AAB28EF890A66854D7D95AA";

// Level data table fields.
pub const LEVEL_TYPE_FIELD: &str = "LevelType_37_EE4A371F4388B884A49327A9EEC1B9F0";
pub const LEVEL_DISPLAY_NAME_FIELD: &str = "DisplayName_10_D3213B974EE2CBDD44757B978CD84FD8";
pub const LEVEL_ASSET_NAME_FIELD: &str = "LevelAssetName_85_BF09694C41CC0444295731A40341A5F9";
pub const LEVEL_MAIN_SPAWN_FIELD: &str = "MainSpawnPoint_72_5C7B345E44E5B2867FCE0687BB65019F";
pub const LEVEL_SUB_AREAS_FIELD: &str = "SubAreas_73_B59A02D5470428064B9B03A1A3F5F82C";

// Skill graph node fields.
pub const SKILL_UNLOCK_FIELD: &str = "SkillUnlock_3_15FA1C06433ACE049603919CDF6155FF";
pub const SKILL_REQUIREMENT_FIELD: &str = "RequiresUnlockItem_18_D9EBC20F41097DD7517E428E4A57655E";
pub const SKILL_ASSET_FIELD: &str = "Skill_2_9E4FC5804778258FBAA04BBF7F68F799";

/// Semantic item type behind an `E_jRPG_ItemType` enum code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Weapon,
    Consumable,
    Pictos,
    Key,
    Inventory,
    Shard,
    Gold,
    CharacterCustomization,
    SkillUnlocker,
    /// Present in the enum but unused by any extractor.
    Unused,
}

/// Immutable lookup configuration shared by the extractors.
#[derive(Debug, Clone)]
pub struct GameTables {
    /// `E_jRPG_ItemType::NewEnumerator*` code -> semantic type.
    pub item_types: HashMap<String, ItemType>,

    /// `E_jRPG_ItemSubtype::NewEnumerator*` code -> character/category name.
    pub item_subtypes: HashMap<String, String>,

    /// Weapon display names flagged unobtainable.
    pub restricted_weapons: HashSet<String>,

    /// Weapon hardcoded asset names flagged unobtainable.
    pub restricted_weapon_assets: HashSet<String>,

    /// Picto display names flagged unobtainable.
    pub restricted_pictos: HashSet<String>,

    /// Characters whose cosmetics are dropped entirely.
    pub disabled_cosmetic_characters: HashSet<String>,

    /// Cosmetic display names that get the paid-content suffix.
    pub deluxe_cosmetics: HashSet<String>,

    /// Internal character name -> published name.
    pub character_aliases: HashMap<String, String>,

    /// Character save keys that are never emitted.
    pub disabled_save_characters: HashSet<String>,

    /// `ELevelType` code of playable levels.
    pub playable_level_type: String,

    /// Level keys expected to have no display name; skipped without a
    /// diagnostic.
    pub silent_nameless_levels: HashSet<String>,
}

impl GameTables {
    /// Resolve a row's item type code through the configured table.
    pub fn item_type(&self, row: &Value) -> Option<ItemType> {
        let code = row.get(ITEM_TYPE_FIELD)?.as_str()?;
        self.item_types.get(code).copied()
    }

    /// Map an internal character name to its published name.
    pub fn canonical_character<'a>(&'a self, name: &'a str) -> &'a str {
        self.character_aliases
            .get(name)
            .map(String::as_str)
            .unwrap_or(name)
    }
}

fn string_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for GameTables {
    fn default() -> Self {
        let item_types = [
            ("E_jRPG_ItemType::NewEnumerator0", ItemType::Weapon),
            ("E_jRPG_ItemType::NewEnumerator6", ItemType::Unused),
            ("E_jRPG_ItemType::NewEnumerator7", ItemType::Consumable),
            ("E_jRPG_ItemType::NewEnumerator10", ItemType::Pictos),
            ("E_jRPG_ItemType::NewEnumerator11", ItemType::Key),
            ("E_jRPG_ItemType::NewEnumerator12", ItemType::Inventory),
            ("E_jRPG_ItemType::NewEnumerator14", ItemType::Shard),
            ("E_jRPG_ItemType::NewEnumerator15", ItemType::Gold),
            (
                "E_jRPG_ItemType::NewEnumerator16",
                ItemType::CharacterCustomization,
            ),
            ("E_jRPG_ItemType::NewEnumerator17", ItemType::SkillUnlocker),
        ]
        .into_iter()
        .map(|(code, ty)| (code.to_string(), ty))
        .collect();

        let item_subtypes = [
            ("E_jRPG_ItemSubtype::NewEnumerator0", "Lune"),
            ("E_jRPG_ItemSubtype::NewEnumerator1", "Monoco"),
            ("E_jRPG_ItemSubtype::NewEnumerator2", "Sciel"),
            ("E_jRPG_ItemSubtype::NewEnumerator11", "Consumable"),
            ("E_jRPG_ItemSubtype::NewEnumerator14", "Maelle"),
            ("E_jRPG_ItemSubtype::NewEnumerator15", "Pictos"),
            ("E_jRPG_ItemSubtype::NewEnumerator16", "Noah"),
            ("E_jRPG_ItemSubtype::NewEnumerator18", "Key"),
            ("E_jRPG_ItemSubtype::NewEnumerator19", "Inventory"),
            ("E_jRPG_ItemSubtype::NewEnumerator20", "Invalid"),
            ("E_jRPG_ItemSubtype::NewEnumerator21", "Verso"),
            ("E_jRPG_ItemSubtype::NewEnumerator22", "Journal"),
            ("E_jRPG_ItemSubtype::NewEnumerator23", "Music Record"),
        ]
        .into_iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect();

        let character_aliases = [("Noah", "Gustave"), ("Frey", "Gustave")]
            .into_iter()
            .map(|(internal, published)| (internal.to_string(), published.to_string()))
            .collect();

        GameTables {
            item_types,
            item_subtypes,
            restricted_weapons: string_set(&[
                "Velokan", "Telarim", "Milerim", "Nibalum", "Beselbum", "Gelerim",
            ]),
            restricted_weapon_assets: string_set(&["VD_Verso_2"]),
            restricted_pictos: string_set(&[
                "The Best Defense",
                "Bloody Bullet",
                "Passive Defense",
                "Dodge Specialist",
                "Dodge Helper",
                "Lucky Aim",
                "Successive Parry",
                "Parry Specialist",
                "Solidifying Meditation",
                "Great Energy Tint",
                "Great Healing Tint",
                "Charybde To Scylla",
                "Evasive Healer",
                "Charging Recovery",
                "Gradient Recovery",
                "Better Healing Tint",
                "Parry Helper",
                "Physical Fighter",
                "Shield Breaker",
                "Soul Eater",
            ]),
            disabled_cosmetic_characters: string_set(&["Sophie", "AliciaEpilogue", "Alicia"]),
            deluxe_cosmetics: string_set(&[
                "Flowers",
                "Gommage",
                "Clair",
                "Obscur",
                "Flower Suit",
            ]),
            character_aliases,
            disabled_save_characters: string_set(&["Julie", "Sophie", "Alicia"]),
            playable_level_type: "ELevelType::NewEnumerator0".to_string(),
            silent_nameless_levels: string_set(&["Map_BattleTesting"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_type_lookup() {
        let tables = GameTables::default();
        let row = json!({ITEM_TYPE_FIELD: "E_jRPG_ItemType::NewEnumerator0"});
        assert_eq!(tables.item_type(&row), Some(ItemType::Weapon));

        let row = json!({ITEM_TYPE_FIELD: "E_jRPG_ItemType::NewEnumerator999"});
        assert_eq!(tables.item_type(&row), None);

        let row = json!({"other": 1});
        assert_eq!(tables.item_type(&row), None);
    }

    #[test]
    fn test_canonical_character() {
        let tables = GameTables::default();
        assert_eq!(tables.canonical_character("Noah"), "Gustave");
        assert_eq!(tables.canonical_character("Frey"), "Gustave");
        assert_eq!(tables.canonical_character("Lune"), "Lune");
    }

    #[test]
    fn test_default_subtypes_cover_party() {
        let tables = GameTables::default();
        let characters: Vec<&str> = tables
            .item_subtypes
            .values()
            .map(String::as_str)
            .collect();
        for name in ["Lune", "Monoco", "Sciel", "Maelle", "Noah", "Verso"] {
            assert!(characters.contains(&name), "missing subtype for {}", name);
        }
    }
}
