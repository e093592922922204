//! Per-category generation pipelines.
//!
//! Each category runs load -> extract -> emit -> register to completion
//! before the next begins. Categories share nothing but the two registry
//! files; a fatal error aborts only the category that produced it.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::artifact::{self, ArtifactError};
use crate::categories::{
    characters, cosmetics, gradient, journals, levels, manor, monoco, music, pictos, quest_items,
    weapons,
};
use crate::codes::GameTables;
use crate::diag::Report;
use crate::registry::{Registry, RegistryError};
use crate::tables::{self, TableError};

/// One independently invocable output category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Weapons,
    Pictos,
    Skins,
    MusicDisks,
    Journals,
    QuestItems,
    MonocoSkills,
    GradientSkills,
    ManorDoors,
    LevelFlags,
    CharacterSaves,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Weapons,
        Category::Pictos,
        Category::Skins,
        Category::MusicDisks,
        Category::Journals,
        Category::QuestItems,
        Category::MonocoSkills,
        Category::GradientSkills,
        Category::ManorDoors,
        Category::LevelFlags,
        Category::CharacterSaves,
    ];

    /// Name of the generated artifact (and of its accessor, as
    /// `get<name>`).
    pub fn artifact_name(self) -> &'static str {
        match self {
            Category::Weapons => "weaponmapping",
            Category::Pictos => "pictomapping",
            Category::Skins => "skinmapping",
            Category::MusicDisks => "musicdiskmapping",
            Category::Journals => "journalsmapping",
            Category::QuestItems => "questitemsmapping",
            Category::MonocoSkills => "monocoskillsmapping",
            Category::GradientSkills => "gradientskillmapping",
            Category::ManorDoors => "manordoormapping",
            Category::LevelFlags => "flagmapping",
            Category::CharacterSaves => "basecharactersavemapping",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Weapons => "weapons",
            Category::Pictos => "pictos",
            Category::Skins => "skins",
            Category::MusicDisks => "music-disks",
            Category::Journals => "journals",
            Category::QuestItems => "quest-items",
            Category::MonocoSkills => "monoco-skills",
            Category::GradientSkills => "gradient-skills",
            Category::ManorDoors => "manor-doors",
            Category::LevelFlags => "level-flags",
            Category::CharacterSaves => "character-saves",
        };
        f.write_str(name)
    }
}

/// Locations of the upstream DataTable dumps.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub data_dir: PathBuf,

    /// Legacy per-level element dumps scanned for manor doors. The default
    /// pair predates the last data refresh; no doors have been added since,
    /// but override this when the dump set moves.
    pub manor_dumps: Vec<PathBuf>,
}

impl SourcePaths {
    pub fn new(data_dir: PathBuf) -> Self {
        let manor_dumps = ["DJBE7GX6HAETWSRXO6OFRJUAA", "8IRVA8RSVAKD8FH2T72N3ATWP"]
            .iter()
            .map(|stem| {
                data_dir
                    .join("levels")
                    .join("Manor")
                    .join(format!("{stem}.json"))
            })
            .collect();
        SourcePaths {
            data_dir,
            manor_dumps,
        }
    }

    fn items(&self) -> PathBuf {
        self.data_dir.join("DT_jRPG_Items_Composite.json")
    }

    fn music_records(&self) -> PathBuf {
        self.data_dir.join("DT_MusicRecords.json")
    }

    fn journals(&self) -> PathBuf {
        self.data_dir.join("DT_Items_Journals.json")
    }

    fn quest_items(&self) -> PathBuf {
        self.data_dir.join("DT_QuestItems.json")
    }

    fn skill_graph(&self) -> PathBuf {
        self.data_dir.join("DA_SkillGraph_Monoco.json")
    }

    fn skills_dir(&self) -> PathBuf {
        self.data_dir.join("MonocoSkills")
    }

    fn gradient_unlocks(&self) -> PathBuf {
        self.data_dir.join("DT_Items_GradientAttackUnlocks.json")
    }

    fn level_data(&self) -> PathBuf {
        self.data_dir.join("DT_LevelData.json")
    }

    fn character_saves(&self) -> PathBuf {
        self.data_dir.join("DT_jRPG_CharacterSaveStates.json")
    }
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Drives one category pipeline at a time against a host source tree.
#[derive(Debug)]
pub struct Generator {
    sources: SourcePaths,
    tables: GameTables,
    out_dir: PathBuf,
    registry: Registry,
}

impl Generator {
    /// `host_src` is the host application's source directory; artifacts go
    /// to `<host_src>/jsonmappings/` and registrations to its `mod.rs` and
    /// `<host_src>/lib.rs`.
    pub fn new(sources: SourcePaths, host_src: &Path) -> Self {
        let out_dir = host_src.join("jsonmappings");
        let registry = Registry::new(out_dir.join("mod.rs"), host_src.join("lib.rs"));
        Generator {
            sources,
            tables: GameTables::default(),
            out_dir,
            registry,
        }
    }

    /// Replace the default code tables, mainly for tests and data-refresh
    /// experiments.
    pub fn with_tables(mut self, tables: GameTables) -> Self {
        self.tables = tables;
        self
    }

    /// Run one category pipeline to completion. Returns the artifact path.
    pub fn run(&self, category: Category, report: &mut Report) -> Result<PathBuf, GenerateError> {
        match category {
            Category::Weapons => {
                let rows = tables::load_rows(&self.sources.items())?;
                self.emit(category, &weapons::extract(&rows, &self.tables, report))
            }
            Category::Pictos => {
                let rows = tables::load_rows(&self.sources.items())?;
                self.emit(category, &pictos::extract(&rows, &self.tables, report))
            }
            Category::Skins => {
                let rows = tables::load_rows(&self.sources.items())?;
                self.emit(category, &cosmetics::extract(&rows, &self.tables, report))
            }
            Category::MusicDisks => {
                let rows = tables::load_rows(&self.sources.music_records())?;
                self.emit(category, &music::extract(&rows, &self.tables, report))
            }
            Category::Journals => {
                let rows = tables::load_rows(&self.sources.journals())?;
                self.emit(category, &journals::extract(&rows, &self.tables, report))
            }
            Category::QuestItems => {
                let rows = tables::load_rows(&self.sources.quest_items())?;
                self.emit(category, &quest_items::extract(&rows, &self.tables, report))
            }
            Category::MonocoSkills => {
                let mapping =
                    monoco::extract(&self.sources.skill_graph(), &self.sources.skills_dir(), report)?;
                self.emit(category, &mapping)
            }
            Category::GradientSkills => {
                let rows = tables::load_rows(&self.sources.gradient_unlocks())?;
                self.emit(category, &gradient::extract(&rows))
            }
            Category::ManorDoors => {
                let mapping = manor::extract(&self.sources.manor_dumps, report)?;
                self.emit(category, &mapping)
            }
            Category::LevelFlags => {
                let rows = tables::load_rows(&self.sources.level_data())?;
                self.emit(category, &levels::extract(&rows, &self.tables, report))
            }
            Category::CharacterSaves => {
                let rows = tables::load_rows(&self.sources.character_saves())?;
                self.emit(category, &characters::extract(&rows, &self.tables))
            }
        }
    }

    fn emit<T: Serialize>(
        &self,
        category: Category,
        mapping: &T,
    ) -> Result<PathBuf, GenerateError> {
        let name = category.artifact_name();
        let path = artifact::write_artifact(&self.out_dir, name, mapping)?;
        self.registry.register(name)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    const LIB_RS: &str = "\
mod jsonmappings;

pub fn run() {
    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![
            greet,
        ])
        .run(tauri::generate_context!())
        .unwrap();
}
";

    fn fixture() -> (tempfile::TempDir, Generator) {
        let root = tempfile::tempdir().unwrap();
        let data_dir = root.path().join("data");
        let host_src = root.path().join("host").join("src");
        fs::create_dir_all(&data_dir).unwrap();
        fs::create_dir_all(&host_src).unwrap();
        fs::write(host_src.join("lib.rs"), LIB_RS).unwrap();

        let items = json!([{"Rows": {
            "A": {
                (crate::codes::ITEM_TYPE_FIELD): "E_jRPG_ItemType::NewEnumerator0",
                (crate::codes::ITEM_SUBTYPE_FIELD): "E_jRPG_ItemSubtype::NewEnumerator0",
                (crate::codes::ITEM_DISPLAY_NAME_FIELD): {"SourceString": "Sword"},
            },
            "B": {
                (crate::codes::ITEM_TYPE_FIELD): "E_jRPG_ItemType::NewEnumerator0",
                (crate::codes::ITEM_SUBTYPE_FIELD): "E_jRPG_ItemSubtype::NewEnumerator0",
                (crate::codes::ITEM_DISPLAY_NAME_FIELD): {"SourceString": "Velokan"},
            },
        }}]);
        fs::write(
            data_dir.join("DT_jRPG_Items_Composite.json"),
            items.to_string(),
        )
        .unwrap();

        let generator = Generator::new(SourcePaths::new(data_dir), &host_src);
        (root, generator)
    }

    #[test]
    fn test_weapons_pipeline_end_to_end() {
        let (root, generator) = fixture();
        let mut report = Report::new();

        let path = generator.run(Category::Weapons, &mut report).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.contains("pub fn getweaponmapping()"));
        assert!(content.contains(r#"{"Weapons":{"Lune":{"A":"Sword","B":"Velokan*"}}}"#));

        let host_src = root.path().join("host").join("src");
        let index = fs::read_to_string(host_src.join("jsonmappings").join("mod.rs")).unwrap();
        assert_eq!(index, "pub mod weaponmapping;\n");
        let lib = fs::read_to_string(host_src.join("lib.rs")).unwrap();
        assert!(lib.contains("use jsonmappings::weaponmapping::getweaponmapping;"));
        assert!(lib.contains("getweaponmapping,"));
    }

    #[test]
    fn test_rerun_is_deterministic_and_idempotent() {
        let (root, generator) = fixture();
        let host_src = root.path().join("host").join("src");
        let mut report = Report::new();

        let path = generator.run(Category::Weapons, &mut report).unwrap();
        let artifact_once = fs::read(&path).unwrap();
        let lib_once = fs::read(host_src.join("lib.rs")).unwrap();
        let index_once = fs::read(host_src.join("jsonmappings").join("mod.rs")).unwrap();

        generator.run(Category::Weapons, &mut report).unwrap();

        assert_eq!(fs::read(&path).unwrap(), artifact_once);
        assert_eq!(fs::read(host_src.join("lib.rs")).unwrap(), lib_once);
        assert_eq!(
            fs::read(host_src.join("jsonmappings").join("mod.rs")).unwrap(),
            index_once
        );
    }

    #[test]
    fn test_missing_source_aborts_category() {
        let (_root, generator) = fixture();
        let mut report = Report::new();

        let err = generator.run(Category::LevelFlags, &mut report).unwrap_err();
        assert!(matches!(err, GenerateError::Table(TableError::Io { .. })));
    }

    #[test]
    fn test_artifact_names_are_unique() {
        let mut names: Vec<&str> = Category::ALL.iter().map(|c| c.artifact_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }
}
