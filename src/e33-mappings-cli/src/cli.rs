//! CLI argument definitions for e33-mappings
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use e33_mappings::Category;

#[derive(Parser)]
#[command(name = "e33-mappings")]
#[command(about = "Expedition 33 mapping generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate mapping artifacts and register them with the host
    #[command(visible_alias = "g")]
    Generate {
        /// Categories to generate (default: all)
        #[arg(value_enum)]
        categories: Vec<CategoryArg>,

        /// Directory containing the DataTable dumps (uses configured
        /// default if not provided)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Host application source directory to emit into (uses configured
        /// default if not provided)
        #[arg(long)]
        target: Option<PathBuf>,
    },

    /// Configure default directories
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default DataTable dump directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Set the default host source directory
        #[arg(long)]
        target: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },

    /// List categories and their artifact names
    #[command(visible_alias = "l")]
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
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

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Category {
        match arg {
            CategoryArg::Weapons => Category::Weapons,
            CategoryArg::Pictos => Category::Pictos,
            CategoryArg::Skins => Category::Skins,
            CategoryArg::MusicDisks => Category::MusicDisks,
            CategoryArg::Journals => Category::Journals,
            CategoryArg::QuestItems => Category::QuestItems,
            CategoryArg::MonocoSkills => Category::MonocoSkills,
            CategoryArg::GradientSkills => Category::GradientSkills,
            CategoryArg::ManorDoors => Category::ManorDoors,
            CategoryArg::LevelFlags => Category::LevelFlags,
            CategoryArg::CharacterSaves => Category::CharacterSaves,
        }
    }
}
