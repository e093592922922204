//! # e33-mappings
//!
//! Expedition 33 mapping generator - turns the game's DataTable JSON dumps
//! into small, human-readable lookup tables and publishes each one as a
//! named accessor inside the save editor's source tree.
//!
//! This library provides functionality to:
//! - Load Unreal DataTable dumps (items, music records, journals, quest
//!   items, skill graph, gradient unlocks, level data, character saves)
//! - Normalize each category: localized-name resolution, denylist and
//!   alias handling, availability tiers, diacritic-insensitive ordering
//! - Emit one artifact per category and register it idempotently in the
//!   host's module index and dispatch table
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use e33_mappings::{Category, Generator, Report, SourcePaths};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sources = SourcePaths::new("originalGameMapping".into());
//! let generator = Generator::new(sources, Path::new("src-tauri/src"));
//!
//! let mut report = Report::new();
//! for category in Category::ALL {
//!     let artifact = generator.run(category, &mut report)?;
//!     println!("{category}: wrote {}", artifact.display());
//! }
//! for diagnostic in report.iter() {
//!     eprintln!("warning: {diagnostic}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod categories;
pub mod codes;
pub mod diag;
pub mod order;
pub mod pipeline;
pub mod registry;
pub mod tables;
pub mod text;

// Re-export commonly used items
#[doc(inline)]
pub use artifact::{write_artifact, ArtifactError};
#[doc(inline)]
pub use codes::{GameTables, ItemType};
#[doc(inline)]
pub use diag::{Diagnostic, Report};
#[doc(inline)]
pub use order::Tier;
#[doc(inline)]
pub use pipeline::{Category, GenerateError, Generator, SourcePaths};
#[doc(inline)]
pub use registry::{Registry, RegistryError};
#[doc(inline)]
pub use tables::{load_rows, Rows, TableError};
#[doc(inline)]
pub use text::{LocalizedText, ResolvedName};
