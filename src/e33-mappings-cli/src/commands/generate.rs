//! Generate command handler
//!
//! Runs the selected category pipelines. A failing category is reported
//! and the rest continue; a registry structure failure aborts the whole
//! run.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use e33_mappings::{Category, GenerateError, Generator, Report, SourcePaths};

use crate::cli::CategoryArg;
use crate::config::Config;

pub fn handle(
    categories: Vec<CategoryArg>,
    data_dir: Option<PathBuf>,
    target: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load()?;
    let data_dir = data_dir.or(config.data_dir).context(
        "no data directory; pass --data-dir or set one with `e33-mappings configure`",
    )?;
    let target = target.or(config.target_dir).context(
        "no target directory; pass --target or set one with `e33-mappings configure`",
    )?;

    let categories: Vec<Category> = if categories.is_empty() {
        Category::ALL.to_vec()
    } else {
        categories.into_iter().map(Category::from).collect()
    };

    let generator = Generator::new(SourcePaths::new(data_dir), &target);
    let mut failed = 0usize;

    for category in categories {
        let mut report = Report::new();
        match generator.run(category, &mut report) {
            Ok(path) => {
                println!("{category}: wrote {}", path.display());
                for diagnostic in report.iter() {
                    println!("  warning: {diagnostic}");
                }
            }
            Err(GenerateError::Registry(err)) => {
                return Err(err).context("registry structure check failed; aborting")
            }
            Err(err) => {
                eprintln!("{category}: {err}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} categories failed");
    }
    Ok(())
}
