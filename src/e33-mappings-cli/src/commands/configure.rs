//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up CLI defaults.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;

pub fn handle(data_dir: Option<PathBuf>, target: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    if data_dir.is_none() && target.is_none() {
        show_usage();
        return Ok(());
    }

    if let Some(dir) = data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(dir) = target {
        config.target_dir = Some(dir);
    }
    config.save()?;

    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    match &config.data_dir {
        Some(dir) => println!("Data directory: {}", dir.display()),
        None => println!("No data directory configured"),
    }
    match &config.target_dir {
        Some(dir) => println!("Target directory: {}", dir.display()),
        None => println!("No target directory configured"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

fn show_usage() {
    println!("Usage: e33-mappings configure --data-dir DUMP_DIR --target HOST_SRC_DIR");
    println!("       e33-mappings configure --show");
}
