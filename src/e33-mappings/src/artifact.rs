//! Generated artifact emission.
//!
//! One artifact per category: a source unit exposing a single accessor that
//! returns the mapping as a compact JSON payload. The payload keeps the
//! mapping's insertion order; nothing re-sorts here. Artifacts are
//! overwritten wholesale on every run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("cannot serialize artifact `{name}`")]
    Json {
        name: String,
        source: serde_json::Error,
    },

    #[error("cannot write {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Serialize `mapping` and write `<dir>/<name>.rs`, replacing any previous
/// artifact of the same name.
pub fn write_artifact<T: Serialize>(
    dir: &Path,
    name: &str,
    mapping: &T,
) -> Result<PathBuf, ArtifactError> {
    let payload = serde_json::to_string(mapping).map_err(|source| ArtifactError::Json {
        name: name.to_string(),
        source,
    })?;

    fs::create_dir_all(dir).map_err(|source| ArtifactError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(format!("{name}.rs"));
    fs::write(&path, accessor(name, &payload)).map_err(|source| ArtifactError::Io {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

fn accessor(name: &str, payload: &str) -> String {
    format!(
        "#[tauri::command]\n\
         pub fn get{name}() -> Result<String, String> {{\n\
         \x20   let json = r#\"{payload}\"#;\n\
         \x20   Ok(json.to_string())\n\
         }}\n"
    )
}
