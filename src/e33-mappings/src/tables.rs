//! DataTable dump loading.
//!
//! Upstream data arrives as Unreal DataTable JSON dumps: a top-level array
//! whose first element carries the keyed rows under `Rows`. Two sibling
//! shapes exist in the same dump set: raw element dumps (a bare top-level
//! array, used by the level exports) and data assets (`[0].Properties`,
//! used by the skill graph and the individual skill assets).

use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Keyed records of one DataTable, in document order.
pub type Rows = IndexMap<String, Value>;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("cannot read {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {path}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unexpected shape in {path}: {reason}")]
    Shape { path: PathBuf, reason: String },
}

fn read_json(path: &Path) -> Result<Value, TableError> {
    let data = fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| TableError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn shape_error(path: &Path, reason: &str) -> TableError {
    TableError::Shape {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn into_first_element(path: &Path, root: Value) -> Result<Value, TableError> {
    match root {
        Value::Array(mut elements) if !elements.is_empty() => Ok(elements.remove(0)),
        Value::Array(_) => Err(shape_error(path, "top-level array is empty")),
        _ => Err(shape_error(path, "expected a top-level array")),
    }
}

/// Load the keyed record mapping of a DataTable dump (`[0].Rows`).
pub fn load_rows(path: &Path) -> Result<Rows, TableError> {
    let first = into_first_element(path, read_json(path)?)?;
    match first.get("Rows") {
        Some(Value::Object(rows)) => Ok(rows
            .iter()
            .map(|(key, row)| (key.clone(), row.clone()))
            .collect()),
        Some(_) => Err(shape_error(path, "`Rows` is not an object")),
        None => Err(shape_error(path, "missing `Rows` field")),
    }
}

/// Load a raw element dump: a bare top-level array of objects.
pub fn load_elements(path: &Path) -> Result<Vec<Value>, TableError> {
    match read_json(path)? {
        Value::Array(elements) => Ok(elements),
        _ => Err(shape_error(path, "expected a top-level array")),
    }
}

/// Load the `Properties` object of a data asset dump (`[0].Properties`).
pub fn load_asset_properties(path: &Path) -> Result<Value, TableError> {
    let first = into_first_element(path, read_json(path)?)?;
    match first.get("Properties") {
        Some(props @ Value::Object(_)) => Ok(props.clone()),
        Some(_) => Err(shape_error(path, "`Properties` is not an object")),
        None => Err(shape_error(path, "missing `Properties` field")),
    }
}
