//! Manor door list: door identifiers pulled from level element dumps.
//!
//! The source files are the pre-update element dumps configured in
//! [`crate::pipeline::SourcePaths`]; they predate the last data refresh
//! but no doors have been added since.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::diag::{Diagnostic, Report};
use crate::tables::{self, TableError};

const DOOR_TYPE: &str = "BP_GPE_ManorInsideDoor_C";

#[derive(Debug, Serialize)]
pub struct ManorDoorMapping {
    #[serde(rename = "ManorDoors")]
    pub doors: Vec<String>,
}

pub fn extract(dumps: &[PathBuf], report: &mut Report) -> Result<ManorDoorMapping, TableError> {
    let mut doors = Vec::new();

    for dump in dumps {
        let elements = tables::load_elements(dump)?;
        let file = dump
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| dump.display().to_string());

        for (index, element) in elements.iter().enumerate() {
            let type_tag = element.get("Type").and_then(Value::as_str).unwrap_or("");
            if !type_tag.contains(DOOR_TYPE) {
                continue;
            }
            match element
                .get("Properties")
                .and_then(|props| props.get("ObjectGlobalID"))
                .and_then(Value::as_str)
            {
                Some(id) => doors.push(id.to_string()),
                None => report.push(Diagnostic::MalformedElement {
                    file: file.clone(),
                    index,
                }),
            }
        }
    }

    Ok(ManorDoorMapping { doors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::Path;

    fn write_dump(dir: &Path, name: &str, elements: Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, elements.to_string()).unwrap();
        path
    }

    #[test]
    fn test_collects_doors_across_dumps() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_dump(
            dir.path(),
            "first.json",
            json!([
                {"Type": "BP_GPE_ManorInsideDoor_C_2147395", "Properties": {"ObjectGlobalID": "door-1"}},
                {"Type": "StaticMeshActor", "Properties": {"ObjectGlobalID": "not-a-door"}},
            ]),
        );
        let second = write_dump(
            dir.path(),
            "second.json",
            json!([
                {"Type": "BP_GPE_ManorInsideDoor_C_99", "Properties": {"ObjectGlobalID": "door-2"}},
            ]),
        );

        let mut report = Report::new();
        let mapping = extract(&[first, second], &mut report).unwrap();

        assert_eq!(mapping.doors, ["door-1", "door-2"]);
        assert!(report.is_empty());
    }

    #[test]
    fn test_door_without_id_reported() {
        let dir = tempfile::tempdir().unwrap();
        let dump = write_dump(
            dir.path(),
            "dump.json",
            json!([{"Type": "BP_GPE_ManorInsideDoor_C_1", "Properties": {}}]),
        );

        let mut report = Report::new();
        let mapping = extract(&[dump], &mut report).unwrap();

        assert!(mapping.doors.is_empty());
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_missing_dump_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut report = Report::new();
        let err = extract(&[dir.path().join("absent.json")], &mut report).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }
}
