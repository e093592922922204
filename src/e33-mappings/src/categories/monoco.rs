//! Monoco skill mapping: skill graph traversal with per-node asset lookup.
//!
//! The skill graph asset lists unlock nodes; each node references the
//! actual skill as a separate data asset. Skills unlocked through a
//! gradient unlock item form their own sub-mapping without requirement
//! data.

use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::codes;
use crate::diag::{Diagnostic, Report};
use crate::order::{self, Ranked, Tier};
use crate::tables::{self, TableError};
use crate::text::{LocalizedText, ResolvedName};

const GRADIENT_REQUIREMENT: &str = "GradientUnlock";

#[derive(Debug, Serialize)]
pub struct MonocoMapping {
    #[serde(rename = "MonocoSkills")]
    pub skills: IndexMap<String, MonocoSkill>,

    #[serde(rename = "MonocoGradient")]
    pub gradient: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonocoSkill {
    #[serde(rename = "skillname")]
    pub skill_name: String,

    #[serde(rename = "itemrequirements")]
    pub item_requirement: String,
}

pub fn extract(
    graph_path: &Path,
    skills_dir: &Path,
    report: &mut Report,
) -> Result<MonocoMapping, TableError> {
    let graph = tables::load_asset_properties(graph_path)?;
    let Some(nodes) = graph.get("Nodes").and_then(Value::as_array) else {
        return Err(TableError::Shape {
            path: graph_path.to_path_buf(),
            reason: "missing `Nodes` array".to_string(),
        });
    };

    let mut skills = Vec::new();
    let mut gradient = Vec::new();

    for (index, node) in nodes.iter().enumerate() {
        let Some((requirement, object_path)) = unlock_data(node) else {
            report.push(Diagnostic::MalformedSkillNode { index });
            continue;
        };

        let asset_path = skills_dir.join(asset_file_name(object_path));
        let skill = tables::load_asset_properties(&asset_path)?;

        let key = skill.get("NameID").and_then(Value::as_str);
        let name = match LocalizedText::from_field(&skill, "name").resolve() {
            ResolvedName::Primary(name) => Some(name),
            _ => None,
        };
        let (Some(key), Some(name)) = (key, name) else {
            report.push(Diagnostic::NamelessSkill {
                path: asset_path.display().to_string(),
            });
            continue;
        };

        if requirement.contains(GRADIENT_REQUIREMENT) {
            gradient.push((key.to_string(), name, Tier::Normal));
        } else {
            skills.push(Ranked {
                key: key.to_string(),
                sort_label: name.clone(),
                tier: Tier::Normal,
                value: MonocoSkill {
                    skill_name: name,
                    item_requirement: requirement.to_string(),
                },
            });
        }
    }

    Ok(MonocoMapping {
        skills: order::into_ordered(skills),
        gradient: order::into_labeled(gradient),
    })
}

fn unlock_data(node: &Value) -> Option<(&str, &str)> {
    let unlock = node.get(codes::SKILL_UNLOCK_FIELD)?;
    let requirement = unlock
        .get(codes::SKILL_REQUIREMENT_FIELD)?
        .get("RowName")?
        .as_str()?;
    let object_path = unlock
        .get(codes::SKILL_ASSET_FIELD)?
        .get("ObjectPath")?
        .as_str()?;
    Some((requirement, object_path))
}

/// `/Game/.../Skills/DA_MonocoSkill_Slam.0` -> `DA_MonocoSkill_Slam.json`
fn asset_file_name(object_path: &str) -> String {
    let base = object_path.rsplit('/').next().unwrap_or(object_path);
    let stem = base.strip_suffix(".0").unwrap_or(base);
    format!("{stem}.json")
}
