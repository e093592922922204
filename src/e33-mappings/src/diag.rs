//! Structured diagnostics for non-fatal data anomalies.
//!
//! Extractors never print; they push into a [`Report`] the caller renders
//! or asserts against. Nothing here aborts a run.

use std::fmt;

/// One non-fatal anomaly encountered while extracting a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Record has no usable display text under the category's rules.
    UnresolvedName { table: &'static str, key: String },

    /// Item subtype code missing from the configured code table.
    UnknownSubtype { key: String, code: String },

    /// Skill graph node without the expected unlock structure.
    MalformedSkillNode { index: usize },

    /// Skill asset with no usable name or key.
    NamelessSkill { path: String },

    /// Level row without a display name, outside the known exceptions.
    EmptyLevelName { key: String },

    /// Two levels resolved to the same display name; the first wins.
    DuplicateLevelName { name: String },

    /// Sub-area flag with an empty display name.
    EmptyFlagName { flag: String, level: String },

    /// Element dump entry missing its identifier.
    MalformedElement { file: String, index: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedName { table, key } => {
                write!(f, "{}: no resolvable display name for `{}`", table, key)
            }
            Diagnostic::UnknownSubtype { key, code } => {
                write!(f, "unknown item subtype `{}` on `{}`", code, key)
            }
            Diagnostic::MalformedSkillNode { index } => {
                write!(f, "skill graph node {} has no unlock data", index)
            }
            Diagnostic::NamelessSkill { path } => {
                write!(f, "skill asset {} has no usable name", path)
            }
            Diagnostic::EmptyLevelName { key } => {
                write!(f, "level name is empty for level that shouldn't be: {}", key)
            }
            Diagnostic::DuplicateLevelName { name } => {
                write!(f, "duplicate level name found: {}", name)
            }
            Diagnostic::EmptyFlagName { flag, level } => {
                write!(f, "flag name is empty for flag {} in level {}", flag, level)
            }
            Diagnostic::MalformedElement { file, index } => {
                write!(f, "element {} in {} has no identifier", index, file)
            }
        }
    }
}

/// Accumulated diagnostics for one extraction run.
#[derive(Debug, Default)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_accumulates() {
        let mut report = Report::new();
        assert!(report.is_empty());

        report.push(Diagnostic::DuplicateLevelName {
            name: "Lumière".to_string(),
        });
        report.push(Diagnostic::EmptyLevelName {
            key: "Map_Unknown".to_string(),
        });

        assert_eq!(report.len(), 2);
        let rendered: Vec<String> = report.iter().map(ToString::to_string).collect();
        assert_eq!(rendered[0], "duplicate level name found: Lumière");
    }
}
