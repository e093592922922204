//! Idempotent artifact registration.
//!
//! Two shared files track which artifacts the host knows about: the module
//! index (`jsonmappings/mod.rs`, one `pub mod <name>;` line per artifact)
//! and the dispatch file (the host `lib.rs`, one `use` line after the
//! module-declaration anchor and one handler entry inside the
//! `generate_handler!` block). Both are parsed into a line-structured
//! model and updated by set membership, so re-running the pipeline against
//! unchanged artifact names leaves them byte-identical.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Anchor line for generated `use` declarations in the dispatch file.
pub const MODULE_ANCHOR: &str = "mod jsonmappings;";

/// Anchor opening the generated-handler block in the dispatch file.
pub const HANDLER_ANCHOR: &str = "tauri::generate_handler![";

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("cannot access {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("registry anchor `{marker}` not found in {path}")]
    MarkerNotFound { marker: &'static str, path: PathBuf },
}

/// The two registration targets for generated artifacts.
#[derive(Debug, Clone)]
pub struct Registry {
    module_index: PathBuf,
    dispatch_file: PathBuf,
}

impl Registry {
    pub fn new(module_index: PathBuf, dispatch_file: PathBuf) -> Self {
        Registry {
            module_index,
            dispatch_file,
        }
    }

    /// Declare an artifact in both registry files. Returns whether anything
    /// was written; an already-registered name is a no-op.
    pub fn register(&self, name: &str) -> Result<bool, RegistryError> {
        let module_changed = self.declare_module(name)?;
        let dispatch_changed = self.declare_handler(name)?;
        Ok(module_changed || dispatch_changed)
    }

    /// Add `pub mod <name>;` to the module index unless already declared.
    /// The index is wholly generator-owned and is created empty on first
    /// run.
    fn declare_module(&self, name: &str) -> Result<bool, RegistryError> {
        let text = match fs::read_to_string(&self.module_index) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(RegistryError::Io {
                    path: self.module_index.clone(),
                    source,
                })
            }
        };

        let mut index = ModuleIndex::parse(&text);
        if !index.insert(name) {
            return Ok(false);
        }
        self.write(&self.module_index, &index.render())?;
        Ok(true)
    }

    /// Add the `use` line and the handler entry to the dispatch file unless
    /// already declared.
    fn declare_handler(&self, name: &str) -> Result<bool, RegistryError> {
        let text =
            fs::read_to_string(&self.dispatch_file).map_err(|source| RegistryError::Io {
                path: self.dispatch_file.clone(),
                source,
            })?;

        let mut dispatch = DispatchTable::parse(&text, &self.dispatch_file)?;
        if !dispatch.insert(name) {
            return Ok(false);
        }
        self.write(&self.dispatch_file, &dispatch.render())?;
        Ok(true)
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), RegistryError> {
        fs::write(path, content).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Ordered model of the module-inclusion index.
struct ModuleIndex {
    lines: Vec<String>,
    modules: Vec<String>,
}

impl ModuleIndex {
    fn parse(text: &str) -> Self {
        let lines: Vec<String> = split_lines(text);
        let modules = lines.iter().filter_map(|line| module_decl(line)).collect();
        ModuleIndex { lines, modules }
    }

    fn insert(&mut self, name: &str) -> bool {
        if self.modules.iter().any(|module| module == name) {
            return false;
        }
        // Keep the trailing newline last: append before a final empty line.
        let at = match self.lines.last() {
            Some(last) if last.is_empty() => self.lines.len() - 1,
            _ => self.lines.len(),
        };
        self.lines.insert(at, format!("pub mod {name};"));
        self.modules.push(name.to_string());
        true
    }

    fn render(&self) -> String {
        let mut text = self.lines.join("\n");
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }
}

fn module_decl(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix("pub mod ")?;
    Some(rest.strip_suffix(';')?.trim().to_string())
}

/// Line model of the dispatch file with its two anchor positions.
struct DispatchTable {
    lines: Vec<String>,
    module_anchor: usize,
    handler_anchor: usize,
}

impl DispatchTable {
    fn parse(text: &str, path: &Path) -> Result<Self, RegistryError> {
        let lines = split_lines(text);

        let module_anchor = lines
            .iter()
            .position(|line| line.trim() == MODULE_ANCHOR)
            .ok_or_else(|| RegistryError::MarkerNotFound {
                marker: MODULE_ANCHOR,
                path: path.to_path_buf(),
            })?;
        let handler_anchor = lines
            .iter()
            .position(|line| line.contains(HANDLER_ANCHOR))
            .ok_or_else(|| RegistryError::MarkerNotFound {
                marker: HANDLER_ANCHOR,
                path: path.to_path_buf(),
            })?;

        Ok(DispatchTable {
            lines,
            module_anchor,
            handler_anchor,
        })
    }

    fn insert(&mut self, name: &str) -> bool {
        let use_line = format!("use jsonmappings::{name}::get{name};");
        let handler_entry = format!("get{name},");

        let has_use = self.lines.iter().any(|line| line.trim() == use_line);
        let has_handler = self.lines.iter().any(|line| line.trim() == handler_entry);
        if has_use && has_handler {
            return false;
        }

        // Insert at the higher index first so the lower anchor stays valid.
        if !has_handler {
            let line = {
                let indent = leading_whitespace(&self.lines[self.handler_anchor]);
                format!("{indent}    {handler_entry}")
            };
            self.lines.insert(self.handler_anchor + 1, line);
        }
        if !has_use {
            self.lines.insert(self.module_anchor + 1, use_line);
        }
        true
    }

    fn render(&self) -> String {
        self.lines.join("\n")
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}
