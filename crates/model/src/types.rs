use atlas_extract::ModuleResult;
use atlas_walker::FileNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Globally unique identifier for a declaration: declaring file path plus
/// simple name. Two same-named symbols in different files stay distinct.
pub fn qualified_name(file: &str, name: &str) -> String {
    format!("{file}::{name}")
}

/// A class, keyed in [`RepositoryModel::classes`] by its qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub file: String,
    pub name: String,
    /// Method names in declaration order.
    pub methods: Vec<String>,
    /// Textual base identifiers; may reference external or unresolved symbols.
    pub bases: Vec<String>,
    pub line: usize,
}

/// A top-level function, keyed by its qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub file: String,
    pub name: String,
    pub params: Vec<String>,
    pub line: usize,
}

/// A syntactically derived fact connecting two symbols or files. Edges are
/// not verified and not deduplicated here; display-level dedup belongs to
/// the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RelationshipEdge {
    Inherits {
        /// Simple name of the inheriting class.
        from: String,
        /// Textual base identifier.
        to: String,
        file: String,
    },
    Imports {
        /// Importing file path.
        from: String,
        /// Raw module target, possibly `module.symbol`.
        to: String,
    },
}

/// The aggregate analysis result for a whole source tree — the single data
/// contract handed to the rendering collaborator.
///
/// Constructed once per run and immutable after emission. `BTreeMap` keys
/// give the stable serialization ordering the determinism contract needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryModel {
    pub tree: FileNode,
    pub file_count: usize,
    pub file_types: BTreeMap<String, usize>,
    /// Repository description, character-capped with an ellipsis marker.
    pub summary: String,
    /// File path → extraction outcome, parse errors included.
    pub modules: BTreeMap<String, ModuleResult>,
    /// Qualified class name → record. Same-file redeclaration overwrites.
    pub classes: BTreeMap<String, ClassRecord>,
    /// Qualified function name → record.
    pub functions: BTreeMap<String, FunctionRecord>,
    pub relationships: Vec<RelationshipEdge>,
}

impl RepositoryModel {
    /// Files whose extraction failed, with their diagnostics.
    pub fn failed_modules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules.iter().filter_map(|(path, module)| {
            module
                .error
                .as_deref()
                .map(|error| (path.as_str(), error))
        })
    }
}
