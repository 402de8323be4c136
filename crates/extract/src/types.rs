use serde::{Deserialize, Serialize};

/// A class declaration: direct methods and textual base identifiers, in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    pub methods: Vec<String>,
    pub bases: Vec<String>,
    pub line: usize,
}

/// A top-level (non-method) function declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    /// Positional parameter names in declaration order. Defaults, keyword-only
    /// markers, and annotations are not modeled.
    pub params: Vec<String>,
    pub line: usize,
}

/// A lexical import fact. The target is never validated against actual files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDecl {
    /// Raw textual target, possibly `module.symbol` for from-imports.
    pub module: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Source module of a `from module import name`, kept separately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_module: Option<String>,
}

impl ImportDecl {
    pub fn plain(module: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            module: module.into(),
            alias,
            from_module: None,
        }
    }
}

/// Complete extraction outcome for one source file.
///
/// A file with a parse error still occupies its slot in the aggregate model,
/// with empty declaration lists and the diagnostic kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResult {
    pub classes: Vec<ClassDecl>,
    pub functions: Vec<FunctionDecl>,
    pub imports: Vec<ImportDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModuleResult {
    /// Result slot for a file whose declaration tree could not be built.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
