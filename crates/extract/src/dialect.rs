use std::path::Path;

/// Source dialects sharing Python-style grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceDialect {
    Python,
    Jac,
}

impl SourceDialect {
    /// Detect dialect from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyw" => Some(Self::Python),
            "jac" => Some(Self::Jac),
            _ => None,
        }
    }

    /// Detect dialect from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Jac => "jac",
        }
    }

    /// Both dialects parse with the Python grammar; Jac is close enough for
    /// structural extraction, and files that stray too far surface as
    /// per-file parse errors rather than failures.
    pub fn tree_sitter_language(self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }
}
