//! # Atlas Extract
//!
//! Per-file declaration extraction for Python-style sources.
//!
//! ## Pipeline
//!
//! ```text
//! Source text
//!     │
//!     ├──> Parse (tree-sitter, Python grammar)
//!     │      └─> declaration tree (or a captured syntax error)
//!     │
//!     └──> Visit (single top-down pass, class-depth counter)
//!            ├─ classes: name, direct methods, textual bases
//!            ├─ top-level functions: name, positional params
//!            └─ imports: raw module targets, aliases
//! ```
//!
//! Extraction is syntactic and best-effort: base identifiers and import
//! targets are lexical facts, never resolved against other files. A file
//! that fails to parse yields a [`ModuleResult`] carrying the diagnostic
//! instead of an error — one malformed file must not abort a whole run.

mod dialect;
mod error;
mod extractor;
mod types;

pub use dialect::SourceDialect;
pub use error::{ExtractError, Result};
pub use extractor::DeclarationExtractor;
pub use types::{ClassDecl, FunctionDecl, ImportDecl, ModuleResult};
