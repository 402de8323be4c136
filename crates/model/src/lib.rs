//! # Atlas Model
//!
//! Aggregation of per-file extraction results into the repository model
//! handed to a documentation renderer.
//!
//! ## Pipeline
//!
//! ```text
//! Directory
//!     │
//!     ├──> Walk (atlas-walker)
//!     │      └─> FileNode tree + file list + counts
//!     │
//!     ├──> Extract per file (atlas-extract)
//!     │      └─> ModuleResult (declarations or captured parse error)
//!     │
//!     └──> Fold (ModelBuilder)
//!            ├─ qualified-name maps: "<file>::<name>" → record
//!            ├─ relationship edges: inherits, imports
//!            └─> RepositoryModel (serializable, deterministic)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! fn main() -> Result<(), atlas_model::AnalyzeError> {
//!     let model = atlas_model::analyze("/path/to/repo")?;
//!     println!(
//!         "{} files, {} classes, {} relationships",
//!         model.file_count,
//!         model.classes.len(),
//!         model.relationships.len()
//!     );
//!     Ok(())
//! }
//! ```

mod analyzer;
mod builder;
mod error;
mod types;

pub use analyzer::{analyze, Analyzer};
pub use builder::ModelBuilder;
pub use error::{AnalyzeError, Result};
pub use types::{qualified_name, ClassRecord, FunctionRecord, RelationshipEdge, RepositoryModel};

pub use atlas_extract::{
    ClassDecl, DeclarationExtractor, FunctionDecl, ImportDecl, ModuleResult, SourceDialect,
};
pub use atlas_walker::{FileKind, FileNode, FileTree, SourceWalker, WalkConfig};
