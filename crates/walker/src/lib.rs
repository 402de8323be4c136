//! # Atlas Walker
//!
//! Deterministic source-tree traversal for documentation pipelines.
//!
//! ## Pipeline
//!
//! ```text
//! Directory
//!     │
//!     ├──> Walk (ignore sets, depth bound, sorted order)
//!     │      └─> FileNode tree + flat file list + counts
//!     │
//!     └──> Summary (description document, character-capped)
//! ```
//!
//! The walk is read-only and tolerant: unreadable subtrees are skipped with
//! a warning, never aborting the traversal. Only a missing or non-directory
//! root is fatal.

mod config;
mod error;
mod summary;
mod tree;

pub use config::WalkConfig;
pub use error::{Result, WalkError};
pub use summary::read_description;
pub use tree::{FileKind, FileNode, FileTree, SourceWalker};
