use crate::config::WalkConfig;
use crate::error::{Result, WalkError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Directory,
    File,
}

/// One node of the repo-relative file tree.
///
/// Children are kept in lexicographically sorted name order, which is the
/// insertion order of the sorted walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    /// Repo-relative path with `/` separators; empty for the root node.
    pub path: String,
    pub kind: FileKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileNode>,
}

impl FileNode {
    fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: FileKind::Directory,
            children: Vec::new(),
        }
    }

    fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: FileKind::File,
            children: Vec::new(),
        }
    }

    /// Find a direct child by name.
    pub fn child(&self, name: &str) -> Option<&FileNode> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Walk output: the nested tree plus flat statistics over the same entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTree {
    pub root: FileNode,
    /// Repo-relative paths of every surviving file, in traversal order
    /// (sorted depth-first).
    pub files: Vec<String>,
    pub file_count: usize,
    /// Extension (`.py`-style, empty string when absent) to file count.
    pub file_types: BTreeMap<String, usize>,
}

/// Read-only, deterministic directory walker.
///
/// Ignored names are dropped during traversal, unreadable entries are
/// skipped with a warning, and directories left without children are pruned
/// from the resulting tree.
pub struct SourceWalker {
    root: PathBuf,
    config: WalkConfig,
}

impl SourceWalker {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_config(root, WalkConfig::default())
    }

    pub fn with_config(root: impl AsRef<Path>, config: WalkConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    pub fn walk(&self) -> Result<FileTree> {
        if !self.root.is_dir() {
            return Err(WalkError::InvalidRoot(format!(
                "{} does not exist or is not a directory",
                self.root.display()
            )));
        }

        let mut stack = vec![FileNode::directory("", "")];
        let mut files = Vec::new();
        let mut file_types: BTreeMap<String, usize> = BTreeMap::new();

        let config = &self.config;
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(config.max_depth)
            .sort_by_file_name()
            .into_iter()
            // The root itself is exempt: a repository checked out into a
            // directory named like an ignored one must still be walked.
            .filter_entry(|e| {
                e.depth() == 0 || !config.is_ignored(e.file_name().to_string_lossy().as_ref())
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("skipping unreadable entry: {err}");
                    continue;
                }
            };

            // The walk is depth-first: once an entry at depth `d` arrives,
            // every directory deeper than `d - 1` on the stack is complete.
            collapse_to(&mut stack, entry.depth());

            let name = entry.file_name().to_string_lossy().into_owned();
            let rel = relative_path(entry.path(), &self.root);

            if entry.file_type().is_dir() {
                stack.push(FileNode::directory(name, rel));
            } else {
                *file_types.entry(extension_key(&name)).or_insert(0) += 1;
                files.push(rel.clone());
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(FileNode::file(name, rel));
                }
            }
        }

        collapse_to(&mut stack, 1);
        let mut root = stack.pop().unwrap_or_else(|| FileNode::directory("", ""));
        prune_empty_dirs(&mut root);

        let file_count = files.len();
        Ok(FileTree {
            root,
            files,
            file_count,
            file_types,
        })
    }
}

/// Pop finished directories off the stack and attach them to their parents,
/// until the stack top is the parent of an entry at `depth`.
fn collapse_to(stack: &mut Vec<FileNode>, depth: usize) {
    while stack.len() > depth.max(1) {
        if let Some(done) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(done);
            }
        }
    }
}

/// Directories with no surviving children are omitted entirely, whether
/// emptied by ignore-filtering or by the depth bound.
fn prune_empty_dirs(node: &mut FileNode) {
    node.children.retain_mut(|child| match child.kind {
        FileKind::File => true,
        FileKind::Directory => {
            prune_empty_dirs(child);
            !child.children.is_empty()
        }
    });
}

fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<_> = rel
        .iter()
        .map(|part| part.to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}

/// `.py`-style extension key; files without an extension share the empty key.
fn extension_key(name: &str) -> String {
    match Path::new(name).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}
