use std::collections::HashSet;

/// Directory names never shown or descended into: version-control metadata,
/// dependency and cache directories, build output, IDE metadata.
const IGNORED_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    ".venv",
    "venv",
    "env",
    ".pytest_cache",
    ".mypy_cache",
    "dist",
    "build",
    ".idea",
];

/// Housekeeping files excluded from the tree and from file counts.
const IGNORED_FILES: &[&str] = &[".DS_Store", ".gitignore", ".gitattributes"];

/// Walker configuration, injected at construction.
///
/// The defaults carry the fixed ignore sets; callers with unusual trees can
/// override depth or caps without touching global state.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    pub ignore_dirs: HashSet<&'static str>,
    pub ignore_files: HashSet<&'static str>,
    /// Maximum directory levels below the root. Deeper subtrees are
    /// silently truncated, not reported as an error.
    pub max_depth: usize,
    /// Character cap for the repository description.
    pub summary_cap: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: IGNORED_DIRS.iter().copied().collect(),
            ignore_files: IGNORED_FILES.iter().copied().collect(),
            max_depth: 5,
            summary_cap: 500,
        }
    }
}

impl WalkConfig {
    /// Entry names in either ignore set are skipped regardless of kind.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_dirs.contains(name) || self.ignore_files.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sets_cover_vcs_and_caches() {
        let config = WalkConfig::default();
        assert!(config.is_ignored(".git"));
        assert!(config.is_ignored("__pycache__"));
        assert!(config.is_ignored("node_modules"));
        assert!(config.is_ignored(".DS_Store"));
        assert!(!config.is_ignored("src"));
        assert!(!config.is_ignored("main.py"));
    }
}
