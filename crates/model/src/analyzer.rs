use crate::builder::ModelBuilder;
use crate::error::Result;
use crate::types::RepositoryModel;
use atlas_extract::{DeclarationExtractor, SourceDialect};
use atlas_walker::{read_description, SourceWalker, WalkConfig};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One-shot analysis of the source tree rooted at `root`, with default
/// configuration.
pub fn analyze(root: impl AsRef<Path>) -> Result<RepositoryModel> {
    Analyzer::new(root).run()
}

/// Repository analyzer: walk, extract each source file, fold into the model.
///
/// The pass is sequential and single-writer; per-file failures (unreadable
/// or malformed files) are absorbed locally and never abort the run.
pub struct Analyzer {
    root: PathBuf,
    config: WalkConfig,
}

impl Analyzer {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config: WalkConfig::default(),
        }
    }

    pub fn with_config(mut self, config: WalkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn run(&self) -> Result<RepositoryModel> {
        log::info!("analyzing source tree at {}", self.root.display());

        let walker = SourceWalker::with_config(&self.root, self.config.clone());
        let tree = walker.walk()?;
        let summary = read_description(&self.root, self.config.summary_cap);

        // One reusable extractor per dialect for the whole run.
        let mut extractors: HashMap<SourceDialect, DeclarationExtractor> = HashMap::new();
        let mut builder = ModelBuilder::new();

        for file in &tree.files {
            let Some(dialect) = SourceDialect::from_path(file) else {
                continue;
            };

            let content = match std::fs::read_to_string(self.root.join(file)) {
                Ok(content) => content,
                Err(err) => {
                    // Still counted by the walker; just no module entry.
                    log::warn!("skipping unreadable file {file}: {err}");
                    continue;
                }
            };

            let extractor = match extractors.entry(dialect) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(DeclarationExtractor::new(dialect)?),
            };

            let result = extractor.extract(&content);
            if let Some(error) = &result.error {
                log::debug!("{file}: {error}");
            }
            builder.add_module(file.clone(), result);
        }

        let model = builder.finish(tree, summary);
        log::info!(
            "extracted {} classes, {} functions, {} relationships from {} files",
            model.classes.len(),
            model.functions.len(),
            model.relationships.len(),
            model.file_count
        );

        Ok(model)
    }
}
