//! Repo Atlas CLI
//!
//! Analyzes a source tree and emits the repository model as JSON for a
//! downstream documentation renderer. The binary owns no rendering logic:
//! it serializes the model losslessly and hands it over.
//!
//! ## Usage
//!
//! ```text
//! repo-atlas /path/to/repo --pretty
//! repo-atlas /path/to/repo --output model.json
//! ```

use anyhow::{Context, Result};
use atlas_model::{Analyzer, WalkConfig};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "repo-atlas",
    version,
    about = "Static source-tree analysis for documentation pipelines"
)]
struct Cli {
    /// Root of the source tree to analyze
    path: PathBuf,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pretty: bool,

    /// Write the model to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Maximum directory depth below the root
    #[arg(long, value_name = "LEVELS")]
    max_depth: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = WalkConfig::default();
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = max_depth;
    }

    let model = Analyzer::new(&cli.path)
        .with_config(config)
        .run()
        .with_context(|| format!("failed to analyze {}", cli.path.display()))?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&model)?
    } else {
        serde_json::to_string(&model)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("model written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
