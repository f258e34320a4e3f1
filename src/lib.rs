//! # flatdocs
//!
//! Walks a directory tree, finds every `.mdx` document (case-insensitively),
//! collapses each one onto a single whitespace-normalized line and writes
//! `<path>:::<content>` records into one output file. Files that cannot be read
//! are logged and skipped; they never abort the run.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flatdocs::{Config, run_flatten};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::new("docs").with_output("docs.txt");
//!     let summary = run_flatten(&config).await?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod filewalker;
pub mod flatten;
pub mod record;
pub mod utils;
pub mod writer;

pub use cli::{Config, DEFAULT_OUTPUT_FILE};
pub use error::{OutputCreationError, ReadError};
pub use filewalker::{TARGET_EXTENSION, matches_extension, walk_candidates};
pub use flatten::{flatten_file, flatten_whitespace};
pub use record::{DELIMITER, Record, read_records};
pub use writer::RecordWriter;

use anyhow::Result;
use log::{info, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs::File;

/// A matching file that produced no record.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: ReadError,
}

/// Outcome of one run.
#[derive(Debug)]
pub struct FlattenSummary {
    pub flattened: usize,
    pub skipped: Vec<SkippedFile>,
    pub output_path: PathBuf,
}

impl fmt::Display for FlattenSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found and flattened contents of {} .{} files to {}",
            self.flattened,
            TARGET_EXTENSION,
            self.output_path.display()
        )
    }
}

/// Flattens every matching file under `config.root` into `config.output_path`.
///
/// The output file is truncated up front. Only a failure to create it, or to
/// write to it, ends the run early.
pub async fn run_flatten(config: &Config) -> Result<FlattenSummary> {
    let file = File::create(&config.output_path)
        .await
        .map_err(|source| OutputCreationError {
            path: config.output_path.clone(),
            source,
        })?;
    let mut writer = RecordWriter::new(file);

    let mut flattened = 0;
    let mut skipped = Vec::new();

    for path in walk_candidates(&config.root, Some(&config.output_path)) {
        match flatten_file(&path) {
            Ok(content) => {
                writer
                    .write_record(&Record::new(utils::display_path(&path), content))
                    .await?;
                flattened += 1;
            }
            Err(error) => {
                warn!("Error reading file {}: {error}", path.display());
                skipped.push(SkippedFile { path, error });
            }
        }
    }

    writer.flush().await?;

    info!(
        "Flattened {flattened} files from {}, skipped {}",
        config.root.display(),
        skipped.len()
    );

    Ok(FlattenSummary {
        flattened,
        skipped,
        output_path: config.output_path.clone(),
    })
}

/// Embedding entry point: flattens `directory` into `output_file`, or into
/// [`DEFAULT_OUTPUT_FILE`] when none is given.
pub async fn save_flattened_contents(
    directory: &Path,
    output_file: Option<&Path>,
) -> Result<FlattenSummary> {
    let mut config = Config::new(directory);
    if let Some(output_file) = output_file {
        config = config.with_output(output_file);
    }
    run_flatten(&config).await
}
