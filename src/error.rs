use std::io;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;
use thiserror::Error;

/// A matching file that could not be turned into a record.
///
/// These never abort a run; the orchestrator logs them and moves on.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to map {}: {source}", .path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not UTF-8 text ({kind}): {source}", .path.display())]
    Decode {
        path: PathBuf,
        kind: &'static str,
        #[source]
        source: Utf8Error,
    },
}

impl ReadError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Map { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

/// The output file could not be created, so nothing can be written.
#[derive(Debug, Error)]
#[error("cannot create output file {}: {source}", .path.display())]
pub struct OutputCreationError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
