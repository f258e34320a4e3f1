//! The line format of the flattened output file.
//!
//! Each line is `<path>:::<content>`. The delimiter is not escaped; readers
//! split on its first occurrence, which is unambiguous as long as the path
//! itself does not contain it.

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};

pub const DELIMITER: &str = ":::";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub path: PathBuf,
    pub content: String,
}

impl Record {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// True when the rendered path contains the delimiter, making the line
    /// impossible to split back reliably.
    pub fn is_ambiguous(&self) -> bool {
        self.path.to_string_lossy().contains(DELIMITER)
    }

    /// True when the path is not valid Unicode and is written with
    /// replacement characters, so the line names a file that does not exist.
    pub fn has_lossy_path(&self) -> bool {
        self.path.to_str().is_none()
    }

    /// Parses one output line (without its trailing newline).
    pub fn parse_line(line: &str) -> Option<Self> {
        let (path, content) = line.split_once(DELIMITER)?;
        Some(Self::new(path, content))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.path.display(), DELIMITER, self.content)
    }
}

/// Loads every record from a flattened output file.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records from {}", path.display()))?;

    text.lines()
        .enumerate()
        .map(|(idx, line)| {
            Record::parse_line(line).with_context(|| {
                format!(
                    "Line {} of {} has no {DELIMITER} delimiter",
                    idx + 1,
                    path.display()
                )
            })
        })
        .collect()
}
