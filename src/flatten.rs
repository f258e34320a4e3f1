//! Collapsing a document into a single line.

use crate::error::ReadError;
use content_inspector::{ContentType, inspect};
use log::debug;
use memmap2::MmapOptions;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::path::Path;
use std::str;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Replaces every run of whitespace (newlines included) with a single space
/// and trims both ends.
pub fn flatten_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Reads the whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let file = File::open(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    // Mapping a zero-length file is not portable.
    let len = file
        .metadata()
        .map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if len == 0 {
        debug!("{} is empty", path.display());
        return Ok(String::new());
    }

    let mmap = unsafe {
        MmapOptions::new()
            .map(&file)
            .map_err(|source| ReadError::Map {
                path: path.to_path_buf(),
                source,
            })?
    };

    match str::from_utf8(&mmap) {
        Ok(text) => Ok(text.to_owned()),
        Err(source) => {
            let sample_size = std::cmp::min(8192, mmap.len());
            Err(ReadError::Decode {
                path: path.to_path_buf(),
                kind: describe_content(inspect(&mmap[..sample_size])),
                source,
            })
        }
    }
}

/// Reads and flattens one document.
pub fn flatten_file(path: &Path) -> Result<String, ReadError> {
    read_text(path).map(|text| flatten_whitespace(&text))
}

fn describe_content(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::BINARY => "binary content",
        ContentType::UTF_16LE | ContentType::UTF_16BE => "UTF-16 text",
        ContentType::UTF_32LE | ContentType::UTF_32BE => "UTF-32 text",
        _ => "invalid UTF-8 sequence",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(flatten_whitespace("Hello\n\n  World  "), "Hello World");
        assert_eq!(flatten_whitespace("\t a\r\nb\u{a0}\u{2003}c \n"), "a b c");
    }

    #[test]
    fn empty_and_blank_inputs_flatten_to_nothing() {
        assert_eq!(flatten_whitespace(""), "");
        assert_eq!(flatten_whitespace(" \n\t\r\n  "), "");
    }

    #[test]
    fn matches_split_and_rejoin() {
        let inputs = [
            "# Title\n\nSome *text*\n\n```js\nconst x = 1;\n```\n",
            "---\ntitle: Front matter\n---\n\n<Tabs>\n  <Tab>one</Tab>\n</Tabs>",
            "   leading only",
            "trailing only\n\n\n",
        ];
        for input in inputs {
            let flat = flatten_whitespace(input);
            let expected = input.split_whitespace().collect::<Vec<_>>().join(" ");
            assert_eq!(flat, expected);
            assert!(!flat.contains("  "));
            assert!(!flat.contains('\n'));
        }
    }

    #[test]
    fn handles_unusual_whitespace() {
        let cases = [
            ("one\rtwo", "one two"),
            ("\rlead", "lead"),
            ("next\u{85}line", "next line"),
            ("line\u{2028}sep\u{2029}para", "line sep para"),
            ("tab\x0bvertical\x0cfeed", "tab vertical feed"),
            ("\u{3000}ideographic\u{3000}", "ideographic"),
            ("\u{feff}bom kept", "\u{feff}bom kept"),
            ("zero\u{200b}width", "zero\u{200b}width"),
            ("a \u{feff} b", "a \u{feff} b"),
        ];
        for (input, expected) in cases {
            let flat = flatten_whitespace(input);
            assert_eq!(flat, expected, "{input:?}");
            assert_eq!(flat, input.split_whitespace().collect::<Vec<_>>().join(" "));
            assert_eq!(flatten_whitespace(&flat), flat);
        }
    }

    #[test]
    fn flattening_is_idempotent() {
        let once = flatten_whitespace("a\n b\t\tc\r\n\r\n d ");
        assert_eq!(flatten_whitespace(&once), once);
    }

    #[test]
    fn reads_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.mdx");
        fs::write(&path, "").unwrap();

        assert_eq!(flatten_file(&path).unwrap(), "");
    }

    #[test]
    fn rejects_non_utf8_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.mdx");
        fs::write(&path, [b'o', b'k', b' ', 0xFF, 0xFE, 0xFD, b'\n']).unwrap();

        let err = flatten_file(&path).unwrap_err();
        assert!(matches!(err, ReadError::Decode { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn reports_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.mdx");

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, ReadError::Open { .. }));
        assert!(err.to_string().contains("gone.mdx"));
    }
}
