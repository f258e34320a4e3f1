use ignore::WalkBuilder;
use log::{debug, warn};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the documents that get flattened.
pub const TARGET_EXTENSION: &str = "mdx";

/// Walks `root` lazily and yields every non-directory entry whose name ends with
/// the target extension. Hidden directories and ignore files are not honoured;
/// every entry is visited. Directories that cannot be listed are logged and
/// skipped.
///
/// `exclude` names a file that must never be yielded, typically the output file
/// being written during the same run.
pub fn walk_candidates(
    root: &Path,
    exclude: Option<&Path>,
) -> impl Iterator<Item = PathBuf> + use<> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);

    let exclude = exclude
        .and_then(|p| Some((p.file_name()?.to_owned(), fs::canonicalize(p).ok()?)));

    builder.build().filter_map(move |result| match result {
        Ok(entry) => {
            let path = entry.path();
            if !matches_extension(entry.file_name()) || !is_readable_kind(path) {
                return None;
            }
            if let Some((name, canonical)) = &exclude {
                if entry.file_name() == name.as_os_str()
                    && fs::canonicalize(path).is_ok_and(|p| &p == canonical)
                {
                    debug!("Skipping output file: {}", path.display());
                    return None;
                }
            }
            Some(entry.into_path())
        }
        Err(err) => {
            warn!("Error walking path: {err}");
            None
        }
    })
}

/// Regular files, and links that cannot be resolved. A dangling link still
/// reaches the reader so its failure is reported like any other.
fn is_readable_kind(path: &Path) -> bool {
    fs::metadata(path).map_or(true, |meta| meta.is_file())
}

/// True when `name` ends with `.mdx`, ignoring ASCII case.
pub fn matches_extension(name: &OsStr) -> bool {
    let name = name.as_encoded_bytes();
    let suffix_len = TARGET_EXTENSION.len() + 1;
    if name.len() < suffix_len {
        return false;
    }
    let suffix = &name[name.len() - suffix_len..];
    suffix[0] == b'.' && suffix[1..].eq_ignore_ascii_case(TARGET_EXTENSION.as_bytes())
}
