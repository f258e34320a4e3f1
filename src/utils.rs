use std::path::{Component, Path, PathBuf};

/// Drops `.` components so a walk rooted at `.` reports `a/doc.mdx` rather
/// than `./a/doc.mdx`. Absolute and `..`-relative paths keep their shape.
pub fn display_path(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if cleaned.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        cleaned
    }
}
