use crate::constants::TARGET_EXTENSION;
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects every PNG file under `root`, sorted by path.
///
/// Symlinked files count when their target is a regular file. Symlinked
/// directories are not descended into.
pub fn collect_png_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut png_files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if is_png_file(entry.path()) && entry.path().is_file() {
            png_files.push(entry.into_path());
        }
    }

    Ok(png_files)
}

pub fn is_png_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext == TARGET_EXTENSION)
        .unwrap_or(false)
}
