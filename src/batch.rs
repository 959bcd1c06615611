use crate::collect::collect_png_files;
use crate::constants::INFO_PREFIX;
use crate::error::{RehashError, Result};
use crate::info;
use crate::processing::process;
use crate::strategy::Reencoder;
use std::path::{Path, PathBuf};

/// Outcome of one pass over the asset tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RehashSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: Vec<PathBuf>,
}

impl RehashSummary {
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

/// Rehashes every PNG under `root`, one file at a time.
///
/// Fails before touching anything when `root` is not a directory or holds no
/// PNG files. Per-file failures are counted, never propagated.
pub fn rehash_assets(root: &Path, reencoder: &dyn Reencoder) -> Result<RehashSummary> {
    if !root.is_dir() {
        return Err(RehashError::RootNotFound(root.to_path_buf()));
    }

    let png_files = collect_png_files(root)?;
    if png_files.is_empty() {
        return Err(RehashError::NoPngFilesFound(root.to_path_buf()));
    }

    info!("{} Found {} PNG files", INFO_PREFIX, png_files.len());
    info!("Processing images with {}...\n", reencoder.kind());

    let mut summary = RehashSummary {
        total: png_files.len(),
        ..Default::default()
    };

    for png_file in png_files {
        if process(&png_file, reencoder) {
            summary.succeeded += 1;
        } else {
            summary.failed.push(png_file);
        }
    }

    Ok(summary)
}
