use crate::constants::{FAILURE_PREFIX, SUCCESS_PREFIX, TEMP_SUFFIX};
use crate::error::{RehashError, Result};
use crate::strategy::Reencoder;
use crate::{info, verbose};
#[cfg(feature = "library")]
use image::{ImageFormat, ImageReader};
use std::ffi::OsString;
use std::fs;
#[cfg(feature = "library")]
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Rehashes one asset and reports the outcome on stdout.
///
/// Every error is absorbed here; the caller only learns whether the file on
/// disk was replaced.
pub fn process(path: &Path, reencoder: &dyn Reencoder) -> bool {
    match rehash_file(path, reencoder) {
        Ok(()) => {
            info!("{} Modified: {}", SUCCESS_PREFIX, path.display());
            true
        }
        Err(e) => {
            info!("{} Failed: {}: {}", FAILURE_PREFIX, path.display(), e);
            false
        }
    }
}

/// Re-encodes `path` into its temporary sibling, verifies the result and
/// renames it over the original.
///
/// # Returns
/// * `Ok(())` - The file now holds a new encoding of the same image
/// * `Err(RehashError)` - The original is untouched and no temp file remains
pub fn rehash_file(path: &Path, reencoder: &dyn Reencoder) -> Result<()> {
    let original = fs::read(path)?;
    let temp_path = temp_path_for(path);
    let guard = TempFileGuard::new(temp_path.clone());

    reencoder.reencode(path, &original, &temp_path)?;
    let replacement_size = verify_replacement(path, &original, &temp_path)?;

    fs::rename(&temp_path, path)?;
    guard.disarm();

    verbose!(
        "{} via {}: {} -> {} bytes",
        path.display(),
        reencoder.kind(),
        original.len(),
        replacement_size
    );
    Ok(())
}

/// `icon.png` -> `icon.png.tmp`, in the same directory so the rename stays
/// on one filesystem.
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Checks the temp file before it may replace `original_path`.
///
/// The bytes must differ from the original, and in builds with the PNG
/// decoder both encodings must report the same dimensions. Returns the size
/// of the replacement in bytes.
fn verify_replacement(original_path: &Path, original: &[u8], temp_path: &Path) -> Result<usize> {
    let replacement = fs::read(temp_path)?;

    if replacement == original {
        return Err(RehashError::ContentUnchanged(original_path.to_path_buf()));
    }

    #[cfg(feature = "library")]
    {
        let expected = png_dimensions(original)?;
        let actual = png_dimensions(&replacement)?;
        if expected != actual {
            return Err(RehashError::DimensionMismatch { expected, actual });
        }
    }

    Ok(replacement.len())
}

/// Reads width and height from the PNG header without decoding pixels.
#[cfg(feature = "library")]
pub fn png_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let mut reader = ImageReader::new(Cursor::new(bytes));
    reader.set_format(ImageFormat::Png);
    Ok(reader.into_dimensions()?)
}

/// Removes the temp file on drop unless the rename went through.
struct TempFileGuard {
    path: PathBuf,
    armed: bool,
}

impl TempFileGuard {
    fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}
