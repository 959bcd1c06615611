#![cfg(feature = "library")]

use image::{ImageBuffer, ImageFormat, Rgba};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ASSETS_DIR: &str = "MasterMath/Assets.xcassets";

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Creates `MasterMath/Assets.xcassets` under `workdir` and returns its path.
pub fn create_assets_dir(workdir: &Path) -> PathBuf {
    let assets = workdir.join(ASSETS_DIR);
    fs::create_dir_all(&assets).unwrap();
    assets
}

pub fn write_test_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x * 3) as u8, (y * 5) as u8, 128, 255])
    });
    img.save_with_format(path, ImageFormat::Png).unwrap();
}

/// Lays out a small asset catalog with three PNGs and a couple of non-PNG
/// files. Returns the PNG paths.
pub fn create_asset_catalog(assets: &Path) -> Vec<PathBuf> {
    let icon = assets.join("AppIcon.appiconset");
    let logo = assets.join("Logo.imageset");

    let pngs = vec![
        icon.join("icon-60@2x.png"),
        icon.join("icon-60@3x.png"),
        logo.join("logo.png"),
    ];
    write_test_png(&pngs[0], 120, 120);
    write_test_png(&pngs[1], 180, 180);
    write_test_png(&pngs[2], 64, 32);

    fs::write(icon.join("Contents.json"), b"{\"images\":[]}").unwrap();
    fs::write(logo.join("Contents.json"), b"{\"images\":[]}").unwrap();

    pngs
}

pub fn read_all(paths: &[PathBuf]) -> Vec<Vec<u8>> {
    paths.iter().map(|p| fs::read(p).unwrap()).collect()
}
