use super::{Reencoder, ReencoderKind};
use crate::constants::{OXIPNG_PRESET, STAMP_KEYWORD};
use crate::error::{RehashError, Result};
use image::{DynamicImage, GenericImageView, ImageFormat};
use oxipng::{BitDepth, ColorType, Options, RawImage};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static STAMP_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct LibraryReencoder {
    options: Options,
}

impl LibraryReencoder {
    pub fn new() -> Self {
        Self {
            options: Options::from_preset(OXIPNG_PRESET),
        }
    }

    pub fn is_available() -> bool {
        ImageFormat::Png.reading_enabled()
    }
}

impl Default for LibraryReencoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Reencoder for LibraryReencoder {
    fn kind(&self) -> ReencoderKind {
        ReencoderKind::Library
    }

    fn reencode(&self, _source: &Path, original: &[u8], dest: &Path) -> Result<()> {
        let img = image::load_from_memory_with_format(original, ImageFormat::Png)?;
        let encoded = encode_png(img, &self.options)?;

        let mut file = File::create(dest)?;
        file.write_all(&encoded)?;
        file.sync_all()?;
        Ok(())
    }
}

/// Encodes `img` as a PNG carrying a fresh stamp chunk.
///
/// The encoding is lossless and leaves fully transparent pixels alone, so the
/// decoded result is pixel-identical to `img`. The stamp makes every call
/// produce different bytes.
pub fn encode_png(img: DynamicImage, options: &Options) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    let (color_type, bit_depth, data) = raw_parts(img);

    let mut raw = RawImage::new(width, height, color_type, bit_depth, data)
        .map_err(|e| RehashError::PngEncoding(e.to_string()))?;
    raw.add_png_chunk(*b"tEXt", stamp_chunk());

    raw.create_optimized_png(options)
        .map_err(|e| RehashError::PngEncoding(e.to_string()))
}

fn raw_parts(img: DynamicImage) -> (ColorType, BitDepth, Vec<u8>) {
    match img {
        DynamicImage::ImageLuma8(buf) => (
            ColorType::Grayscale {
                transparent_shade: None,
            },
            BitDepth::Eight,
            buf.into_raw(),
        ),
        DynamicImage::ImageLumaA8(buf) => {
            (ColorType::GrayscaleAlpha, BitDepth::Eight, buf.into_raw())
        }
        DynamicImage::ImageRgb8(buf) => (
            ColorType::RGB {
                transparent_color: None,
            },
            BitDepth::Eight,
            buf.into_raw(),
        ),
        DynamicImage::ImageRgba8(buf) => (ColorType::RGBA, BitDepth::Eight, buf.into_raw()),
        DynamicImage::ImageLuma16(buf) => (
            ColorType::Grayscale {
                transparent_shade: None,
            },
            BitDepth::Sixteen,
            to_be_bytes(buf.as_raw()),
        ),
        DynamicImage::ImageLumaA16(buf) => (
            ColorType::GrayscaleAlpha,
            BitDepth::Sixteen,
            to_be_bytes(buf.as_raw()),
        ),
        DynamicImage::ImageRgb16(buf) => (
            ColorType::RGB {
                transparent_color: None,
            },
            BitDepth::Sixteen,
            to_be_bytes(buf.as_raw()),
        ),
        DynamicImage::ImageRgba16(buf) => (
            ColorType::RGBA,
            BitDepth::Sixteen,
            to_be_bytes(buf.as_raw()),
        ),
        // Float buffers never come out of the PNG decoder
        other => (ColorType::RGBA, BitDepth::Eight, other.to_rgba8().into_raw()),
    }
}

// PNG stores 16-bit samples big-endian
fn to_be_bytes(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_be_bytes()).collect()
}

/// tEXt payload: keyword, NUL separator, then the stamp text.
fn stamp_chunk() -> Vec<u8> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let sequence = STAMP_COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut chunk = Vec::with_capacity(STAMP_KEYWORD.len() + 48);
    chunk.extend_from_slice(STAMP_KEYWORD.as_bytes());
    chunk.push(0);
    chunk.extend_from_slice(format!("{}-{}-{}", nanos, std::process::id(), sequence).as_bytes());
    chunk
}
