#![cfg(feature = "library")]

use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgba};
use oxipng::Options;
use png_rehash::constants::OXIPNG_PRESET;
use png_rehash::{encode_png, is_png_file, png_dimensions, temp_path_for};
use proptest::prelude::*;
use std::path::Path;

proptest! {
    #[test]
    fn temp_path_is_sibling_with_suffix(
        dir in "[a-zA-Z0-9_]{1,8}(/[a-zA-Z0-9_.]{1,8}){0,3}",
        stem in "[a-zA-Z0-9_@-]{1,12}"
    ) {
        let path = Path::new(&dir).join(format!("{}.png", stem));
        let temp = temp_path_for(&path);

        prop_assert_eq!(temp.parent(), path.parent());
        prop_assert_eq!(
            temp.file_name().unwrap().to_string_lossy(),
            format!("{}.png.tmp", stem)
        );
        prop_assert!(!is_png_file(&temp));
    }

    #[test]
    fn is_png_file_recognizes_extensions(
        extension in prop::sample::select(&["png", "PNG", "Png", "jpg", "json", "tmp", "pngx", "gif"])
    ) {
        let filename = format!("asset.{}", extension);
        let expected = extension == "png";
        prop_assert_eq!(is_png_file(Path::new(&filename)), expected);
    }

    #[test]
    fn encode_png_is_lossless(
        width in 1u32..=24,
        height in 1u32..=24,
        seed in any::<u32>()
    ) {
        let img = DynamicImage::ImageRgba8(ImageBuffer::from_fn(width, height, |x, y| {
            let v = seed.wrapping_mul(x + 1).wrapping_add(y.wrapping_mul(2_654_435_761));
            Rgba([v as u8, (v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8])
        }));

        let encoded = encode_png(img.clone(), &Options::from_preset(OXIPNG_PRESET)).unwrap();
        prop_assert_eq!(png_dimensions(&encoded).unwrap(), (width, height));

        let decoded = image::load_from_memory_with_format(&encoded, ImageFormat::Png).unwrap();
        prop_assert_eq!(decoded.dimensions(), (width, height));
        prop_assert_eq!(decoded.to_rgba8(), img.to_rgba8());
    }
}
