/// Asset tree scanned by the tool, relative to the working directory.
pub const ASSETS_DIR: &str = "MasterMath/Assets.xcassets";

/// Extension of the files that get rehashed (matched case-insensitively).
pub const TARGET_EXTENSION: &str = "png";

/// Appended to the asset path to form the temporary output path.
pub const TEMP_SUFFIX: &str = ".tmp";

/// macOS image conversion tool used when the in-process decoder is unavailable.
pub const EXTERNAL_COMMAND: &str = "sips";

/// oxipng preset used for the library re-encode. Low effort; the output only
/// needs to be a valid lossless encoding, not the smallest one.
pub const OXIPNG_PRESET: u8 = 1;

/// Keyword of the tEXt chunk that carries the per-write stamp.
pub const STAMP_KEYWORD: &str = "Rehash";

// Output message prefixes
pub const SUCCESS_PREFIX: &str = "✓";
pub const FAILURE_PREFIX: &str = "✗";
pub const WARNING_PREFIX: &str = "⚠️";
pub const INFO_PREFIX: &str = "📋";
