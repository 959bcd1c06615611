pub mod batch;
pub mod cli;
pub mod collect;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod strategy;

pub use batch::{rehash_assets, RehashSummary};
pub use collect::{collect_png_files, is_png_file};
pub use error::{RehashError, Result};
#[cfg(feature = "library")]
pub use processing::png_dimensions;
pub use processing::{process, rehash_file, temp_path_for};
pub use strategy::{select_reencoder, CommandReencoder, Reencoder, ReencoderKind};
#[cfg(feature = "library")]
pub use strategy::{encode_png, LibraryReencoder};
