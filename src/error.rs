use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RehashError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "library")]
    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[cfg(feature = "library")]
    #[error("PNG encoding error: {0}")]
    PngEncoding(String),

    #[error("{} not found", .0.display())]
    RootNotFound(PathBuf),

    #[error("No PNG files found in {}", .0.display())]
    NoPngFilesFound(PathBuf),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),

    #[error("Failed to run `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {}: {stderr}", describe_status(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error(
        "Re-encoded image is {}x{}, expected {}x{}",
        .actual.0, .actual.1, .expected.0, .expected.1
    )]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Re-encoded bytes are identical to {}", .0.display())]
    ContentUnchanged(PathBuf),
}

pub type Result<T> = std::result::Result<T, RehashError>;

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "signal".to_string(),
    }
}
