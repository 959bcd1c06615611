//! Re-encode strategies.
//!
//! A [`Reencoder`] writes a fresh encoding of a PNG to a destination path and
//! never touches the source. Replacing the source is left to
//! [`crate::processing`], so both strategies share the same verification and
//! atomic-rename path.

mod command;
#[cfg(feature = "library")]
mod library;

pub use command::CommandReencoder;
#[cfg(feature = "library")]
pub use library::{encode_png, LibraryReencoder};

use crate::constants::EXTERNAL_COMMAND;
use crate::error::Result;
use crate::warn;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReencoderKind {
    /// In-process decode and re-encode
    Library,
    /// External conversion command
    Command,
}

impl fmt::Display for ReencoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReencoderKind::Library => write!(f, "image library"),
            ReencoderKind::Command => write!(f, "external command ({})", EXTERNAL_COMMAND),
        }
    }
}

pub trait Reencoder {
    fn kind(&self) -> ReencoderKind;

    /// Writes a new PNG encoding of `source` to `dest`.
    ///
    /// `original` holds the bytes of `source` as read by the caller.
    fn reencode(&self, source: &Path, original: &[u8], dest: &Path) -> Result<()>;
}

/// Picks the strategy for the whole run.
///
/// The library strategy wins whenever the crate was built with the `library`
/// feature and its PNG decoder is usable. Otherwise the command strategy is
/// chosen, even if the command is missing; in that case every file fails
/// individually.
pub fn select_reencoder() -> Box<dyn Reencoder> {
    if let Some(library) = library_reencoder() {
        return library;
    }

    let command = CommandReencoder::new();
    if !command.is_installed() {
        warn!(
            "PNG decoder not built in and `{}` not found in PATH; every file will fail",
            EXTERNAL_COMMAND
        );
    }
    Box::new(command)
}

#[cfg(feature = "library")]
fn library_reencoder() -> Option<Box<dyn Reencoder>> {
    if LibraryReencoder::is_available() {
        Some(Box::new(LibraryReencoder::new()))
    } else {
        None
    }
}

#[cfg(not(feature = "library"))]
fn library_reencoder() -> Option<Box<dyn Reencoder>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "library")]
    #[test]
    fn test_select_reencoder_prefers_library() {
        assert_eq!(select_reencoder().kind(), ReencoderKind::Library);
    }

    #[cfg(not(feature = "library"))]
    #[test]
    fn test_select_reencoder_falls_back_to_command() {
        assert!(library_reencoder().is_none());
        assert_eq!(select_reencoder().kind(), ReencoderKind::Command);
    }

    #[test]
    fn test_reencoder_kind_display() {
        assert_eq!(ReencoderKind::Library.to_string(), "image library");
        assert_eq!(
            ReencoderKind::Command.to_string(),
            "external command (sips)"
        );
    }
}
