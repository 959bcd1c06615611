use super::{Reencoder, ReencoderKind};
use crate::constants::EXTERNAL_COMMAND;
use crate::error::{RehashError, Result};
use std::path::Path;
use std::process::Command;

/// Re-encodes through `sips -s format png <source> --out <dest>`.
#[derive(Debug, Clone)]
pub struct CommandReencoder {
    program: String,
}

impl CommandReencoder {
    pub fn new() -> Self {
        Self::with_program(EXTERNAL_COMMAND)
    }

    /// Uses another executable that accepts the same arguments as `sips`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn is_installed(&self) -> bool {
        which::which(&self.program).is_ok()
    }
}

impl Default for CommandReencoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Reencoder for CommandReencoder {
    fn kind(&self) -> ReencoderKind {
        ReencoderKind::Command
    }

    fn reencode(&self, source: &Path, _original: &[u8], dest: &Path) -> Result<()> {
        let output = Command::new(&self.program)
            .args(["-s", "format", "png"])
            .arg(source)
            .arg("--out")
            .arg(dest)
            .output()
            .map_err(|source| RehashError::CommandSpawn {
                command: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RehashError::CommandFailed {
                command: self.program.clone(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
