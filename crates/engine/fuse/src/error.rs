//! Error types for the fuse crate

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fuse operations
pub type FuseResult<T> = std::result::Result<T, FuseError>;

/// Pipeline stage a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Decode,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Decode => write!(f, "decode"),
            Stage::Write => write!(f, "write"),
        }
    }
}

/// Errors that abort a fuse run
#[derive(Debug, Error)]
pub enum FuseError {
    /// Input image could not be opened or decoded
    #[error("Failed to decode image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output file could not be written
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FuseError {
    /// Stage that produced this error
    pub fn stage(&self) -> Stage {
        match self {
            FuseError::Decode { .. } => Stage::Decode,
            FuseError::Write { .. } => Stage::Write,
        }
    }
}
