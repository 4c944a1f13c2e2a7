//! Error types for the library

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors produced while capturing a framebuffer.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// The destination could not be created, written or moved into place.
    #[error("Failed to write capture to {}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },

    /// The capture request was rejected before anything was read back.
    #[error("Invalid capture argument: {0}")]
    InvalidArgument(String),
}

impl CaptureError {
    /// Whether this error came from the file system rather than from the request itself.
    pub fn is_io(&self) -> bool {
        matches!(self, CaptureError::Io { .. })
    }
}

/// Convenience type alias for Results with [`CaptureError`]
pub type Result<T, E = CaptureError> = std::result::Result<T, E>;
