//! Error taxonomy shared by every autostart backend.

use std::path::PathBuf;
use thiserror::Error;

/// Autostart errors surfaced to the immediate caller
#[derive(Debug, Error)]
pub enum AutostartError {
    /// Options were absent or missing a key the backend requires
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `disable` was called for an entry with no backing file
    #[error("Autostart entry not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The host operating system has no autostart backend
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// Filesystem failure, passed through untranslated
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Property list could not be encoded
    #[error("Failed to encode property list: {0}")]
    Plist(#[from] plist::Error),
}

impl AutostartError {
    pub(crate) fn missing_key(key: &str) -> Self {
        AutostartError::InvalidArgument(format!("options are missing required key '{}'", key))
    }

    pub(crate) fn missing_options() -> Self {
        AutostartError::InvalidArgument("options are required".to_string())
    }
}

pub type Result<T> = std::result::Result<T, AutostartError>;
