//! Autostart backends.
//!
//! Each backend owns a [`PathResolver`] and turns an entry name into one
//! file on disk. Enabling writes the file, disabling removes it, and the
//! file's presence alone decides whether the entry is enabled.

mod launch_agent;
mod startup_folder;

pub use launch_agent::{launch_agent_options, LaunchAgentOptions, LaunchAgents};
pub use startup_folder::{StartupFolder, StartupScriptOptions, DEFAULT_COMMAND};

use crate::error::{AutostartError, Result};
use crate::paths::PathResolver;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Autostart mechanism a backend writes for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Per-user launch agent property lists
    MacOs,
    /// Batch scripts in the per-user Startup folder
    Windows,
}

impl BackendKind {
    /// Map an operating system name (as in `std::env::consts::OS`) to a backend.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "macos" => Ok(BackendKind::MacOs),
            "windows" => Ok(BackendKind::Windows),
            other => Err(AutostartError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Backend for the host this process runs on.
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// File extension of entries written by this backend
    pub fn extension(self) -> &'static str {
        match self {
            BackendKind::MacOs => "plist",
            BackendKind::Windows => "bat",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::MacOs => write!(f, "macos"),
            BackendKind::Windows => write!(f, "windows"),
        }
    }
}

/// Operations every autostart backend provides.
pub trait Backend {
    /// Backend-specific launch configuration
    type Options;

    fn resolver(&self) -> &PathResolver;

    /// Write the entry `name`, replacing any previous file.
    ///
    /// Fails with [`AutostartError::InvalidArgument`] before touching the
    /// filesystem when `options` is absent or lacks a required key.
    fn enable(&self, name: &str, options: Option<&Self::Options>) -> Result<()>;

    /// Remove the entry `name`.
    ///
    /// Fails with [`AutostartError::NotFound`] when no file backs the entry.
    fn disable(&self, name: &str) -> Result<()> {
        let path = self.path_for(name);
        remove_entry(&path)?;
        tracing::info!("Disabled autostart entry '{}'", name);
        Ok(())
    }

    /// Whether a file currently backs the entry `name`.
    fn is_enabled(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.resolver().path_for(name)
    }
}

/// Create or truncate `path` with `contents`, creating the parent directory first
pub(crate) fn write_entry(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            tracing::debug!("Created autostart directory {:?}", parent);
        }
    }
    fs::write(path, contents)?;
    tracing::debug!("Wrote autostart entry {:?} ({} bytes)", path, contents.len());
    Ok(())
}

pub(crate) fn remove_entry(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!("Removed autostart entry {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AutostartError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}
