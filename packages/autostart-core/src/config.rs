//! Optional configuration for where autostart entries live.
//!
//! Read from `<config dir>/autostart/config.toml`:
//!
//! ```toml
//! # Explicit directories win over everything else
//! launch_agents_dir = "/Users/alice/Library/LaunchAgents"
//! startup_dir = 'C:\Users\alice\AppData\Roaming\Microsoft\Windows\Start Menu\Programs\Startup'
//! # Otherwise the default directories of this user are used
//! username = "alice"
//! ```

use crate::backend::{BackendKind, LaunchAgents, StartupFolder};
use crate::error::Result;
use crate::paths::PathResolver;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "autostart";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutostartConfig {
    /// Directory holding launch agent property lists
    pub launch_agents_dir: Option<PathBuf>,
    /// Directory holding Startup folder scripts
    pub startup_dir: Option<PathBuf>,
    /// User whose default directories are used
    pub username: Option<String>,
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Default,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "built-in defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl AutostartConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Failed to parse autostart config")
    }

    /// Path resolver for `kind`: configured directory, then configured
    /// user, then the invoking user.
    pub fn resolver(&self, kind: BackendKind) -> Result<PathResolver> {
        let dir = match kind {
            BackendKind::MacOs => self.launch_agents_dir.as_ref(),
            BackendKind::Windows => self.startup_dir.as_ref(),
        };
        if let Some(dir) = dir {
            return Ok(PathResolver::new(kind, dir));
        }
        match self.username.as_deref() {
            Some(username) => Ok(PathResolver::for_user(kind, username)),
            None => PathResolver::for_current_user(kind),
        }
    }

    pub fn launch_agents(&self) -> Result<LaunchAgents> {
        Ok(LaunchAgents::from_resolver(self.resolver(BackendKind::MacOs)?))
    }

    pub fn startup_folder(&self) -> Result<StartupFolder> {
        Ok(StartupFolder::from_resolver(self.resolver(BackendKind::Windows)?))
    }
}

/// Default location of the config file
pub fn config_file_path() -> anyhow::Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .context("Failed to find config directory")?;
    Ok(config_dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from its default location, falling back to defaults.
pub fn load_config() -> anyhow::Result<(AutostartConfig, ConfigSource)> {
    load_config_from(&config_file_path()?)
}

/// Load the config from `path`, falling back to defaults when it does not exist.
pub fn load_config_from(path: &Path) -> anyhow::Result<(AutostartConfig, ConfigSource)> {
    if !path.exists() {
        tracing::debug!("No autostart config at {:?}, using defaults", path);
        return Ok((AutostartConfig::default(), ConfigSource::Default));
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read autostart config {:?}", path))?;
    let config = AutostartConfig::from_toml_str(&content)?;
    tracing::debug!("Loaded autostart config from {:?}", path);
    Ok((config, ConfigSource::File(path.to_path_buf())))
}
