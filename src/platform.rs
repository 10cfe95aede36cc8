//! Host platform selection.
//!
//! The selected backend is stored as data in [`Platform`] and every
//! operation matches on it.

use crate::options::GenericOptions;
use autostart_core::{
    load_config, AutostartConfig, AutostartError, Backend, BackendKind, LaunchAgents, Result,
    StartupFolder,
};
use std::path::PathBuf;

#[derive(Debug, Clone)]
enum Platform {
    MacOs(LaunchAgents),
    Windows(StartupFolder),
}

/// Autostart entries for the host platform
#[derive(Debug, Clone)]
pub struct Autostart {
    platform: Platform,
}

impl Autostart {
    /// Backend for the host operating system, using the invoking user's directories.
    pub fn detect() -> Result<Self> {
        Self::for_os(std::env::consts::OS, &AutostartConfig::default())
    }

    /// Backend for the host operating system, configured from the config file.
    pub fn load() -> anyhow::Result<Self> {
        let (config, source) = load_config()?;
        tracing::debug!("Using autostart config from {}", source);
        Ok(Self::for_os(std::env::consts::OS, &config)?)
    }

    /// Backend for an operating system name as reported by `std::env::consts::OS`.
    pub fn for_os(os: &str, config: &AutostartConfig) -> Result<Self> {
        let kind = BackendKind::from_os(os)?;
        Self::for_kind(kind, config)
    }

    pub fn for_kind(kind: BackendKind, config: &AutostartConfig) -> Result<Self> {
        let platform = match kind {
            BackendKind::MacOs => Platform::MacOs(config.launch_agents()?),
            BackendKind::Windows => Platform::Windows(config.startup_folder()?),
        };
        tracing::debug!("Selected {} autostart backend", kind);
        Ok(Self { platform })
    }

    pub fn with_launch_agents(agents: LaunchAgents) -> Self {
        Self {
            platform: Platform::MacOs(agents),
        }
    }

    pub fn with_startup_folder(folder: StartupFolder) -> Self {
        Self {
            platform: Platform::Windows(folder),
        }
    }

    pub fn kind(&self) -> BackendKind {
        match &self.platform {
            Platform::MacOs(_) => BackendKind::MacOs,
            Platform::Windows(_) => BackendKind::Windows,
        }
    }

    /// File that backs the entry `name` on this platform
    pub fn path_for(&self, name: &str) -> PathBuf {
        match &self.platform {
            Platform::MacOs(agents) => agents.path_for(name),
            Platform::Windows(folder) => folder.path_for(name),
        }
    }

    /// Launch `options.args` at login under the entry `name`.
    ///
    /// On macOS the entry name doubles as the launch agent label.
    pub fn enable(&self, name: &str, options: Option<&GenericOptions>) -> Result<()> {
        let options = options.ok_or_else(|| {
            AutostartError::InvalidArgument("options are required".to_string())
        })?;
        match &self.platform {
            Platform::MacOs(agents) => agents.enable(name, Some(&options.to_launch_agent(name)?)),
            Platform::Windows(folder) => folder.enable(name, Some(&options.to_startup_script()?)),
        }
    }

    pub fn disable(&self, name: &str) -> Result<()> {
        match &self.platform {
            Platform::MacOs(agents) => agents.disable(name),
            Platform::Windows(folder) => folder.disable(name),
        }
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        match &self.platform {
            Platform::MacOs(agents) => agents.is_enabled(name),
            Platform::Windows(folder) => folder.is_enabled(name),
        }
    }
}
