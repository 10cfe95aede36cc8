//! Windows Startup folder scripts.
//!
//! An entry is a one-line batch file, `<command> <executable>`, placed in
//! the user's Startup folder. Windows runs every file in that folder at
//! logon.

use super::{write_entry, Backend, BackendKind};
use crate::error::{AutostartError, Result};
use crate::paths::PathResolver;
use std::collections::BTreeMap;
use std::path::PathBuf;

const EXECUTABLE_KEY: &str = "executable";
const COMMAND_KEY: &str = "command";

/// Leading command used when the options carry none
pub const DEFAULT_COMMAND: &str = r#"start """#;

/// Startup script options: `executable` (required) and `command` (optional)
pub type StartupScriptOptions = BTreeMap<String, String>;

/// Backend writing `<name>.bat` scripts
#[derive(Debug, Clone)]
pub struct StartupFolder {
    resolver: PathResolver,
}

impl StartupFolder {
    /// Startup scripts stored in `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            resolver: PathResolver::new(BackendKind::Windows, base_dir),
        }
    }

    /// Startup folder of `username`
    pub fn for_user(username: &str) -> Self {
        Self {
            resolver: PathResolver::for_user(BackendKind::Windows, username),
        }
    }

    /// Startup folder of the invoking user
    pub fn for_current_user() -> Result<Self> {
        Ok(Self {
            resolver: PathResolver::for_current_user(BackendKind::Windows)?,
        })
    }

    pub(crate) fn from_resolver(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

/// Script line for the given options
fn script_line(options: &StartupScriptOptions) -> Result<String> {
    let executable = options
        .get(EXECUTABLE_KEY)
        .ok_or_else(|| AutostartError::missing_key(EXECUTABLE_KEY))?;
    let command = options
        .get(COMMAND_KEY)
        .map(String::as_str)
        .unwrap_or(DEFAULT_COMMAND);
    Ok(format!("{} {}", command, executable))
}

impl Backend for StartupFolder {
    type Options = StartupScriptOptions;

    fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    fn enable(&self, name: &str, options: Option<&StartupScriptOptions>) -> Result<()> {
        let options = options.ok_or_else(AutostartError::missing_options)?;
        let line = script_line(options)?;

        let path = self.path_for(name);
        write_entry(&path, line.as_bytes())?;
        tracing::info!("Enabled startup script '{}' at {:?}", name, path);
        Ok(())
    }
}
