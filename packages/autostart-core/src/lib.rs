//! Autostart Core Library
//!
//! Registers executables to run at user login by writing one file per
//! entry at a well-known per-user location:
//! - macOS: a launch agent property list, `~/Library/LaunchAgents/<name>.plist`
//! - Windows: a batch script in the Startup folder, `<name>.bat`
//!
//! Enabling writes the file, disabling deletes it, and an entry is enabled
//! exactly when its file exists.
//!
//! # Example
//!
//! ```no_run
//! use autostart_core::{launch_agent_options, Backend, LaunchAgents};
//!
//! fn main() -> autostart_core::Result<()> {
//!     let agents = LaunchAgents::for_current_user()?;
//!     let args = vec!["/usr/bin/sync".to_string(), "-a".to_string()];
//!     let options = launch_agent_options("com.acme.sync", &args);
//!
//!     agents.enable("com.acme.sync", Some(&options))?;
//!     assert!(agents.is_enabled("com.acme.sync"));
//!     agents.disable("com.acme.sync")?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod paths;

// Re-export commonly used types
pub use backend::{
    launch_agent_options, Backend, BackendKind, LaunchAgentOptions, LaunchAgents, StartupFolder,
    StartupScriptOptions, DEFAULT_COMMAND,
};
pub use config::{load_config, load_config_from, AutostartConfig, ConfigSource};
pub use error::{AutostartError, Result};
pub use paths::PathResolver;
