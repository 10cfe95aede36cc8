//! Autostart
//!
//! Make an executable start at user login with one call, whatever the host
//! operating system. The platform is detected at runtime and the matching
//! backend from [`autostart_core`] does the work:
//! - macOS: launch agent property list in `~/Library/LaunchAgents`
//! - Windows: batch script in the per-user Startup folder
//!
//! # Example
//!
//! ```no_run
//! use autostart::{Autostart, GenericOptions};
//!
//! fn main() -> anyhow::Result<()> {
//!     let autostart = Autostart::detect()?;
//!     let options = GenericOptions::new(["/usr/local/bin/sync-agent", "--background"]);
//!
//!     autostart.enable("com.acme.sync", Some(&options))?;
//!     println!("Enabled: {}", autostart.is_enabled("com.acme.sync"));
//!     autostart.disable("com.acme.sync")?;
//!     Ok(())
//! }
//! ```

mod options;
mod platform;

pub use options::GenericOptions;
pub use platform::Autostart;

// Re-export the backend layer so callers need a single dependency
pub use autostart_core::{
    launch_agent_options, AutostartConfig, AutostartError, Backend, BackendKind,
    ConfigSource, LaunchAgentOptions, LaunchAgents, PathResolver, Result, StartupFolder,
    StartupScriptOptions,
};
