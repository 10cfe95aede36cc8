//! Platform-neutral enable options and their translation per backend.

use autostart_core::{
    launch_agent_options, AutostartError, LaunchAgentOptions, Result, StartupScriptOptions,
};
use plist::Value;

/// Command line to launch at login, independent of the host platform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericOptions {
    pub args: Vec<String>,
}

impl GenericOptions {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn require_args(&self) -> Result<&[String]> {
        if self.args.is_empty() {
            return Err(AutostartError::InvalidArgument(
                "options.args must contain the program to launch".to_string(),
            ));
        }
        Ok(&self.args)
    }

    /// Launch agent labelled `name` running `args`, started as soon as it loads.
    pub fn to_launch_agent(&self, name: &str) -> Result<LaunchAgentOptions> {
        let mut options = launch_agent_options(name, self.require_args()?);
        options.insert("RunAtLoad".to_string(), Value::Boolean(true));
        Ok(options)
    }

    /// Startup script running `args` joined into one executable string.
    pub fn to_startup_script(&self) -> Result<StartupScriptOptions> {
        let executable = self.require_args()?.join(" ");
        Ok(StartupScriptOptions::from([(
            "executable".to_string(),
            executable,
        )]))
    }
}
