//! macOS launch agents.
//!
//! An entry is a property list in the user's LaunchAgents directory. The
//! dictionary handed to [`LaunchAgents::enable`] is written out verbatim,
//! so callers may add any launchd key next to the required ones.

use super::{write_entry, Backend, BackendKind};
use crate::error::{AutostartError, Result};
use crate::paths::PathResolver;
use plist::{Dictionary, Value};
use std::path::PathBuf;

const LABEL_KEY: &str = "Label";
const PROGRAM_ARGUMENTS_KEY: &str = "ProgramArguments";

/// Launch agent configuration, written as-is to the property list
pub type LaunchAgentOptions = Dictionary;

/// Build the minimal options for a launch agent
pub fn launch_agent_options(label: &str, program_arguments: &[String]) -> LaunchAgentOptions {
    let mut options = Dictionary::new();
    options.insert(LABEL_KEY.to_string(), Value::String(label.to_string()));
    options.insert(
        PROGRAM_ARGUMENTS_KEY.to_string(),
        Value::Array(
            program_arguments
                .iter()
                .map(|arg| Value::String(arg.clone()))
                .collect(),
        ),
    );
    options
}

/// Backend writing `<name>.plist` launch agents
#[derive(Debug, Clone)]
pub struct LaunchAgents {
    resolver: PathResolver,
}

impl LaunchAgents {
    /// Launch agents stored in `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            resolver: PathResolver::new(BackendKind::MacOs, base_dir),
        }
    }

    /// Launch agents of `username`
    pub fn for_user(username: &str) -> Self {
        Self {
            resolver: PathResolver::for_user(BackendKind::MacOs, username),
        }
    }

    /// Launch agents of the invoking user
    pub fn for_current_user() -> Result<Self> {
        Ok(Self {
            resolver: PathResolver::for_current_user(BackendKind::MacOs)?,
        })
    }

    pub(crate) fn from_resolver(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl Backend for LaunchAgents {
    type Options = LaunchAgentOptions;

    fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    fn enable(&self, name: &str, options: Option<&LaunchAgentOptions>) -> Result<()> {
        let options = options.ok_or_else(AutostartError::missing_options)?;
        for key in [LABEL_KEY, PROGRAM_ARGUMENTS_KEY] {
            if !options.contains_key(key) {
                return Err(AutostartError::missing_key(key));
            }
        }

        let mut contents = Vec::new();
        Value::Dictionary(options.clone()).to_writer_xml(&mut contents)?;

        let path = self.path_for(name);
        write_entry(&path, &contents)?;
        tracing::info!("Enabled launch agent '{}' at {:?}", name, path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::test_support::ScratchDir;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_enable_options_none() {
        let scratch = ScratchDir::new();
        let agents = LaunchAgents::new(scratch.path());
        assert!(matches!(
            agents.enable("name", None),
            Err(AutostartError::InvalidArgument(_))
        ));
        assert!(!agents.path_for("name").exists());
    }

    #[test]
    fn test_enable_options_missing_label() {
        let scratch = ScratchDir::new();
        let agents = LaunchAgents::new(scratch.path());
        let mut options = Dictionary::new();
        options.insert(PROGRAM_ARGUMENTS_KEY.to_string(), Value::String("args".into()));

        let err = agents.enable("name", Some(&options)).unwrap_err();
        assert!(matches!(err, AutostartError::InvalidArgument(ref msg) if msg.contains("Label")));
        assert!(!agents.is_enabled("name"));
    }

    #[test]
    fn test_enable_options_missing_program_arguments() {
        let scratch = ScratchDir::new();
        let agents = LaunchAgents::new(scratch.path());
        let mut options = Dictionary::new();
        options.insert(LABEL_KEY.to_string(), Value::String("label".into()));

        let err = agents.enable("name", Some(&options)).unwrap_err();
        assert!(
            matches!(err, AutostartError::InvalidArgument(ref msg) if msg.contains("ProgramArguments"))
        );
        assert!(!agents.is_enabled("name"));
    }

    #[test]
    fn test_enable_round_trips_options() {
        let scratch = ScratchDir::new();
        let agents = LaunchAgents::new(scratch.path());
        let options = launch_agent_options("x", &args(&["a", "b"]));

        agents.enable("x", Some(&options)).unwrap();

        let written = Value::from_file(scratch.path().join("x.plist")).unwrap();
        assert_eq!(written.into_dictionary().unwrap(), options);
    }

    #[test]
    fn test_enable_keeps_extra_keys() {
        let scratch = ScratchDir::new();
        let agents = LaunchAgents::new(scratch.path());
        let mut options = launch_agent_options("com.acme.sync", &args(&["/usr/bin/sync"]));
        options.insert("RunAtLoad".to_string(), Value::Boolean(true));
        options.insert("KeepAlive".to_string(), Value::Boolean(false));

        agents.enable("com.acme.sync", Some(&options)).unwrap();

        let written = Value::from_file(agents.path_for("com.acme.sync"))
            .unwrap()
            .into_dictionary()
            .unwrap();
        assert_eq!(written.get("RunAtLoad"), Some(&Value::Boolean(true)));
        assert_eq!(written, options);
    }

    #[test]
    fn test_enable_overwrites_previous_entry() {
        let scratch = ScratchDir::new();
        let agents = LaunchAgents::new(scratch.path());
        agents
            .enable("agent", Some(&launch_agent_options("first", &args(&["/bin/a"]))))
            .unwrap();
        let second = launch_agent_options("second", &args(&["/bin/b"]));
        agents.enable("agent", Some(&second)).unwrap();

        let written = Value::from_file(agents.path_for("agent"))
            .unwrap()
            .into_dictionary()
            .unwrap();
        assert_eq!(written, second);
    }

    #[test]
    fn test_disable() {
        let scratch = ScratchDir::new();
        let agents = LaunchAgents::new(scratch.path());
        agents
            .enable("name", Some(&launch_agent_options("name", &args(&["/bin/true"]))))
            .unwrap();
        assert!(agents.is_enabled("name"));

        agents.disable("name").unwrap();
        assert!(!agents.is_enabled("name"));
        assert!(matches!(
            agents.disable("name"),
            Err(AutostartError::NotFound { .. })
        ));
    }

    #[test]
    fn test_any_file_counts_as_enabled() {
        let scratch = ScratchDir::new();
        let agents = LaunchAgents::new(scratch.path());
        std::fs::write(agents.path_for("foreign"), b"not a plist").unwrap();
        assert!(agents.is_enabled("foreign"));
    }

    #[test]
    fn test_for_user_path() {
        let agents = LaunchAgents::for_user("carol");
        assert_eq!(
            agents.path_for("name"),
            PathBuf::from("/Users/carol/Library/LaunchAgents/name.plist")
        );
    }
}
