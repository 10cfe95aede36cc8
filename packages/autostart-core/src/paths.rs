//! Resolution of autostart entry names to their backing files.
//!
//! Every operation re-derives the path from the entry name, so the same
//! name and backend always land on the same file:
//! - macOS: `/Users/<user>/Library/LaunchAgents/<name>.plist`
//! - Windows: `C:\Users\<user>\AppData\Roaming\Microsoft\Windows\Start Menu\Programs\Startup\<name>.bat`

use crate::backend::BackendKind;
use crate::error::{AutostartError, Result};
use std::path::{Path, PathBuf};

/// Maps entry names onto files inside one base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    kind: BackendKind,
    base_dir: PathBuf,
}

impl PathResolver {
    /// Resolve entries inside an explicit base directory.
    pub fn new(kind: BackendKind, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            base_dir: base_dir.into(),
        }
    }

    /// Resolve entries inside the default directory of `username`.
    pub fn for_user(kind: BackendKind, username: &str) -> Self {
        Self::new(kind, default_base_dir(kind, username))
    }

    /// Resolve entries inside the default directory of the invoking user.
    pub fn for_current_user(kind: BackendKind) -> Result<Self> {
        let username = current_username()?;
        Ok(Self::for_user(kind, &username))
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Absolute path of the file backing the entry `name`.
    ///
    /// The name is used verbatim: no escaping, no rejection of empty names.
    pub fn path_for(&self, name: &str) -> PathBuf {
        if name.contains(['/', '\\']) || name == ".." {
            tracing::warn!(
                "Autostart entry name '{}' contains path components, file may land outside {:?}",
                name,
                self.base_dir
            );
        }
        let path = self
            .base_dir
            .join(format!("{}.{}", name, self.kind.extension()));
        tracing::trace!("Resolved autostart entry '{}' to {:?}", name, path);
        path
    }
}

/// Per-user autostart directory for `username`
pub fn default_base_dir(kind: BackendKind, username: &str) -> PathBuf {
    match kind {
        BackendKind::MacOs => PathBuf::from(format!("/Users/{}/Library/LaunchAgents", username)),
        BackendKind::Windows => PathBuf::from(format!(
            r"C:\Users\{}\AppData\Roaming\Microsoft\Windows\Start Menu\Programs\Startup",
            username
        )),
    }
}

/// Name of the user running this process
pub fn current_username() -> Result<String> {
    ["USER", "USERNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|name| !name.is_empty())
        .ok_or_else(|| {
            AutostartError::InvalidArgument(
                "could not determine the current user name (USER/USERNAME unset)".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macos_path_for_user() {
        let resolver = PathResolver::for_user(BackendKind::MacOs, "alice");
        assert_eq!(
            resolver.path_for("name"),
            PathBuf::from("/Users/alice/Library/LaunchAgents/name.plist")
        );
    }

    #[test]
    fn test_windows_path_for_user() {
        let resolver = PathResolver::for_user(BackendKind::Windows, "bob");
        let path = resolver.path_for("name");
        assert_eq!(path.file_name().unwrap(), "name.bat");
        assert_eq!(
            resolver.base_dir(),
            Path::new(r"C:\Users\bob\AppData\Roaming\Microsoft\Windows\Start Menu\Programs\Startup")
        );
    }

    #[test]
    fn test_path_is_deterministic() {
        let resolver = PathResolver::new(BackendKind::MacOs, "/tmp/agents");
        assert_eq!(resolver.path_for("com.acme.sync"), resolver.path_for("com.acme.sync"));
        assert_eq!(
            resolver.path_for("com.acme.sync"),
            PathBuf::from("/tmp/agents/com.acme.sync.plist")
        );
    }

    #[test]
    fn test_explicit_base_dir_overrides_user() {
        let resolver = PathResolver::new(BackendKind::Windows, "/srv/startup");
        assert_eq!(resolver.kind(), BackendKind::Windows);
        assert_eq!(resolver.path_for("app"), PathBuf::from("/srv/startup/app.bat"));
    }

    #[test]
    fn test_name_is_not_sanitized() {
        let resolver = PathResolver::new(BackendKind::MacOs, "/tmp/agents");
        assert_eq!(resolver.path_for(""), PathBuf::from("/tmp/agents/.plist"));
        assert_eq!(
            resolver.path_for("nested/agent"),
            PathBuf::from("/tmp/agents/nested/agent.plist")
        );
    }
}
