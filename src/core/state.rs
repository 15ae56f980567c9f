use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::config::{AliasManager, Settings};
use crate::fs::FsError;
use crate::path;

/// Per-session state handed to every command.
///
/// The working directory lives here instead of in the process, so the
/// process current directory is never changed.
#[derive(Debug, Clone)]
pub struct Session {
    current_dir: PathBuf,
    settings: Settings,
    aliases: AliasManager,
    running: bool,
}

impl Session {
    /// Start a session in `start_dir`, which must be an existing directory.
    pub fn new(start_dir: &Path, settings: Settings) -> Result<Self, FsError> {
        let canonical = fs::canonicalize(start_dir).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(start_dir.to_path_buf()),
            _ => FsError::InvalidPath {
                path: start_dir.to_path_buf(),
                source: e,
            },
        })?;
        let current_dir = path::resolve_directory(".", &canonical)?;
        Ok(Self {
            current_dir,
            settings,
            aliases: AliasManager::new(),
            running: true,
        })
    }

    pub fn with_aliases(mut self, aliases: AliasManager) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn aliases(&self) -> &AliasManager {
        &self.aliases
    }

    pub fn aliases_mut(&mut self) -> &mut AliasManager {
        &mut self.aliases
    }

    /// Resolve a user path against the working directory.
    pub fn resolve(&self, spec: &str) -> Result<PathBuf, FsError> {
        path::resolve(spec, &self.current_dir)
    }

    pub fn resolve_existing(&self, spec: &str) -> Result<PathBuf, FsError> {
        path::resolve_existing(spec, &self.current_dir)
    }

    pub fn resolve_directory(&self, spec: &str) -> Result<PathBuf, FsError> {
        path::resolve_directory(spec, &self.current_dir)
    }

    /// Move to `spec`. On any error the working directory is left as it was.
    pub fn change_dir(&mut self, spec: &str) -> Result<&Path, FsError> {
        let target = self.resolve_directory(spec)?;
        info!(from = %self.current_dir.display(), to = %target.display(), "changed directory");
        self.current_dir = target;
        Ok(&self.current_dir)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_dir_keeps_state_on_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let root = fs::canonicalize(temp.path())?;
        fs::create_dir(root.join("inner"))?;
        fs::write(root.join("file.txt"), b"")?;

        let mut session = Session::new(&root, Settings::default())?;
        assert!(session.change_dir("missing").is_err());
        assert!(session.change_dir("file.txt").is_err());
        assert_eq!(session.current_dir(), root);

        session.change_dir("inner")?;
        assert_eq!(session.current_dir(), root.join("inner"));
        session.change_dir("..")?;
        assert_eq!(session.current_dir(), root);
        Ok(())
    }

    #[test]
    fn test_stop() -> Result<(), FsError> {
        let temp = tempfile::tempdir().map_err(|e| FsError::io("tempdir", e))?;
        let mut session = Session::new(temp.path(), Settings::default())?;
        assert!(session.is_running());
        session.stop();
        assert!(!session.is_running());
        Ok(())
    }
}
