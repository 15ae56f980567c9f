use crate::fs::FsError;
use std::io;
use std::path::{Path, PathBuf};

/// Expands a leading `~` in a user supplied path.
#[derive(Clone, Debug, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, FsError> {
        if self.is_home_path(path) {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, FsError> {
        let rest = &path[1..];
        if rest.is_empty() {
            return self.home_dir(path);
        }

        match rest.strip_prefix(['/', '\\']) {
            Some(stripped) => {
                let mut home_path = self.home_dir(path)?;
                for part in stripped.split(['/', '\\']) {
                    if !part.is_empty() {
                        home_path.push(part);
                    }
                }
                Ok(home_path)
            }
            // "~name" is an ordinary file name, not another user's home
            None => Ok(Path::new(path).to_path_buf()),
        }
    }

    pub fn is_home_path(&self, path: &str) -> bool {
        path == "~" || path.starts_with("~/") || path.starts_with("~\\")
    }

    fn home_dir(&self, path: &str) -> Result<PathBuf, FsError> {
        dirs::home_dir().ok_or_else(|| FsError::InvalidPath {
            path: PathBuf::from(path),
            source: io::Error::new(io::ErrorKind::NotFound, "home directory not found"),
        })
    }
}
