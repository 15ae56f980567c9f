use super::ConfigError;
use std::path::PathBuf;

const RC_FILE: &str = ".fsnavrc";
const HISTORY_FILE: &str = ".fsnav_history";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    pub history_path: PathBuf,
    /// The rc file was named on the command line, so it must exist.
    pub rc_required: bool,
}

impl ConfigPaths {
    pub fn new(rc_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let home_path = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::with_home(home_path, rc_override))
    }

    pub fn with_home(home_path: PathBuf, rc_override: Option<PathBuf>) -> Self {
        let rc_required = rc_override.is_some();
        ConfigPaths {
            rc_path: rc_override.unwrap_or_else(|| home_path.join(RC_FILE)),
            history_path: home_path.join(HISTORY_FILE),
            rc_required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = ConfigPaths::with_home(PathBuf::from("/home/testuser"), None);

        assert_eq!(paths.rc_path, PathBuf::from("/home/testuser/.fsnavrc"));
        assert_eq!(paths.history_path, PathBuf::from("/home/testuser/.fsnav_history"));
        assert!(!paths.rc_required);
    }

    #[test]
    fn test_override_rc() {
        let paths = ConfigPaths::with_home(
            PathBuf::from("/home/testuser"),
            Some(PathBuf::from("/etc/fsnavrc")),
        );

        assert_eq!(paths.rc_path, PathBuf::from("/etc/fsnavrc"));
        assert!(paths.rc_required);
    }
}
