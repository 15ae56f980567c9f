use std::{fs, path::Path};

use tracing::{debug, warn};

use super::{Config, ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_configs(&self, config: &mut Config) -> Result<(), ConfigError> {
        let rc_path = &self.paths.rc_path;
        if rc_path.exists() {
            self.source_file(rc_path, config)
        } else if self.paths.rc_required {
            Err(ConfigError::ConfigFileNotFound(rc_path.clone()))
        } else {
            debug!(path = %rc_path.display(), "no rc file");
            Ok(())
        }
    }

    fn source_file(&self, path: &Path, config: &mut Config) -> Result<(), ConfigError> {
        let content = fs::read_to_string(path)?;
        for (index, line) in content.lines().enumerate() {
            self.process_line(line, config, index + 1);
        }
        debug!(path = %path.display(), "loaded rc file");
        Ok(())
    }

    // Bad lines are reported and skipped; one typo must not block startup.
    fn process_line(&self, line: &str, config: &mut Config, line_no: usize) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let result = match line {
            s if s.starts_with("alias ") => self.process_alias(&s["alias ".len()..], config),
            s if s.starts_with("set ") => self.process_setting(&s["set ".len()..], config),
            _ => Err(format!("unrecognized line: {line}")),
        };

        if let Err(reason) = result {
            warn!(line = line_no, %reason, "skipping rc line");
        }
    }

    fn process_alias(&self, line: &str, config: &mut Config) -> Result<(), String> {
        let (name, command) = line
            .split_once('=')
            .ok_or_else(|| format!("expected alias name='command', got: {line}"))?;
        let name = name.trim();
        if name.is_empty() {
            return Err("alias name is empty".to_string());
        }

        config.aliases.add(name, strip_quotes(command.trim()));
        Ok(())
    }

    fn process_setting(&self, line: &str, config: &mut Config) -> Result<(), String> {
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| format!("expected set key=value, got: {line}"))?;

        config
            .settings
            .set(key.trim(), strip_quotes(value.trim()))
            .map_err(|e| e.to_string())
    }
}

fn strip_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('\'') && value.ends_with('\''))
            || (value.starts_with('"') && value.ends_with('"')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ColorMode;
    use std::path::PathBuf;

    fn config_for(home: &Path, rc_override: Option<PathBuf>) -> Config {
        Config::with_paths(ConfigPaths::with_home(home.to_path_buf(), rc_override))
    }

    #[test]
    fn test_process_alias() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut config = config_for(temp.path(), None);
        let paths = config.paths().clone();
        let loader = ConfigLoader::new(&paths);

        assert!(loader.process_alias("up='cd ..'", &mut config).is_ok());
        assert_eq!(config.aliases().get("up").as_deref(), Some("cd .."));
        assert!(loader.process_alias("=nothing", &mut config).is_err());
    }

    #[test]
    fn test_load_rc_file() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let content = r#"
            # comment
            alias l='ls'
            set sentinel=":done"
            set color=never
            set history_size=oops
            something else
        "#;
        fs::write(temp.path().join(".fsnavrc"), content)?;

        let mut config = config_for(temp.path(), None);
        config.load()?;

        assert_eq!(config.aliases().get("l").as_deref(), Some("ls"));
        assert_eq!(config.settings().sentinel, ":done");
        assert_eq!(config.settings().color, ColorMode::Never);
        // Invalid value was skipped, default kept.
        assert_eq!(config.settings().history_size, 1000);
        Ok(())
    }

    #[test]
    fn test_missing_default_rc_is_fine() -> Result<(), ConfigError> {
        let temp = tempfile::tempdir()?;
        let mut config = config_for(temp.path(), None);
        config.load()
    }

    #[test]
    fn test_missing_explicit_rc_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut config = config_for(temp.path(), Some(temp.path().join("nope.rc")));
        assert!(matches!(
            config.load(),
            Err(ConfigError::ConfigFileNotFound(_))
        ));
    }
}
