use std::path::PathBuf;

use thiserror::Error;

mod aliases;
mod loader;
mod paths;
mod settings;

pub use aliases::AliasManager;
pub use paths::ConfigPaths;
pub use settings::{ColorMode, Settings};

use loader::ConfigLoader;

/// Everything read at startup: file locations, aliases and settings.
#[derive(Debug, Clone)]
pub struct Config {
    paths: ConfigPaths,
    aliases: AliasManager,
    settings: Settings,
}

impl Config {
    pub fn new(rc_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self::with_paths(ConfigPaths::new(rc_override)?))
    }

    pub fn with_paths(paths: ConfigPaths) -> Self {
        Config {
            paths,
            aliases: AliasManager::new(),
            settings: Settings::default(),
        }
    }

    pub fn load(&mut self) -> Result<(), ConfigError> {
        let paths = self.paths.clone();
        let loader = ConfigLoader::new(&paths);
        loader.load_configs(self)
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn aliases(&self) -> &AliasManager {
        &self.aliases
    }

    pub fn into_parts(self) -> (ConfigPaths, AliasManager, Settings) {
        (self.paths, self.aliases, self.settings)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Home directory not found")]
    HomeDirNotFound,
    #[error("Config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
