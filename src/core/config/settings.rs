use super::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Never,
}

/// Tunables read from the rc file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Line that ends input in `edit`, compared without case.
    pub sentinel: String,
    pub history_size: usize,
    pub color: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sentinel: "SAVE".to_string(),
            history_size: 1000,
            color: ColorMode::Auto,
        }
    }
}

impl Settings {
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidSetting {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        match key {
            "sentinel" => {
                if value.is_empty() {
                    return Err(invalid("must not be empty"));
                }
                self.sentinel = value.to_string();
            }
            "history_size" => {
                self.history_size = value
                    .parse()
                    .map_err(|_| invalid("expected a non-negative number"))?;
            }
            "color" => {
                self.color = match value {
                    "auto" => ColorMode::Auto,
                    "never" | "off" => ColorMode::Never,
                    _ => return Err(invalid("expected 'auto' or 'never'")),
                };
            }
            _ => return Err(invalid("unknown setting")),
        }
        Ok(())
    }
}
