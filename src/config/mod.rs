use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_module_width")]
    pub module_width: usize,
    #[serde(default = "default_status_width")]
    pub status_width: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Abort on the first malformed duration instead of skipping the line.
    #[serde(default)]
    pub strict: bool,
}

fn default_module_width() -> usize {
    60
}
fn default_status_width() -> usize {
    10
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_width: default_module_width(),
            status_width: default_status_width(),
            separator_char: default_separator_char(),
            strict: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rbuildtimes`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rbuildtimes")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbuildtimes.conf")
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist; the default location falls back to
    /// built-in defaults when no file is there.
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        match custom {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "file '{}' not found",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => {
                let path = Self::config_file();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read '{}': {e}", path.display())))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse '{}': {e}", path.display())))
    }

    /// Parse a YAML document; an empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// First character of `separator_char`, `-` when it is empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }
}
