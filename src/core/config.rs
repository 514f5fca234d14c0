//! User configuration and format resolution.
//!
//! The config file is optional JSON in the platform config directory
//! (see [`crate::core::dirs`]), or wherever `GITPROMPT_CONFIG` points.
//! A broken config file never breaks the prompt: it is logged and ignored.

use crate::core::dirs::get_config_directory;
use crate::core::error::{GitPromptError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding a format string
pub const FORMAT_ENV: &str = "GITPROMPT_FORMAT";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "GITPROMPT_CONFIG";

pub const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_FORMAT: &str =
    "#B([@b#R%h][#y ›%s][#m ↓%b][#m ↑%a][#r x%c][#g +%m][#y %u]#B) ";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PromptConfig {
    pub format: Option<String>,
    pub zsh: bool,
}

/// Where the format string in use came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatSource {
    Flag,
    Environment,
    ConfigFile,
    Default,
}

impl PromptConfig {
    pub fn config_path() -> Result<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
            _ => Ok(get_config_directory()?.join(CONFIG_FILE)),
        }
    }

    /// Read a config file; a missing file is `Ok(None)`
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| GitPromptError::config_read_failed(path, e))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| GitPromptError::config_parse_failed(path, e))?;
        Ok(Some(config))
    }

    /// Load the user config, falling back to defaults on any problem
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Ignoring config: {e}");
                return Self::default();
            }
        };
        log::debug!("Config file path: {}", path.display());

        match Self::load_from(&path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring config: {e}");
                Self::default()
            }
        }
    }

    /// Pick the format string: flag, then environment, then config, then default
    pub fn resolve_format(
        &self,
        flag: Option<String>,
        env: Option<String>,
    ) -> (String, FormatSource) {
        if let Some(format) = flag {
            return (format, FormatSource::Flag);
        }
        if let Some(format) = env.filter(|value| !value.is_empty()) {
            return (format, FormatSource::Environment);
        }
        if let Some(format) = &self.format {
            return (format.clone(), FormatSource::ConfigFile);
        }
        (DEFAULT_FORMAT.to_string(), FormatSource::Default)
    }
}
