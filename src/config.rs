use crate::domain::IncrementKind;
use crate::error::{Result, SemverBumpError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "semverbump.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE_NAME: &str = ".semverbump.toml";

/// Represents the complete configuration for semverbump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub bump: BumpConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_kind() -> IncrementKind {
    IncrementKind::Patch
}

fn default_color() -> bool {
    true
}

/// Defaults applied when the command line leaves a choice open.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BumpConfig {
    #[serde(default = "default_kind")]
    pub default_kind: IncrementKind,
}

impl Default for BumpConfig {
    fn default() -> Self {
        BumpConfig {
            default_kind: default_kind(),
        }
    }
}

/// Terminal output settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            color: default_color(),
        }
    }
}

/// Parses configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| SemverBumpError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semverbump.toml` in current directory
/// 3. `.semverbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
