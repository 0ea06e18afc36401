use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GitBumpError, Result};

const LOCAL_CONFIG_FILE: &str = "./gitbump.toml";
const USER_CONFIG_FILE: &str = ".gitbump.toml";

/// Represents the complete configuration for git-bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,

    #[serde(default)]
    pub tag: TagConfig,
}

/// Controls runtime behavior without affecting version computation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Skip the confirmation prompt, same as passing `--yes`
    #[serde(default)]
    pub assume_yes: bool,
}

fn default_tag_message() -> String {
    "Release {version}".to_string()
}

/// How new tags are written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    /// Create annotated tags instead of lightweight ones
    #[serde(default)]
    pub annotated: bool,

    /// Message for annotated tags; `{version}` is replaced by the tag name
    #[serde(default = "default_tag_message")]
    pub message: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            annotated: false,
            message: default_tag_message(),
        }
    }
}

impl TagConfig {
    /// Render the annotated tag message for `tag_name`.
    pub fn render_message(&self, tag_name: &str) -> String {
        self.message.replace("{version}", tag_name)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitbump.toml` in current directory
/// 3. `.gitbump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => PathBuf::from(path),
        None => match find_config_file() {
            Some(path) => path,
            None => {
                tracing::debug!("no configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    parse_config_file(&path)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    let user = dirs::config_dir()?.join(USER_CONFIG_FILE);
    user.exists().then_some(user)
}

fn parse_config_file(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        GitBumpError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str).map_err(|e| {
        GitBumpError::config(format!("cannot parse '{}': {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
