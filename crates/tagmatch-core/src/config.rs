//! Configuration for tagmatch (stored in ~/.config/tagmatch/config.toml)
//!
//! Lookup order: explicit path, then `$TAGMATCH_CONFIG_DIR/config.toml`, then
//! the platform config directory. A missing file yields defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_invalid;
use crate::error::{Result, TagmatchError};
use crate::text::TokenizerOptions;

const CONFIG_DIR: &str = "tagmatch";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "TAGMATCH_CONFIG_DIR";

/// Truncated names keep at least one character before the "..." suffix
const MIN_NAME_WIDTH: usize = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tokenization applied to tag strings
    #[serde(default)]
    pub vectorizer: TokenizerOptions,

    #[serde(default)]
    pub recommend: RecommendConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Result count when none is given on the command line
    #[serde(default = "default_count")]
    pub default_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Item names longer than this are cut to this many characters plus "..."
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

fn default_count() -> usize {
    10
}

fn default_name_width() -> usize {
    60
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            name_width: default_name_width(),
        }
    }
}

impl Config {
    fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    TagmatchError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the explicit file if given, otherwise the default location.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(TagmatchError::not_found("config file", path.display()));
                }
                Self::load(path)
            }
            None => {
                let path = match Self::default_path() {
                    Ok(path) => path,
                    Err(e) => {
                        debug!(error = %e, "config_dir_unavailable");
                        return Ok(Self::default());
                    }
                };
                if path.exists() {
                    Self::load(&path)
                } else {
                    debug!(path = %path.display(), "config_defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| TagmatchError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.name_width < MIN_NAME_WIDTH {
            bail_invalid!("display.name_width", self.display.name_width);
        }
        Ok(())
    }
}

/// Keep the first `width` characters of text, marking a cut with "..."
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width).collect();
    out.push_str("...");
    out
}
