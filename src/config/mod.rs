//! Search preference storage.
//!
//! Preferences are read from `~/.config/broadsheet/config.toml` at the start
//! of every fetch, so a change made in the settings overlay or via
//! `broadsheet config` is picked up by the next fetch, never by one already
//! in flight. If the file doesn't exist, a default configuration with
//! comments is created.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// API key the reader ships with. Override `[api] key` in config.toml to use
/// your own quota.
pub const DEFAULT_API_KEY: &str = "4bfdeaf5-f178-4ebe-9859-5d065c52c213";

/// Main configuration struct.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchPrefs,
    pub api: ApiConfig,
}

/// The four user-adjustable search settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchPrefs {
    /// Keyword passed as the `q` query parameter. Not validated.
    pub keyword: String,
    /// Earliest publication date, `yyyy-MM-dd`. Empty means "today".
    pub from_date: String,
    /// Request thumbnail URLs with each story.
    pub show_images: bool,
    /// Request contributor tags (author names) with each story.
    pub show_author: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    pub key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchPrefs::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Default for SearchPrefs {
    fn default() -> Self {
        Self {
            keyword: "news".to_string(),
            from_date: String::new(),
            show_images: true,
            show_author: true,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// If the file doesn't exist, creates a default one with comments.
    /// If the file exists but is invalid, returns an error.
    /// Missing fields in the file use default values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Persist the whole configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Get the default config file path: `~/.config/broadsheet/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("broadsheet").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        format!(
            r##"# Broadsheet configuration

[search]
# Keyword passed to the search API. Empty searches everything.
keyword = "news"

# Earliest publication date as yyyy-MM-dd. Empty means today's date is
# substituted at fetch time.
from-date = ""

# Request a thumbnail URL with each story.
show-images = true

# Request the author name with each story.
show-author = true

[api]
# Guardian Open Platform API key.
key = "{}"
"##,
            DEFAULT_API_KEY
        )
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
