//! Runtime configuration, read from TOML.
//!
//! ```toml
//! [store]
//! channel_buffer = 64
//!
//! [search]
//! page_size = 5
//! public_listing_limit = 10
//! faculty_section_limit = 3
//! course_listing_limit = 10
//! ```
//!
//! Missing sections and keys keep their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Names the config file when no explicit path is given.
pub const CONFIG_ENV: &str = "COURSE_RESOURCES_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of each collection actor's request channel.
    pub channel_buffer: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { channel_buffer: 32 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Resources per "load more" page on a course.
    pub page_size: usize,
    pub public_listing_limit: usize,
    /// Resources per section of the faculty guide.
    pub faculty_section_limit: usize,
    /// Resources on a course page before "load more".
    pub course_listing_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            public_listing_limit: 10,
            faculty_section_limit: 3,
            course_listing_limit: 10,
        }
    }
}

impl Config {
    /// Loads `explicit_path`, else the file named by `COURSE_RESOURCES_CONFIG`,
    /// else the defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.channel_buffer == 0 {
            return Err(ConfigError::Invalid("store.channel_buffer must be positive".into()));
        }
        if self.search.page_size == 0 {
            return Err(ConfigError::Invalid("search.page_size must be positive".into()));
        }
        Ok(())
    }
}
