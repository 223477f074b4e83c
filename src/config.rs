//! @ai:module:intent Configuration structs for the tcmodhelp command
//! @ai:module:layer infrastructure
//! @ai:module:public_api ModhelpConfig, SourceConfig, OutputConfig
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// @ai:intent Main configuration, every field optional in the TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModhelpConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// @ai:intent Where module sources are searched for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_search_path")]
    pub search_path: PathBuf,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

/// @ai:intent How the report is printed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            search_path: default_search_path(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_search_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_max_depth() -> usize {
    2
}

impl ModhelpConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
