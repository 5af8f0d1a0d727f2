//! Registry configuration.
//!
//! # Storage layout
//!
//! ```text
//! ~/.tbs/
//!   config.yaml      (optional — defaults apply when absent)
//! ```
//!
//! ```yaml
//! id_seeds:
//!   artist: 1000000
//!   act: 1000000
//!   performance: 9000000
//!   ticket: 1000000
//! pricing:
//!   require_marker: false
//! ```
//!
//! As with the other path-based helpers, `load_at(home)` takes an explicit
//! home and `load()` derives it from `dirs::home_dir()`. Tests use `load_at`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tbs_core::IdSeeds;

use crate::error::ServerError;

/// How price strings are validated when scheduling a performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// When `false`, a premium price without the `$` marker leaves both
    /// prices unset instead of failing. When `true`, both must carry it.
    pub require_marker: bool,
}

/// Settings applied when a [`Registry`](crate::Registry) is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub id_seeds: IdSeeds,
    pub pricing: PricingConfig,
}

impl RegistryConfig {
    /// Parse YAML text. An empty document yields the defaults.
    pub fn from_yaml_str(contents: &str, path: &Path) -> Result<Self, ServerError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|source| ServerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `<home>/.tbs/config.yaml`, falling back to defaults when absent.
    pub fn load_at(home: &Path) -> Result<Self, ServerError> {
        let path = config_path_at(home);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| ServerError::ConfigIo {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml_str(&contents, &path)
    }

    /// `load_at` convenience wrapper.
    pub fn load() -> Result<Self, ServerError> {
        let home = dirs::home_dir().ok_or(ServerError::HomeNotFound)?;
        Self::load_at(&home)
    }
}

/// `<home>/.tbs/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".tbs").join("config.yaml")
}
