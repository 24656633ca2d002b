//! Store configuration, loaded from TOML.
//!
//! ```toml
//! data_root = "/var/lib/recordstore"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, StoreError};

/// Default data root, relative to the working directory.
pub const DEFAULT_DATA_ROOT: &str = "data";

/// Default config file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "recordstore.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base directory holding one subdirectory per schema.
    pub data_root: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| StoreError::Internal(format!("config: {}", e)))
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loading config");
                Self::from_toml_str(&contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
