//! Configuration for graphwalk
//!
//! Read from `graphwalk.toml` in the working directory, or an explicit
//! path given with `--config`. Every field has a default.

pub mod types;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GraphError, Result};

pub use types::{Config, SearchConfig, TerminationMode, TraversalConfig, WalkConfig};

/// Default configuration file name
pub const CONFIG_FILE: &str = "graphwalk.toml";

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `dir/graphwalk.toml`, or the defaults if it does not exist
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
