//! User configuration
//!
//! Read from `~/.spendtrack/config.json`. Every field is optional; a missing
//! file means defaults.

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{Result, SpendtrackError};

const APP_DIR: &str = ".spendtrack";
const CONFIG_FILE: &str = "config.json";
const LEDGER_FILE: &str = "ledger.json";

/// Owner recorded on entries in the local store
pub const DEFAULT_OWNER: &str = "guest";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ledger file (defaults to `~/.spendtrack/ledger.json`)
    pub store_path: Option<PathBuf>,
    pub owner: String,
    /// `tracing` filter directive, used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            owner: DEFAULT_OWNER.to_string(),
            log_filter: None,
        }
    }
}

impl Config {
    /// `~/.spendtrack`
    pub fn app_dir() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| SpendtrackError::Config("Cannot determine home directory".into()))?;
        Ok(base_dirs.home_dir().join(APP_DIR))
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::app_dir()?.join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            SpendtrackError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Configured ledger path, or the default one next to the config file
    pub fn resolve_store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::app_dir()?.join(LEDGER_FILE)),
        }
    }
}
