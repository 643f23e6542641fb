//! Configuration for the larder binary.
//!
//! Loaded from TOML. Resolution order for the file:
//! 1. `--config <path>` (must exist)
//! 2. `<config_dir>/larder/config.toml` (defaults if missing)

use std::path::{Path, PathBuf};

use larder_storage::{DEFAULT_NAMESPACE, FileStorage};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Name used for config and data directories.
pub const PROJECT_NAME: &str = "larder";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LarderConfig {
    /// Where recipes are kept
    pub storage: StorageConfig,
    /// Log output
    pub logging: LoggingConfig,
}

/// `[storage]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the recipe document; platform data dir if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Key (file stem) the collection is stored under
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LarderConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// The explicit path if given, otherwise the default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads configuration.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            if explicit.is_some() {
                return Err(CliError::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::io_with_path(e, path))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::config(format!("Failed to parse {}: {e}", path.display())))?;
        config.check()?;
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::config(e.to_string()))
    }

    /// Directory holding the recipe document.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(PROJECT_NAME))
                .ok_or_else(|| {
                    CliError::config("Could not determine data directory for this platform")
                }),
        }
    }

    /// Opens the configured storage slot.
    pub fn open_storage(&self) -> Result<FileStorage> {
        Ok(FileStorage::new(self.data_dir()?, &self.storage.namespace))
    }

    fn check(&self) -> Result<()> {
        let namespace = &self.storage.namespace;
        let valid = !namespace.is_empty()
            && namespace
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(CliError::config(format!(
                "storage.namespace must be non-empty and use only letters, digits, '-' or '_' (got '{namespace}')"
            )));
        }
        Ok(())
    }
}
