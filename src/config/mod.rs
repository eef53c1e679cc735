//! Configuration management for `alianza_rust`.
//!
//! Configuration is loaded from YAML with support for:
//! - Workspace config (`.alianza/config.yaml`)
//! - Environment variable overrides (`ALIANZA_PREFIX`, `ALIANZA_DATA_DIR`)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Workspace directory name.
pub const WORKSPACE_DIR: &str = ".alianza";

/// Config file name inside the workspace directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Environment override for the ticket prefix.
pub const ENV_PREFIX: &str = "ALIANZA_PREFIX";

/// Environment override for the data directory.
pub const ENV_DATA_DIR: &str = "ALIANZA_DATA_DIR";

const DEFAULT_PREFIX: &str = "APS";

/// Resolved runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ticket number prefix.
    pub prefix: String,
    /// Directory holding the storage documents.
    pub data_dir: PathBuf,
}

/// On-disk config shape; every field optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    prefix: Option<String>,
    data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            data_dir: Path::new(WORKSPACE_DIR).join("data"),
        }
    }
}

impl Config {
    /// Load the workspace config from the current directory, applying
    /// environment overrides. A missing config file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `Yaml` if the config file exists but cannot be parsed,
    /// or `Io` if it cannot be read.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        let path = Path::new(WORKSPACE_DIR).join(CONFIG_FILE);
        if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            let file: ConfigFile = serde_yaml::from_str(&raw)?;
            if let Some(prefix) = file.prefix {
                config.prefix = prefix;
            }
            if let Some(data_dir) = file.data_dir {
                config.data_dir = data_dir;
            }
        }

        if let Ok(prefix) = std::env::var(ENV_PREFIX) {
            if !prefix.trim().is_empty() {
                config.prefix = prefix.trim().to_string();
            }
        }
        if let Ok(data_dir) = std::env::var(ENV_DATA_DIR) {
            if !data_dir.trim().is_empty() {
                config.data_dir = PathBuf::from(data_dir.trim());
            }
        }

        // Normalize an existing data dir (strips \\?\ on Windows).
        if config.data_dir.exists() {
            if let Ok(canonical) = dunce::canonicalize(&config.data_dir) {
                config.data_dir = canonical;
            }
        }

        Ok(config)
    }

    /// True when the current directory holds an alianza workspace.
    #[must_use]
    pub fn workspace_exists() -> bool {
        Path::new(WORKSPACE_DIR).is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.prefix, "APS");
        assert_eq!(config.data_dir, Path::new(".alianza").join("data"));
    }

    #[test]
    fn config_file_parses_partial_documents() {
        let file: ConfigFile = serde_yaml::from_str("prefix: ALZ\n").unwrap();
        assert_eq!(file.prefix.as_deref(), Some("ALZ"));
        assert!(file.data_dir.is_none());

        let empty: ConfigFile = serde_yaml::from_str("{}").unwrap();
        assert!(empty.prefix.is_none());
    }
}
