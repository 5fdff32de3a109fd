//! Configuration for the lodge record keeper.
//!
//! The only setting this system carries is the storage directory, but it
//! is resolved the usual way: programmatic overrides beat the
//! `LODGE_DATA_DIR` environment variable, which beats the user config
//! file (`~/.lodge/config.yaml`), which beats the built-in default
//! (`~/.lodge`). The resolved value is handed to ledgers as an explicit
//! [`StoreConfig`](crate::StoreConfig); there is no process-wide mutable
//! configuration state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::{default_data_dir, StoreConfig, DATA_DIR_ENV};

/// Resolved configuration.
///
/// # Examples
///
/// ```
/// use lodge::config::{Config, ConfigBuilder};
/// use std::path::PathBuf;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_data_dir(PathBuf::from("/srv/lodge"))
///     .build()
///     .unwrap();
/// assert_eq!(config.data_dir, PathBuf::from("/srv/lodge"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the collection files.
    pub data_dir: PathBuf,
}

impl Config {
    /// Returns the store configuration for this resolved config.
    #[must_use]
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_dir)
    }
}

/// On-disk shape of the user configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Directory holding the collection files.
    pub data_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Loads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| Error::Validation {
            field: path.display().to_string(),
            message: format!("failed to read configuration file: {err}"),
        })?;
        Ok(serde_yaml::from_str(&contents)?)
    }
}

/// Builder resolving configuration from its sources in precedence order.
///
/// # Examples
///
/// ```no_run
/// use lodge::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// println!("storing collections under {}", config.data_dir.display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit data directory, overriding every other source.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Skips the user configuration file. Intended for tests.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variables. Intended for tests.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Resolves the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the user config file exists but is unreadable
    /// or invalid, or if no source yields a directory and the home
    /// directory cannot be determined.
    pub fn build(self) -> Result<Config> {
        if let Some(data_dir) = self.data_dir {
            return Ok(Config { data_dir });
        }

        if !self.skip_env {
            if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
                return Ok(Config {
                    data_dir: PathBuf::from(dir),
                });
            }
        }

        if !self.skip_files {
            let path = user_config_path()?;
            if path.exists() {
                let file = ConfigFile::load(&path)?;
                if let Some(data_dir) = file.data_dir {
                    return Ok(Config { data_dir });
                }
            }
        }

        Ok(Config {
            data_dir: default_data_dir()?,
        })
    }
}

/// Returns the user configuration file path, `~/.lodge/config.yaml`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_path() -> Result<PathBuf> {
    Ok(default_data_dir()?.join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_data_dir("/explicit/dir")
            .build()
            .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/explicit/dir"));
    }

    #[test]
    #[serial]
    fn test_env_var_beats_default() {
        std::env::set_var(DATA_DIR_ENV, "/from/env");
        let config = ConfigBuilder::new().skip_files().build().unwrap();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(config.data_dir, PathBuf::from("/from/env"));
    }

    #[test]
    #[serial]
    fn test_explicit_beats_env() {
        std::env::set_var(DATA_DIR_ENV, "/from/env");
        let config = ConfigBuilder::new()
            .skip_files()
            .with_data_dir("/explicit/dir")
            .build()
            .unwrap();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(config.data_dir, PathBuf::from("/explicit/dir"));
    }

    #[test]
    #[serial]
    fn test_default_is_home_lodge() {
        std::env::remove_var(DATA_DIR_ENV);
        let config = ConfigBuilder::new().skip_files().build().unwrap();
        assert!(config.data_dir.ends_with(".lodge"));
    }

    #[test]
    fn test_config_file_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "data_dir: /from/file\n").unwrap();

        let file = ConfigFile::load(&path).unwrap();
        assert_eq!(file.data_dir, Some(PathBuf::from("/from/file")));
    }

    #[test]
    fn test_config_file_load_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "data_dir: [unclosed\n").unwrap();

        assert!(ConfigFile::load(&path).is_err());
    }

    #[test]
    fn test_config_file_load_missing() {
        assert!(ConfigFile::load(Path::new("/nonexistent/config.yaml")).is_err());
    }

    #[test]
    fn test_store_config_from_config() {
        let config = Config {
            data_dir: PathBuf::from("/srv/lodge"),
        };
        let store_config = config.store_config();
        assert_eq!(store_config.dir, PathBuf::from("/srv/lodge"));
        assert!(store_config.auto_create);
    }
}
