//! Whole-file JSON storage for named record collections.
//!
//! Each collection is one file (`hotels.json`, `customers.json`,
//! `reservations.json`) under the configured storage directory, holding a
//! JSON array of flat records. Reads tolerate missing, empty, corrupt and
//! misshapen files by recovering to an empty collection and reporting a
//! [`LoadCondition`]; only unreadable storage surfaces as an error. Writes
//! replace the whole file; there are no partial writes, so a single
//! collection file can never hold a half-written record. There is no
//! cross-file atomicity and no locking between processes.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// Environment variable overriding the storage directory.
pub const DATA_DIR_ENV: &str = "LODGE_DATA_DIR";

/// Configuration for a collection store.
///
/// This is an explicit value handed to every ledger at construction;
/// there is no process-wide storage directory.
///
/// # Examples
///
/// ```
/// use lodge::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/lodge-data");
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the collection files.
    pub dir: PathBuf,
    /// Whether to create the directory on first write if absent.
    pub auto_create: bool,
}

impl StoreConfig {
    /// Creates a store configuration with `auto_create` enabled.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            auto_create: true,
        }
    }

    /// Disables directory creation on write.
    #[must_use]
    pub const fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }
}

/// Returns the default storage directory, `~/.lodge`.
///
/// # Errors
///
/// Returns a validation error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".lodge"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "cannot determine home directory".into(),
        })
}

/// Resolves the storage directory from the environment or the default.
///
/// `$LODGE_DATA_DIR` takes precedence; otherwise `~/.lodge` is used.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `LODGE_DATA_DIR` is not set.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) => Ok(PathBuf::from(dir)),
        Err(_) => default_data_dir(),
    }
}

/// A recovered-from condition encountered while loading a collection.
///
/// None of these fail the caller: the load still yields a usable (empty)
/// collection. The condition is reported so ledgers can log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadCondition {
    /// The file existed but held no content.
    EmptyFile,
    /// The content was not valid JSON.
    InvalidJson(String),
    /// The content parsed but was not an array of records.
    NotAnArray,
}

impl std::fmt::Display for LoadCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFile => write!(f, "file is empty"),
            Self::InvalidJson(detail) => write!(f, "invalid JSON: {detail}"),
            Self::NotAnArray => write!(f, "expected a JSON array of records"),
        }
    }
}

/// The outcome of loading a collection.
///
/// Always usable: when the file was missing or its content unusable,
/// `records` is empty and `condition` says why. Individual elements that
/// failed the typed decode are dropped and counted in `skipped`.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    /// The decoded records.
    pub records: Vec<T>,
    /// The recovered-from condition, if any.
    pub condition: Option<LoadCondition>,
    /// Number of array elements dropped because they failed to decode.
    pub skipped: usize,
}

impl<T> Loaded<T> {
    fn empty(condition: Option<LoadCondition>) -> Self {
        Self {
            records: Vec::new(),
            condition,
            skipped: 0,
        }
    }
}

/// Load/save access to the named collections in one storage directory.
///
/// # Examples
///
/// ```no_run
/// use lodge::{CollectionStore, Hotel, StoreConfig};
///
/// let store = CollectionStore::new(StoreConfig::new("/tmp/lodge-data"));
/// let loaded = store.load::<Hotel>("hotels").unwrap();
/// store.save("hotels", &loaded.records).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct CollectionStore {
    config: StoreConfig,
}

impl CollectionStore {
    /// Creates a store over the given configuration.
    #[must_use]
    pub const fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Returns the storage directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.config.dir
    }

    /// Returns the file path backing a named collection.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.config.dir.join(format!("{name}.json"))
    }

    /// Loads the named collection.
    ///
    /// A missing file yields an empty collection with no condition. An
    /// empty, corrupt, or non-array file yields an empty collection with
    /// the corresponding [`LoadCondition`]. Array elements that fail the
    /// typed decode are skipped, not fatal.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` only when the file exists but cannot be read;
    /// that failure is also logged.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Loaded<T>> {
        let path = self.path_for(name);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(Loaded::empty(None));
            }
            Err(err) => {
                log::error!("failed to read collection {}: {err}", path.display());
                return Err(Error::Io(err));
            }
        };

        if content.trim().is_empty() {
            log::warn!("collection {} is empty, treating as empty list", path.display());
            return Ok(Loaded::empty(Some(LoadCondition::EmptyFile)));
        }

        let value: serde_json::Value = match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(err) => {
                log::warn!(
                    "collection {} holds invalid JSON ({err}), treating as empty list",
                    path.display()
                );
                return Ok(Loaded::empty(Some(LoadCondition::InvalidJson(err.to_string()))));
            }
        };

        let serde_json::Value::Array(elements) = value else {
            log::warn!(
                "collection {} is not a JSON array, treating as empty list",
                path.display()
            );
            return Ok(Loaded::empty(Some(LoadCondition::NotAnArray)));
        };

        let mut records = Vec::with_capacity(elements.len());
        let mut skipped = 0;
        for element in elements {
            match serde_json::from_value::<T>(element) {
                Ok(record) => records.push(record),
                Err(err) => {
                    log::warn!("skipping undecodable record in {}: {err}", path.display());
                    skipped += 1;
                }
            }
        }

        Ok(Loaded {
            records,
            condition: None,
            skipped,
        })
    }

    /// Saves the full collection, replacing the file entirely.
    ///
    /// Records are written as an indented JSON array with a trailing
    /// newline. When `auto_create` is set, the storage directory is
    /// created first.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the directory or file cannot be written
    /// (also logged), or `Error::Serialization` if a record cannot be
    /// serialized.
    pub fn save<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        if self.config.auto_create {
            fs::create_dir_all(&self.config.dir).map_err(|err| {
                log::error!(
                    "failed to create storage directory {}: {err}",
                    self.config.dir.display()
                );
                Error::Io(err)
            })?;
        }

        let path = self.path_for(name);
        let mut content = serde_json::to_string_pretty(records)?;
        content.push('\n');

        fs::write(&path, content).map_err(|err| {
            log::error!("failed to write collection {}: {err}", path.display());
            Error::Io(err)
        })
    }
}
