//! Defaults file source.
//!
//! A defaults provider answers lookups by uppercased field key. The provider
//! may not exist at all; both a missing provider and a missing key mean
//! "no value from this source".
//!
//! The file-backed provider reads a TOML table of top-level keys:
//!
//! ```toml
//! URL = "https://10.0.0.1"
//! LOGIN = "admin"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Possibly-absent key/value defaults.
pub trait Defaults {
    /// Value stored under `key` (already uppercased by the caller).
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Provider used when no defaults source is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDefaults;

impl Defaults for NoDefaults {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

impl Defaults for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<D: Defaults> Defaults for Option<D> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.as_ref().and_then(|d| d.lookup(key))
    }
}

/// Defaults loaded from a `credentials.toml` file.
#[derive(Debug, Clone)]
pub struct CredentialsFile {
    path: PathBuf,
    table: toml::Table,
}

impl CredentialsFile {
    /// Parse defaults from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid TOML.
    pub fn parse(contents: &str, path: impl Into<PathBuf>) -> Result<Self> {
        let table: toml::Table = contents.parse().map_err(ConfigError::Parse)?;
        Ok(Self {
            path: path.into(),
            table,
        })
    }

    /// Load defaults from `path`, or `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file exists but cannot be read,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no credentials file");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let file = Self::parse(&contents, path)?;
        debug!(path = %path.display(), keys = file.table.len(), "credentials file loaded");

        Ok(Some(file))
    }

    /// Locations searched by [`CredentialsFile::discover`], in order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(constants::CREDENTIALS_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(
                dir.join(constants::CONFIG_DIR)
                    .join(constants::CREDENTIALS_FILE),
            );
        }
        paths
    }

    /// Load the first credentials file found on the search path.
    ///
    /// # Errors
    ///
    /// Returns an error only if a file exists and cannot be read or parsed.
    pub fn discover() -> Result<Option<Self>> {
        for path in Self::search_paths() {
            if let Some(file) = Self::load(&path)? {
                return Ok(Some(file));
            }
        }
        Ok(None)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Defaults for CredentialsFile {
    fn lookup(&self, key: &str) -> Option<String> {
        match self.table.get(key)? {
            toml::Value::String(s) => Some(s.clone()),
            toml::Value::Integer(i) => Some(i.to_string()),
            toml::Value::Float(f) => Some(f.to_string()),
            toml::Value::Boolean(b) => Some(b.to_string()),
            toml::Value::Datetime(d) => Some(d.to_string()),
            toml::Value::Array(_) | toml::Value::Table(_) => None,
        }
    }
}
