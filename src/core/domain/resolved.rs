//! Resolved credential bundle.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use clap::ArgMatches;
use zeroize::Zeroizing;

/// Final key to value mapping produced by one resolution session.
///
/// Fields no source supplied and that were not prompted for are absent.
/// Values are wiped from memory when the bundle is dropped.
#[derive(Clone)]
pub struct ResolvedCredentials {
    values: BTreeMap<String, Zeroizing<String>>,
    secret: BTreeSet<String>,
    matches: ArgMatches,
}

impl ResolvedCredentials {
    pub(crate) fn new(
        values: BTreeMap<String, Zeroizing<String>>,
        secret: BTreeSet<String>,
        matches: ArgMatches,
    ) -> Self {
        Self {
            values,
            secret,
            matches,
        }
    }

    /// Value for `key`, or `None` if nothing supplied it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether `key` was registered as a secret field.
    pub fn is_secret(&self, key: &str) -> bool {
        self.secret.contains(key)
    }

    /// Keys with a value, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parsed matches, for flags added with `Credentials::add_argument`.
    pub fn matches(&self) -> &ArgMatches {
        &self.matches
    }
}

impl fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.values {
            if self.is_secret(key) {
                map.entry(key, &"<redacted>");
            } else {
                map.entry(key, &value.as_str());
            }
        }
        map.finish()
    }
}
