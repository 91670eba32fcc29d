//! Qualifier set.
//!
//! Labels selecting which built-in field groups a session activates.

use std::fmt;

use crate::core::constants::APIC;

/// Ordered, duplicate-free set of qualifier labels.
///
/// Order is the order labels were first supplied; it fixes the order in
/// which built-in fields are registered and prompted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifierSet {
    labels: Vec<String>,
}

impl QualifierSet {
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Add a label. Returns `false` if it was already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Parse a comma-separated list such as `apic,mysql`.
    ///
    /// Whitespace around labels is ignored and empty segments are skipped.
    pub fn parse_list(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }
}

/// The `apic` group alone.
impl Default for QualifierSet {
    fn default() -> Self {
        Self::from(APIC)
    }
}

impl From<&str> for QualifierSet {
    fn from(label: &str) -> Self {
        std::iter::once(label).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for QualifierSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

impl fmt::Display for QualifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join(","))
    }
}
