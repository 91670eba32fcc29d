//! Environment variable source.
//!
//! Maps field keys to variable names and abstracts the lookup so sessions
//! can be resolved against the process environment or a fixed map.

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

/// Environment variable name for a field key: `prefix` followed by the
/// uppercased key (`APIC_` + `url` gives `APIC_URL`).
pub fn env_key(prefix: &str, key: &str) -> String {
    format!("{}{}", prefix, key.to_uppercase())
}

/// Read-only view of environment variables.
pub trait Environment {
    /// Value of `name`, or `None` if unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).and_then(|value| match value.into_string() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(name, "ignoring environment variable that is not valid UTF-8");
                None
            }
        })
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
