//! Field type.
//!
//! Static description of one resolvable value and the built-in field table.

use crate::core::constants::{APIC, MYSQL};
use crate::core::domain::QualifierSet;
use crate::error::{ConfigError, Result};

/// One resolvable configuration value.
///
/// Describes how the value is exposed as a flag, whether it is secret, and
/// which qualifier group it belongs to. Extension fields have no qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    key: String,
    short: Option<char>,
    long: String,
    help: String,
    prompt: Option<String>,
    secret: bool,
    interactive: bool,
    qualifier: Option<String>,
}

impl FieldSpec {
    /// Create a field with `key` as its long flag, no short flag and no help.
    ///
    /// The field is neither secret nor interactive until configured.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            long: key.clone(),
            key,
            short: None,
            help: String::new(),
            prompt: None,
            secret: false,
            interactive: false,
            qualifier: None,
        }
    }

    pub fn short(mut self, flag: char) -> Self {
        self.short = Some(flag);
        self
    }

    pub fn long(mut self, flag: impl Into<String>) -> Self {
        self.long = flag.into();
        self
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = text.into();
        self
    }

    /// Label shown when the field is prompted for. Defaults to the help text.
    pub fn prompt(mut self, label: impl Into<String>) -> Self {
        self.prompt = Some(label.into());
        self
    }

    /// Secret fields are read without echo.
    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }

    /// Interactive fields fall back to a terminal prompt when no source supplies them.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn qualifier(mut self, label: impl Into<String>) -> Self {
        self.qualifier = Some(label.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn short_flag(&self) -> Option<char> {
        self.short
    }

    pub fn long_flag(&self) -> &str {
        &self.long
    }

    pub fn help_text(&self) -> &str {
        &self.help
    }

    pub fn prompt_label(&self) -> &str {
        self.prompt.as_deref().unwrap_or(&self.help)
    }

    pub fn is_secret(&self) -> bool {
        self.secret
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn qualifier_label(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Validate that the key can name both a flag id and an environment variable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidKey` for empty keys or keys containing
    /// anything other than ASCII letters, digits and `_`, and
    /// `ConfigError::InvalidFlag` for flags the parser cannot accept.
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(ConfigError::InvalidKey {
                key: self.key.clone(),
                reason: "key cannot be empty",
            }
            .into());
        }

        if !self
            .key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ConfigError::InvalidKey {
                key: self.key.clone(),
                reason: "only ASCII letters, digits and '_' are allowed",
            }
            .into());
        }

        validate_flags(self.short, Some(&self.long))
    }
}

/// Validate flag names before they reach the parser, which panics on some of them.
///
/// # Errors
///
/// Returns `ConfigError::InvalidFlag` for a short flag of `-` or whitespace,
/// and for a long flag that is empty, starts with `-`, or contains
/// whitespace or `=`.
pub fn validate_flags(short: Option<char>, long: Option<&str>) -> Result<()> {
    if let Some(short) = short {
        if short == '-' || short.is_whitespace() {
            return Err(ConfigError::InvalidFlag {
                flag: format!("-{}", short),
                reason: "short flag must be a single visible character other than '-'",
            }
            .into());
        }
    }

    if let Some(long) = long {
        let reason = if long.is_empty() {
            Some("long flag cannot be empty")
        } else if long.starts_with('-') {
            Some("long flag must not start with '-'")
        } else if long.chars().any(|c| c.is_whitespace() || c == '=') {
            Some("long flag must not contain whitespace or '='")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(ConfigError::InvalidFlag {
                flag: format!("--{}", long),
                reason,
            }
            .into());
        }
    }

    Ok(())
}

fn builtin(
    qualifier: &str,
    key: &str,
    short: char,
    help: &str,
    prompt: &str,
    secret: bool,
) -> FieldSpec {
    FieldSpec::new(key)
        .short(short)
        .help(help)
        .prompt(prompt)
        .secret(secret)
        .interactive(true)
        .qualifier(qualifier)
}

fn apic_fields() -> Vec<FieldSpec> {
    vec![
        builtin(APIC, "url", 'u', "APIC IP address.", "APIC URL", false),
        builtin(APIC, "login", 'l', "APIC login ID.", "APIC login username", false),
        builtin(APIC, "password", 'p', "APIC login password.", "APIC Password", true),
    ]
}

fn mysql_fields() -> Vec<FieldSpec> {
    vec![
        builtin(MYSQL, "mysqlip", 'i', "MySQL IP address.", "MySQL IP address", false),
        builtin(MYSQL, "mysqllogin", 'a', "MySQL login ID.", "MySQL login username", false),
        builtin(MYSQL, "mysqlpassword", 's', "MySQL login password.", "MySQL Password", true),
    ]
}

/// Built-in fields for every label in `qualifiers`, in the order given.
///
/// Unknown labels contribute nothing and are not an error, so callers may
/// pass labels for groups this build does not know about.
pub fn builtin_fields(qualifiers: &QualifierSet) -> Vec<FieldSpec> {
    qualifiers
        .iter()
        .flat_map(|label| match label {
            APIC => apic_fields(),
            MYSQL => mysql_fields(),
            _ => Vec::new(),
        })
        .collect()
}
