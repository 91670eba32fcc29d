//! Error types.
//!
//! Absence of a value from any source is never an error; only broken
//! configuration, unusable terminals and flag-parsing failures surface here.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Flag parsing failed. Also carries `--help` and `--version` requests.
    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Field registration and configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("field already registered: {0}")]
    DuplicateField(String),

    #[error("flag already in use: {0}")]
    DuplicateFlag(String),

    #[error("flag is reserved: {0}")]
    ReservedFlag(String),

    #[error("invalid field key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("invalid flag '{flag}': {reason}")]
    InvalidFlag { flag: String, reason: &'static str },

    #[error("at least one qualifier is required")]
    NoQualifiers,

    #[error("credentials already resolved; build a new session to add fields")]
    Sealed,

    #[error("failed to read credentials file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse credentials file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Interactive prompt errors.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("no terminal available to read {label}")]
    NoTerminal { label: String },

    #[error("input ended before {label} was entered")]
    UnexpectedEof { label: String },

    #[error("prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
