//! Core library components.
//!
//! This module contains the credential resolution engine: field
//! registration, the per-field source chain, and interactive fallback.

pub mod constants;
pub mod credentials;
pub mod defaults;
pub mod domain;
pub mod env;
pub mod prompt;
pub mod resolve;

pub use credentials::Credentials;
pub use defaults::{CredentialsFile, Defaults, NoDefaults};
pub use domain::{FieldSpec, QualifierSet, ResolvedCredentials, Source};
pub use env::{env_key, Environment, ProcessEnv};
pub use prompt::{Prompter, TerminalPrompter};
