//! Acicred - per-field credential resolution for APIC command-line tools.
//!
//! Each field is resolved independently, first match wins:
//!
//! 1. command-line flag (`--url`, `-p`, ...)
//! 2. environment variable (`APIC_URL`, `APIC_PASSWORD`, ...)
//! 3. defaults file (`credentials.toml`, uppercased keys)
//! 4. interactive prompt, without echo for secret fields
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # acicred binary support
//! │   └── output        # Terminal output helpers
//! └── core/             # Resolution engine
//!     ├── domain/       # FieldSpec, QualifierSet, ResolvedCredentials
//!     ├── credentials   # Session facade
//!     ├── resolve       # Flag > environment > file chain
//!     ├── env           # Environment source
//!     ├── defaults      # Defaults file source
//!     └── prompt        # Terminal prompts
//! ```
//!
//! # Example
//!
//! ```no_run
//! use acicred::core::Credentials;
//!
//! let mut creds = Credentials::new("apic", "Push a tenant to the APIC")?;
//! let resolved = creds.get()?;
//! let url = resolved.get("url").unwrap_or_default();
//! # Ok::<(), acicred::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::{Credentials, FieldSpec, QualifierSet, ResolvedCredentials};
pub use crate::error::{Error, Result};
