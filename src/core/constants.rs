//! Constants used throughout acicred.
//!
//! Centralizes magic strings and configuration values.

/// Prefix for environment variables (`APIC_URL`, `APIC_MYSQLIP`, ...).
pub const ENV_PREFIX: &str = "APIC_";

/// Defaults file name, looked up in the working directory first.
pub const CREDENTIALS_FILE: &str = "credentials.toml";

/// Directory under the user config dir holding the fallback defaults file.
pub const CONFIG_DIR: &str = "acicred";

/// Qualifier for the APIC controller credential set.
pub const APIC: &str = "apic";

/// Qualifier for the MySQL credential set.
pub const MYSQL: &str = "mysql";

/// Flags owned by the parser itself and unavailable to fields.
pub const RESERVED_SHORT: &[char] = &['h'];

/// Long counterparts of [`RESERVED_SHORT`].
pub const RESERVED_LONG: &[&str] = &["help"];
