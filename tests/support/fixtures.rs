//! Test fixtures and constants.

/// Keys activated by the `apic` qualifier.
pub const APIC_KEYS: &[&str] = &["url", "login", "password"];

/// Keys activated by the `mysql` qualifier.
pub const MYSQL_KEYS: &[&str] = &["mysqlip", "mysqllogin", "mysqlpassword"];

/// A complete credentials file for both qualifiers.
pub const SAMPLE_CREDENTIALS: &str = r#"
URL = "https://apic.file"
LOGIN = "file-admin"
PASSWORD = "file-secret"
MYSQLIP = "db.file"
MYSQLLOGIN = "file-root"
MYSQLPASSWORD = "file-db-secret"
"#;
