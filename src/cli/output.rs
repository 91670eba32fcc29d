//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: keys, hints
//! - Bold: values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ no terminal available to read APIC Password`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ set APIC_PASSWORD or pass --password`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair (label cyan, value bold), labels padded to `width`.
///
/// Example: `  url       10.0.0.1`
pub fn kv(label: &str, width: usize, value: impl Display) {
    if colors_enabled() {
        println!(
            "  {}  {}",
            style(format!("{:width$}", label, width = width)).cyan(),
            style(value.to_string()).bold()
        );
    } else {
        println!("  {:width$}  {}", label, value, width = width);
    }
}

/// Print a key with a dimmed placeholder value.
///
/// Example: `  login     (unset)`
pub fn unset(label: &str, width: usize) {
    if colors_enabled() {
        println!(
            "  {}  {}",
            style(format!("{:width$}", label, width = width)).cyan(),
            style("(unset)").dim()
        );
    } else {
        println!("  {:width$}  (unset)", label, width = width);
    }
}
