//! Command-line interface for the `acicred` binary.
//!
//! Resolves a credential session the way any APIC tool would and prints
//! the result, which makes it easy to check what a given shell setup
//! will feed those tools.

pub mod output;

use std::collections::BTreeMap;

use clap::{Arg, ArgAction, ArgMatches};
use serde::Serialize;

use crate::core::{Credentials, CredentialsFile, QualifierSet, ResolvedCredentials};
use crate::error::Result;

/// Environment variable selecting the qualifiers, e.g. `apic,mysql`.
pub const QUALIFIERS_ENV: &str = "ACICRED_QUALIFIERS";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ACICRED_LOG";

const MASK: &str = "********";

#[derive(Serialize)]
struct Report<'a> {
    qualifiers: Vec<&'a str>,
    fields: BTreeMap<&'a str, Option<&'a str>>,
}

/// Qualifiers from `ACICRED_QUALIFIERS`, defaulting to `apic`.
pub fn qualifiers_from_env() -> QualifierSet {
    std::env::var(QUALIFIERS_ENV)
        .ok()
        .map(|list| QualifierSet::parse_list(&list))
        .unwrap_or_default()
}

/// Build the binary's session: built-in fields plus display flags.
///
/// # Errors
///
/// Returns a configuration error if the qualifier set is empty.
pub fn session(qualifiers: QualifierSet) -> Result<Credentials> {
    let mut creds = Credentials::new(
        qualifiers,
        "Resolve APIC credentials from flags, environment, credentials.toml or a prompt",
    )?
    .with_name("acicred");

    creds.add_argument(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Output as JSON"),
    )?;
    creds.add_argument(
        Arg::new("show_secrets")
            .long("show-secrets")
            .action(ArgAction::SetTrue)
            .help("Print secret values instead of masking them"),
    )?;
    creds.add_argument(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::SetTrue)
            .help("Enable debug logging"),
    )?;

    Ok(creds)
}

/// Parse arguments without resolving, so logging can be set up first.
///
/// # Errors
///
/// Returns `Error::Args` for bad arguments, `--help` included.
pub fn preparse(creds: &Credentials) -> Result<ArgMatches> {
    Ok(creds.command().try_get_matches()?)
}

/// Resolve the session and print the bundle.
///
/// # Errors
///
/// Returns an error if the credentials file is malformed or a prompt fails.
pub fn execute(creds: Credentials) -> Result<()> {
    let mut creds = creds.with_defaults(CredentialsFile::discover()?);
    let resolved = creds.get()?;

    let matches = resolved.matches();
    let reveal = matches.get_flag("show_secrets");

    if matches.get_flag("json") {
        print_json(&creds, &resolved, reveal)
    } else {
        print_table(&creds, &resolved, reveal);
        Ok(())
    }
}

fn display<'a>(resolved: &'a ResolvedCredentials, key: &str, reveal: bool) -> Option<&'a str> {
    let value = resolved.get(key)?;
    if resolved.is_secret(key) && !reveal {
        Some(MASK)
    } else {
        Some(value)
    }
}

fn print_table(creds: &Credentials, resolved: &ResolvedCredentials, reveal: bool) {
    let width = creds
        .fields()
        .iter()
        .map(|f| f.key().len())
        .max()
        .unwrap_or(0);

    for key in creds.field_keys() {
        match display(resolved, key, reveal) {
            Some(value) => output::kv(key, width, value),
            None => output::unset(key, width),
        }
    }
}

fn print_json(creds: &Credentials, resolved: &ResolvedCredentials, reveal: bool) -> Result<()> {
    let report = Report {
        qualifiers: creds.qualifiers().iter().collect(),
        fields: creds
            .field_keys()
            .into_iter()
            .map(|key| (key, display(resolved, key, reveal)))
            .collect(),
    };

    let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
    println!("{}", json);
    Ok(())
}
