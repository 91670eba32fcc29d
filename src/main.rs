//! Acicred - resolve APIC credentials the way APIC tools do.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use acicred::cli::{self, output};
use acicred::error::{ConfigError, Error, PromptError};

fn main() {
    if let Err(e) = run() {
        let suggestion = match &e {
            Error::Args(err) => err.exit(),
            Error::Prompt(PromptError::NoTerminal { .. }) => {
                Some("pass the value as a flag or set the APIC_ environment variable")
            }
            Error::Config(ConfigError::Parse(_)) => Some("fix or remove credentials.toml"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn run() -> acicred::Result<()> {
    let creds = cli::session(cli::qualifiers_from_env())?;
    let matches = cli::preparse(&creds)?;

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(cli::LOG_ENV).unwrap_or_else(|_| {
        if matches.get_flag("verbose") {
            EnvFilter::new("acicred=debug")
        } else {
            EnvFilter::new("acicred=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    cli::execute(creds)
}
