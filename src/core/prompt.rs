//! Interactive prompting.
//!
//! The last resort for fields no other source supplied. Secret fields are
//! read without echo; everything else is read as a plain line.

use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::{Input, Password};

use crate::error::{PromptError, Result};

/// Terminal interaction used for interactive fallback.
pub trait Prompter {
    /// Read one line, echoing input.
    fn plain(&mut self, label: &str) -> Result<String>;

    /// Read one line without echoing input.
    fn secret(&mut self, label: &str) -> Result<String>;
}

/// Prompter backed by the controlling terminal.
///
/// Prompts render on stderr, or on stdout when only stderr is redirected.
/// Without a terminal on stdin and one of those streams, plain prompts
/// write their label to stderr and read one line from stdin, and secret
/// prompts fail rather than read a secret from a pipe.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

/// Stream a dialoguer prompt is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Surface {
    Stderr,
    Stdout,
}

impl Surface {
    fn term(self) -> Term {
        match self {
            Surface::Stderr => Term::stderr(),
            Surface::Stdout => Term::stdout(),
        }
    }
}

fn surface(stdin: bool, stderr: bool, stdout: bool) -> Option<Surface> {
    if !stdin {
        return None;
    }
    if stderr {
        Some(Surface::Stderr)
    } else if stdout {
        Some(Surface::Stdout)
    } else {
        None
    }
}

fn current_surface() -> Option<Surface> {
    surface(
        io::stdin().is_terminal(),
        Term::stderr().is_term(),
        Term::stdout().is_term(),
    )
}

impl Prompter for TerminalPrompter {
    fn plain(&mut self, label: &str) -> Result<String> {
        let Some(surface) = current_surface() else {
            return read_piped_line(io::stdin().lock(), io::stderr().lock(), label);
        };

        let value = Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text_on(&surface.term())
            .map_err(PromptError::from)?;
        Ok(value)
    }

    fn secret(&mut self, label: &str) -> Result<String> {
        let Some(surface) = current_surface() else {
            return Err(PromptError::NoTerminal {
                label: label.to_string(),
            }
            .into());
        };

        let value = Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact_on(&surface.term())
            .map_err(PromptError::from)?;
        Ok(value)
    }
}

/// Write `label` to `out`, then read one line from `reader`, stripping only
/// the line terminator.
fn read_piped_line(mut reader: impl BufRead, mut out: impl Write, label: &str) -> Result<String> {
    let _ = write!(out, "{}: ", label);
    let _ = out.flush();

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PromptError::UnexpectedEof {
            label: label.to_string(),
        }
        .into());
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
