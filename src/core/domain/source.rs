//! Value provenance.

use std::fmt;

use zeroize::Zeroizing;

/// Where a resolved value came from, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Source {
    Flag,
    Environment,
    File,
    Interactive,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Source::Flag => "flag",
            Source::Environment => "environment",
            Source::File => "file",
            Source::Interactive => "interactive",
        };
        f.write_str(name)
    }
}

/// A discovered value together with its source.
///
/// Used for resolution bookkeeping only; the resolved bundle keeps the value.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceValue {
    pub value: Zeroizing<String>,
    pub source: Source,
}

impl SourceValue {
    pub fn new(value: impl Into<String>, source: Source) -> Self {
        Self {
            value: Zeroizing::new(value.into()),
            source,
        }
    }
}

impl fmt::Debug for SourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceValue")
            .field("value", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}
