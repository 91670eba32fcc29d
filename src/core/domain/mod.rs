//! Domain types.

mod field;
mod qualifier;
mod resolved;
mod source;

pub use field::{builtin_fields, validate_flags, FieldSpec};
pub use qualifier::QualifierSet;
pub use resolved::ResolvedCredentials;
pub use source::{Source, SourceValue};
