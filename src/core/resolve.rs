//! Source chain resolution.
//!
//! Resolves one field from the non-interactive sources in fixed order:
//! flag, environment, defaults file. The first source holding a value wins
//! and the value is returned exactly as found.

use crate::core::defaults::Defaults;
use crate::core::domain::{FieldSpec, Source, SourceValue};
use crate::core::env::{env_key, Environment};

/// Resolver over one environment and one defaults provider.
pub struct Resolver<'a> {
    prefix: &'a str,
    env: &'a dyn Environment,
    defaults: &'a dyn Defaults,
}

impl<'a> Resolver<'a> {
    pub fn new(prefix: &'a str, env: &'a dyn Environment, defaults: &'a dyn Defaults) -> Self {
        Self {
            prefix,
            env,
            defaults,
        }
    }

    /// Environment variable consulted for `field`.
    pub fn env_name(&self, field: &FieldSpec) -> String {
        env_key(self.prefix, field.key())
    }

    /// Resolve `field` given the value parsed from its flag, if any.
    ///
    /// `flag` is `None` only when the flag was not supplied; an empty
    /// string is a supplied value. Returns `None` when no source has a value.
    pub fn resolve(&self, field: &FieldSpec, flag: Option<String>) -> Option<SourceValue> {
        if let Some(value) = flag {
            return Some(SourceValue::new(value, Source::Flag));
        }

        if let Some(value) = self.env.var(&self.env_name(field)) {
            return Some(SourceValue::new(value, Source::Environment));
        }

        self.defaults
            .lookup(&field.key().to_uppercase())
            .map(|value| SourceValue::new(value, Source::File))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::defaults::NoDefaults;
    use std::collections::BTreeMap;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn found(value: Option<SourceValue>) -> Option<(String, Source)> {
        value.map(|v| (v.value.to_string(), v.source))
    }

    #[test]
    fn test_flag_beats_environment_and_file() {
        let env = map(&[("APIC_URL", "env")]);
        let file = map(&[("URL", "file")]);
        let resolver = Resolver::new("APIC_", &env, &file);
        let field = FieldSpec::new("url");

        assert_eq!(
            found(resolver.resolve(&field, Some("flag".into()))),
            Some(("flag".into(), Source::Flag))
        );
        assert_eq!(
            found(resolver.resolve(&field, None)),
            Some(("env".into(), Source::Environment))
        );

        let empty = map(&[]);
        let resolver = Resolver::new("APIC_", &empty, &file);
        assert_eq!(
            found(resolver.resolve(&field, None)),
            Some(("file".into(), Source::File))
        );
    }

    #[test]
    fn test_empty_flag_is_a_value() {
        let env = map(&[("APIC_LOGIN", "env")]);
        let resolver = Resolver::new("APIC_", &env, &NoDefaults);

        let resolved = found(resolver.resolve(&FieldSpec::new("login"), Some(String::new())));
        assert_eq!(resolved, Some((String::new(), Source::Flag)));
    }

    #[test]
    fn test_empty_environment_value_is_a_value() {
        let env = map(&[("APIC_LOGIN", "")]);
        let file = map(&[("LOGIN", "file")]);
        let resolver = Resolver::new("APIC_", &env, &file);

        let resolved = found(resolver.resolve(&FieldSpec::new("login"), None));
        assert_eq!(resolved, Some((String::new(), Source::Environment)));
    }

    #[test]
    fn test_nothing_found() {
        let env = map(&[]);
        let resolver = Resolver::new("APIC_", &env, &NoDefaults);
        assert!(resolver.resolve(&FieldSpec::new("url"), None).is_none());
    }

    #[test]
    fn test_env_name_uses_prefix() {
        let env = map(&[]);
        let resolver = Resolver::new("APIC_", &env, &NoDefaults);
        assert_eq!(resolver.env_name(&FieldSpec::new("mysqlip")), "APIC_MYSQLIP");

        let resolver = Resolver::new("TOOL_", &env, &NoDefaults);
        assert_eq!(resolver.env_name(&FieldSpec::new("url")), "TOOL_URL");
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let env = map(&[("APIC_PASSWORD", " p@ss \n")]);
        let resolver = Resolver::new("APIC_", &env, &NoDefaults);

        let resolved = found(resolver.resolve(&FieldSpec::new("password"), None));
        assert_eq!(resolved, Some((" p@ss \n".into(), Source::Environment)));
    }
}
