//! Credentials session.
//!
//! Builds the field set for a qualifier set, exposes every field as a flag,
//! and resolves each field independently through flag, environment,
//! defaults file and finally an interactive prompt.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;

use clap::{Arg, ArgAction, Command};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::defaults::{Defaults, NoDefaults};
use crate::core::domain::{
    builtin_fields, validate_flags, FieldSpec, QualifierSet, ResolvedCredentials, Source,
};
use crate::core::env::{Environment, ProcessEnv};
use crate::core::prompt::{Prompter, TerminalPrompter};
use crate::core::resolve::Resolver;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Constructed,
    Resolved,
}

/// One resolution session.
///
/// Fields and extra arguments may only be added before the first call to
/// [`Credentials::get`]. Each `get` re-parses and re-resolves from scratch.
pub struct Credentials {
    name: String,
    description: String,
    qualifiers: QualifierSet,
    fields: Vec<FieldSpec>,
    extra_args: Vec<Arg>,
    env_prefix: String,
    environment: Box<dyn Environment>,
    defaults: Box<dyn Defaults>,
    prompter: Box<dyn Prompter>,
    stage: Stage,
}

impl Credentials {
    /// Create a session with the built-in fields of every known qualifier.
    ///
    /// Sources default to the process environment, no defaults file and the
    /// terminal prompter.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoQualifiers` if `qualifiers` is empty.
    pub fn new(qualifiers: impl Into<QualifierSet>, description: impl Into<String>) -> Result<Self> {
        let qualifiers = qualifiers.into();
        if qualifiers.is_empty() {
            return Err(ConfigError::NoQualifiers.into());
        }

        let mut credentials = Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            description: description.into(),
            fields: Vec::new(),
            extra_args: Vec::new(),
            env_prefix: constants::ENV_PREFIX.to_string(),
            environment: Box::new(ProcessEnv),
            defaults: Box::new(NoDefaults),
            prompter: Box::new(TerminalPrompter),
            stage: Stage::Constructed,
            qualifiers,
        };

        for field in builtin_fields(&credentials.qualifiers) {
            credentials.register(field)?;
        }
        debug!(
            qualifiers = %credentials.qualifiers,
            fields = credentials.fields.len(),
            "credentials session created"
        );

        Ok(credentials)
    }

    /// Program name shown in usage and help.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn with_environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Box::new(environment);
        self
    }

    pub fn with_defaults(mut self, defaults: impl Defaults + 'static) -> Self {
        self.defaults = Box::new(defaults);
        self
    }

    pub fn with_prompter(mut self, prompter: impl Prompter + 'static) -> Self {
        self.prompter = Box::new(prompter);
        self
    }

    pub fn qualifiers(&self) -> &QualifierSet {
        &self.qualifiers
    }

    /// Registered fields: built-ins first, then extensions, in registration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field_keys(&self) -> Vec<&str> {
        self.fields.iter().map(FieldSpec::key).collect()
    }

    /// Register an extension field.
    ///
    /// Extension fields take part in flag, environment and file resolution
    /// like built-ins, and are prompted only if marked interactive.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Sealed` after `get`, `ConfigError::DuplicateField`
    /// if the key (or its environment name) is taken, or a flag error if the
    /// field's flags collide with existing ones.
    pub fn add_field(&mut self, field: FieldSpec) -> Result<()> {
        self.ensure_constructed()?;
        self.register(field)
    }

    /// Add a flag that is parsed but not resolved through the source chain.
    ///
    /// Its value is available from [`ResolvedCredentials::matches`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Sealed` after `get`, `ConfigError::InvalidFlag`
    /// for a long flag the parser cannot accept, or a conflict error if the
    /// argument's id or flags are already in use.
    pub fn add_argument(&mut self, arg: Arg) -> Result<()> {
        self.ensure_constructed()?;

        let id = arg.get_id().as_str();
        if self.fields.iter().any(|f| f.key() == id)
            || self.extra_args.iter().any(|a| a.get_id() == arg.get_id())
        {
            return Err(ConfigError::DuplicateField(id.to_string()).into());
        }
        validate_flags(arg.get_short(), arg.get_long())?;
        self.check_flags(arg.get_short(), arg.get_long())?;

        self.extra_args.push(arg);
        Ok(())
    }

    /// The flag parser for this session.
    pub fn command(&self) -> Command {
        let mut command = Command::new(self.name.clone()).about(self.description.clone());

        for field in &self.fields {
            let mut arg = Arg::new(field.key().to_string())
                .long(field.long_flag().to_string())
                .help(field.help_text().to_string())
                .value_name(field.key().to_uppercase())
                .action(ArgAction::Set);
            if let Some(short) = field.short_flag() {
                arg = arg.short(short);
            }
            command = command.arg(arg);
        }

        command.args(self.extra_args.iter().cloned())
    }

    /// Resolve against the process arguments.
    ///
    /// # Errors
    ///
    /// See [`Credentials::get_from`].
    pub fn get(&mut self) -> Result<ResolvedCredentials> {
        self.get_from(std::env::args_os())
    }

    /// Resolve against `argv` (including the program name).
    ///
    /// # Errors
    ///
    /// Returns `Error::Args` if the arguments do not parse (including
    /// `--help`), or a prompt error if an interactive fallback fails.
    pub fn get_from<I, T>(&mut self, argv: I) -> Result<ResolvedCredentials>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command().try_get_matches_from(argv)?;

        let resolver = Resolver::new(
            &self.env_prefix,
            self.environment.as_ref(),
            self.defaults.as_ref(),
        );

        let mut values = BTreeMap::new();
        let mut pending = Vec::new();
        for field in &self.fields {
            let flag = matches.get_one::<String>(field.key()).cloned();
            match resolver.resolve(field, flag) {
                Some(found) => {
                    debug!(field = field.key(), source = %found.source, "resolved");
                    values.insert(field.key().to_string(), found.value);
                }
                None if field.is_interactive() => pending.push(field),
                None => debug!(field = field.key(), "no value"),
            }
        }

        for field in pending {
            let value = if field.is_secret() {
                self.prompter.secret(field.prompt_label())?
            } else {
                self.prompter.plain(field.prompt_label())?
            };
            debug!(field = field.key(), source = %Source::Interactive, "resolved");
            values.insert(field.key().to_string(), Zeroizing::new(value));
        }

        let secret: BTreeSet<String> = self
            .fields
            .iter()
            .filter(|f| f.is_secret())
            .map(|f| f.key().to_string())
            .collect();

        self.stage = Stage::Resolved;
        Ok(ResolvedCredentials::new(values, secret, matches))
    }

    fn ensure_constructed(&self) -> Result<()> {
        match self.stage {
            Stage::Constructed => Ok(()),
            Stage::Resolved => Err(ConfigError::Sealed.into()),
        }
    }

    fn register(&mut self, field: FieldSpec) -> Result<()> {
        field.validate()?;

        let upper = field.key().to_uppercase();
        if self
            .fields
            .iter()
            .any(|f| f.key().to_uppercase() == upper)
            || self
                .extra_args
                .iter()
                .any(|a| a.get_id().as_str() == field.key())
        {
            return Err(ConfigError::DuplicateField(field.key().to_string()).into());
        }
        self.check_flags(field.short_flag(), Some(field.long_flag()))?;

        self.fields.push(field);
        Ok(())
    }

    fn check_flags(&self, short: Option<char>, long: Option<&str>) -> Result<()> {
        if let Some(short) = short {
            if constants::RESERVED_SHORT.contains(&short) {
                return Err(ConfigError::ReservedFlag(format!("-{}", short)).into());
            }
            let taken = self.fields.iter().any(|f| f.short_flag() == Some(short))
                || self.extra_args.iter().any(|a| a.get_short() == Some(short));
            if taken {
                return Err(ConfigError::DuplicateFlag(format!("-{}", short)).into());
            }
        }

        if let Some(long) = long {
            if constants::RESERVED_LONG.contains(&long) {
                return Err(ConfigError::ReservedFlag(format!("--{}", long)).into());
            }
            let taken = self.fields.iter().any(|f| f.long_flag() == long)
                || self.extra_args.iter().any(|a| a.get_long() == Some(long));
            if taken {
                return Err(ConfigError::DuplicateFlag(format!("--{}", long)).into());
            }
        }

        Ok(())
    }
}
