//! Test support utilities for acicred integration tests.
//!
//! Provides a scripted prompter and helpers for building isolated sessions.

#![allow(dead_code)]

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use acicred::core::{Credentials, Prompter, QualifierSet};
use acicred::error::{PromptError, Result};

/// Which prompt variant was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Plain,
    Secret,
}

/// Prompter that answers from a script and records every call.
///
/// Clones share state, so a test can keep one handle and hand the other
/// to the session.
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    answers: Rc<RefCell<VecDeque<String>>>,
    calls: Rc<RefCell<Vec<(Kind, String)>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        let prompter = Self::default();
        prompter
            .answers
            .borrow_mut()
            .extend(answers.iter().map(|a| a.to_string()));
        prompter
    }

    /// Recorded `(kind, label)` pairs in call order.
    pub fn calls(&self) -> Vec<(Kind, String)> {
        self.calls.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<Kind> {
        self.calls.borrow().iter().map(|(k, _)| *k).collect()
    }

    fn answer(&mut self, kind: Kind, label: &str) -> Result<String> {
        self.calls.borrow_mut().push((kind, label.to_string()));
        self.answers.borrow_mut().pop_front().ok_or_else(|| {
            PromptError::UnexpectedEof {
                label: label.to_string(),
            }
            .into()
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn plain(&mut self, label: &str) -> Result<String> {
        self.answer(Kind::Plain, label)
    }

    fn secret(&mut self, label: &str) -> Result<String> {
        self.answer(Kind::Secret, label)
    }
}

/// Build a string map from pairs.
pub fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Session over a fixed environment and defaults map, prompting from `prompter`.
pub fn session(
    qualifiers: &str,
    env: &[(&str, &str)],
    file: &[(&str, &str)],
    prompter: &ScriptedPrompter,
) -> Credentials {
    Credentials::new(QualifierSet::parse_list(qualifiers), "test session")
        .expect("failed to create session")
        .with_environment(map(env))
        .with_defaults(map(file))
        .with_prompter(prompter.clone())
}

/// Build argv with a program name prepended.
pub fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("test")
        .chain(args.iter().copied())
        .map(String::from)
        .collect()
}
