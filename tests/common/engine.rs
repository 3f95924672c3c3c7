// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock value and a minimal command-line engine that drives binders the way a
//! real flag parser would.

#![allow(dead_code)]

use flagbind::domain::{ConversionError, Result};
use flagbind::ports::Value;
use flagbind::service::Binder;
use std::cell::RefCell;
use std::rc::Rc;

/// A mock value that records every token it absorbs.
///
/// Tokens listed with `rejecting` fail with `InvalidNumber` and are not
/// recorded.
#[derive(Debug, Clone, Default)]
pub struct MockValue {
    seen: Rc<RefCell<Vec<String>>>,
    rejected: Vec<String>,
    boolean_like: bool,
}

impl MockValue {
    /// Creates a new mock value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the mock fail on `token`.
    pub fn rejecting(mut self, token: impl Into<String>) -> Self {
        self.rejected.push(token.into());
        self
    }

    /// Makes the mock report itself as boolean-like.
    pub fn boolean_like(mut self) -> Self {
        self.boolean_like = true;
        self
    }

    /// Returns a shared view of the recorded tokens.
    pub fn seen(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.seen)
    }
}

impl Value for MockValue {
    fn name(&self) -> &str {
        "mock"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        if self.rejected.iter().any(|r| r == token) {
            return Err(ConversionError::InvalidNumber {
                token: token.to_string(),
                expected: "an accepted token",
                source: "mock rejection".into(),
            });
        }
        self.seen.borrow_mut().push(token.to_string());
        Ok(())
    }

    fn render(&self) -> String {
        self.seen.borrow().join(" ")
    }

    fn is_boolean_like(&self) -> bool {
        self.boolean_like
    }
}

/// A minimal long-flag engine.
///
/// Supports `--name=value`, `--name value`, and, for boolean-like values,
/// bare `--name` and `--no-name`. Conversion errors are collected rather than
/// aborting the parse.
#[derive(Debug, Default)]
pub struct MiniEngine {
    flags: Vec<(String, Binder)>,
    seen: Vec<String>,
}

impl MiniEngine {
    /// Creates an engine with no flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a flag and returns its binder.
    pub fn flag(&mut self, name: &str) -> &mut Binder {
        self.flags.push((name.to_string(), Binder::new()));
        &mut self.flags.last_mut().unwrap().1
    }

    /// Parses `args`, returning every conversion error encountered.
    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> Vec<ConversionError> {
        let mut errors = Vec::new();
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_ref();
            i += 1;

            let Some(body) = arg.strip_prefix("--") else {
                continue;
            };

            if let Some((name, value)) = body.split_once('=') {
                self.feed(name, value, &mut errors);
                continue;
            }

            if self.is_boolean_like(body) {
                self.feed(body, "true", &mut errors);
                continue;
            }

            if let Some(name) = body.strip_prefix("no-") {
                if self.is_boolean_like(name) {
                    self.feed(name, "false", &mut errors);
                    continue;
                }
            }

            if i < args.len() {
                let value = args[i].as_ref();
                i += 1;
                self.feed(body, value, &mut errors);
            }
        }
        errors
    }

    /// Returns the names of required flags that never appeared.
    pub fn missing_required(&self) -> Vec<String> {
        self.flags
            .iter()
            .filter(|(name, binder)| binder.is_required() && !self.seen.contains(name))
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn is_boolean_like(&self, name: &str) -> bool {
        self.flags
            .iter()
            .any(|(n, binder)| n == name && binder.is_boolean_like())
    }

    fn feed(&mut self, name: &str, value: &str, errors: &mut Vec<ConversionError>) {
        let Some((_, binder)) = self.flags.iter_mut().find(|(n, _)| n == name) else {
            return;
        };
        match binder.absorb(value) {
            Ok(()) => self.seen.push(name.to_string()),
            Err(e) => errors.push(e),
        }
    }
}
