// SPDX-License-Identifier: MIT OR Apache-2.0

//! String-backed values.
//!
//! This module provides values that store tokens as text: a single overwritten
//! string, an accumulating list of strings, and a `KEY=VALUE` map.

use crate::domain::{ConversionError, Destination, Result};
use crate::ports::Value;
use std::collections::BTreeMap;

/// A value that stores the most recent token verbatim.
///
/// # Examples
///
/// ```rust
/// use flagbind::adapters::StringValue;
/// use flagbind::domain::Destination;
/// use flagbind::ports::Value;
///
/// let dest = Destination::default();
/// let mut value = StringValue::new(dest.clone());
/// value.absorb("hello").unwrap();
/// assert_eq!(dest.get(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct StringValue {
    target: Destination<String>,
}

impl StringValue {
    /// Creates a new string value writing into `target`.
    pub fn new(target: Destination<String>) -> Self {
        Self { target }
    }
}

impl Value for StringValue {
    fn name(&self) -> &str {
        "string"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        self.target.set(token.to_string());
        Ok(())
    }

    fn render(&self) -> String {
        self.target.get()
    }
}

/// A value that appends every token to a list, preserving order.
#[derive(Debug, Clone)]
pub struct StringsValue {
    target: Destination<Vec<String>>,
}

impl StringsValue {
    /// Creates a new string list value writing into `target`.
    pub fn new(target: Destination<Vec<String>>) -> Self {
        Self { target }
    }
}

impl Value for StringsValue {
    fn name(&self) -> &str {
        "strings"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        self.target.update(|items| items.push(token.to_string()));
        Ok(())
    }

    /// Renders the items joined with `,`.
    fn render(&self) -> String {
        self.target.with(|items| items.join(","))
    }
}

/// A value that parses `KEY=VALUE` tokens into a map.
///
/// The token is split at the first `=`, so the value part may itself contain
/// `=`. An existing key is overwritten.
///
/// # Examples
///
/// ```rust
/// use flagbind::adapters::StringMapValue;
/// use flagbind::domain::Destination;
/// use flagbind::ports::Value;
///
/// let dest = Destination::default();
/// let mut value = StringMapValue::new(dest.clone());
/// value.absorb("a=b").unwrap();
/// value.absorb("a=z").unwrap();
/// assert_eq!(dest.borrow().get("a").map(String::as_str), Some("z"));
/// assert_eq!(dest.borrow().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct StringMapValue {
    target: Destination<BTreeMap<String, String>>,
}

impl StringMapValue {
    /// Creates a new map value writing into `target`.
    pub fn new(target: Destination<BTreeMap<String, String>>) -> Self {
        Self { target }
    }
}

impl Value for StringMapValue {
    fn name(&self) -> &str {
        "string map"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        let (key, value) =
            token
                .split_once('=')
                .ok_or_else(|| ConversionError::MalformedKeyValue {
                    token: token.to_string(),
                })?;
        self.target
            .update(|map| map.insert(key.to_string(), value.to_string()));
        Ok(())
    }

    /// Renders `KEY=VALUE` pairs in key order, joined with `,`.
    fn render(&self) -> String {
        self.target.with(|map| {
            map.iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(",")
        })
    }
}
