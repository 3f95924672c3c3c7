// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boolean value.

use crate::domain::{ConversionError, Destination, Result};
use crate::ports::Value;

/// A value that parses boolean literals.
///
/// Recognizes the standard boolean literals:
/// - `true`: "1", "t", "T", "true", "True", "TRUE"
/// - `false`: "0", "f", "F", "false", "False", "FALSE"
///
/// Other spellings, including mixed case such as "tRuE" and words such as
/// "yes" or "off", are rejected.
///
/// This value is boolean-like, so an engine may offer a `no-<flag>` spelling
/// that absorbs `"false"`.
///
/// # Examples
///
/// ```rust
/// use flagbind::adapters::BoolValue;
/// use flagbind::domain::Destination;
/// use flagbind::ports::Value;
///
/// let dest = Destination::default();
/// let mut value = BoolValue::new(dest.clone());
/// value.absorb("True").unwrap();
/// assert!(dest.get());
/// assert!(value.is_boolean_like());
/// ```
#[derive(Debug, Clone)]
pub struct BoolValue {
    target: Destination<bool>,
}

impl BoolValue {
    /// Creates a new boolean value writing into `target`.
    pub fn new(target: Destination<bool>) -> Self {
        Self { target }
    }
}

fn parse_bool(token: &str) -> Option<bool> {
    match token {
        "1" | "t" | "T" | "true" | "True" | "TRUE" => Some(true),
        "0" | "f" | "F" | "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

impl Value for BoolValue {
    fn name(&self) -> &str {
        "bool"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        let parsed = parse_bool(token).ok_or_else(|| ConversionError::InvalidBoolean {
            token: token.to_string(),
        })?;
        self.target.set(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        self.target.get().to_string()
    }

    fn is_boolean_like(&self) -> bool {
        true
    }
}
