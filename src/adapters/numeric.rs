// SPDX-License-Identifier: MIT OR Apache-2.0

//! Numeric values.
//!
//! Integers are parsed as base-10 text and the whole token must be consumed.
//! `Uint64Value` additionally rejects a leading `+` or `-`.

use crate::domain::{ConversionError, Destination, Result};
use crate::ports::Value;
use std::num::ParseIntError;
use std::str::FromStr;

fn parse_int<T>(token: &str, expected: &'static str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    token
        .parse::<T>()
        .map_err(|e| ConversionError::from_parse_int_error(token, expected, e))
}

/// A value that parses host-width signed integers.
///
/// The destination is an `isize`, so the accepted range follows the target's
/// pointer width: 64 bits on every mainstream platform.
///
/// # Examples
///
/// ```rust
/// use flagbind::adapters::IntValue;
/// use flagbind::domain::Destination;
/// use flagbind::ports::Value;
///
/// let dest = Destination::default();
/// let mut value = IntValue::new(dest.clone());
/// value.absorb("-42").unwrap();
/// assert_eq!(dest.get(), -42);
/// ```
#[derive(Debug, Clone)]
pub struct IntValue {
    target: Destination<isize>,
}

impl IntValue {
    /// Creates a new integer value writing into `target`.
    pub fn new(target: Destination<isize>) -> Self {
        Self { target }
    }
}

impl Value for IntValue {
    fn name(&self) -> &str {
        "int"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        let parsed = parse_int::<isize>(token, "an integer")?;
        self.target.set(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        self.target.get().to_string()
    }
}

/// A value that parses 64-bit signed integers.
#[derive(Debug, Clone)]
pub struct Int64Value {
    target: Destination<i64>,
}

impl Int64Value {
    /// Creates a new 64-bit integer value writing into `target`.
    pub fn new(target: Destination<i64>) -> Self {
        Self { target }
    }
}

impl Value for Int64Value {
    fn name(&self) -> &str {
        "int64"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        let parsed = parse_int::<i64>(token, "a 64-bit integer")?;
        self.target.set(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        self.target.get().to_string()
    }
}

/// A value that parses 64-bit unsigned integers.
///
/// Unlike `u64::from_str`, a leading `+` is rejected.
#[derive(Debug, Clone)]
pub struct Uint64Value {
    target: Destination<u64>,
}

impl Uint64Value {
    /// Creates a new unsigned 64-bit integer value writing into `target`.
    pub fn new(target: Destination<u64>) -> Self {
        Self { target }
    }
}

impl Value for Uint64Value {
    fn name(&self) -> &str {
        "uint64"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        const EXPECTED: &str = "an unsigned 64-bit integer";
        if token.starts_with(|c: char| c == '+' || c == '-') {
            return Err(ConversionError::InvalidNumber {
                token: token.to_string(),
                expected: EXPECTED,
                source: "unexpected sign".into(),
            });
        }
        let parsed = parse_int::<u64>(token, EXPECTED)?;
        self.target.set(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        self.target.get().to_string()
    }
}

/// A value that parses 64-bit floating point numbers.
#[derive(Debug, Clone)]
pub struct FloatValue {
    target: Destination<f64>,
}

impl FloatValue {
    /// Creates a new floating point value writing into `target`.
    pub fn new(target: Destination<f64>) -> Self {
        Self { target }
    }
}

impl Value for FloatValue {
    fn name(&self) -> &str {
        "float"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        let parsed = token
            .parse::<f64>()
            .map_err(|e| ConversionError::from_parse_float_error(token, e))?;
        self.target.set(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        self.target.get().to_string()
    }
}
