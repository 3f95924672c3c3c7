// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value trait definition.
//!
//! This module defines the `Value` trait, the port through which a command-line
//! engine feeds raw tokens into typed storage. Every built-in conversion in the
//! adapters layer implements it, and callers can implement it for their own
//! types.

use crate::domain::Result;

/// A trait for values that absorb command-line tokens.
///
/// A value wraps a typed destination. Each call to [`absorb`](Value::absorb)
/// converts one token and stores the result, either overwriting or accumulating
/// depending on the implementation. [`render`](Value::render) produces the
/// textual form of the current state for help text and default display.
///
/// A failed `absorb` must leave the destination holding its previous value.
///
/// # Examples
///
/// ```rust
/// use flagbind::domain::{ConversionError, Result};
/// use flagbind::ports::Value;
///
/// struct Upper(String);
///
/// impl Value for Upper {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn absorb(&mut self, token: &str) -> Result<()> {
///         self.0 = token.to_uppercase();
///         Ok(())
///     }
///
///     fn render(&self) -> String {
///         self.0.clone()
///     }
/// }
///
/// let mut value = Upper(String::new());
/// value.absorb("shout").unwrap();
/// assert_eq!(value.render(), "SHOUT");
/// assert!(!value.is_boolean_like());
/// ```
pub trait Value {
    /// Returns a short label for the kind of value, such as `"string"` or `"ip"`.
    ///
    /// This label is used for logging and binding error messages.
    fn name(&self) -> &str;

    /// Converts `token` and stores the result in the destination.
    ///
    /// Called once per matching command-line occurrence, in the order the
    /// tokens appear.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`](crate::domain::ConversionError) naming the
    /// token and the expected shape if the token cannot be converted.
    ///
    /// # Panics
    ///
    /// The built-in values panic if the caller holds a guard from
    /// [`Destination::borrow`](crate::domain::Destination::borrow) on their
    /// destination across this call.
    fn absorb(&mut self, token: &str) -> Result<()>;

    /// Renders the current state as text.
    ///
    /// Must not mutate state.
    fn render(&self) -> String;

    /// Returns `true` if the engine may offer a negated `no-<flag>` spelling.
    ///
    /// Boolean-like values accept `"false"` for the negated spelling.
    fn is_boolean_like(&self) -> bool {
        false
    }
}

impl<'a> std::fmt::Debug for dyn Value + 'a {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Value")
            .field("name", &self.name())
            .field("rendered", &self.render())
            .finish()
    }
}
