// SPDX-License-Identifier: MIT OR Apache-2.0

//! Settings trait definition.
//!
//! This module defines the `Settings` trait, implemented by anything a value can
//! be attached to. The registration engine uses it to attach custom values that
//! the built-in factories do not cover.

use crate::domain::BindResult;
use crate::ports::Value;

/// A trait for flag or argument definitions that hold a single value.
///
/// # Examples
///
/// ```rust
/// use flagbind::domain::{BindResult, Result};
/// use flagbind::ports::{Settings, Value};
///
/// struct Noop;
///
/// impl Value for Noop {
///     fn name(&self) -> &str { "noop" }
///     fn absorb(&mut self, _token: &str) -> Result<()> { Ok(()) }
///     fn render(&self) -> String { String::new() }
/// }
///
/// #[derive(Default)]
/// struct Slot(Option<Box<dyn Value>>);
///
/// impl Settings for Slot {
///     fn set_value(&mut self, value: Box<dyn Value>) -> BindResult<()> {
///         self.0 = Some(value);
///         Ok(())
///     }
/// }
///
/// let mut slot = Slot::default();
/// slot.set_value(Box::new(Noop)).unwrap();
/// assert!(slot.0.is_some());
/// ```
pub trait Settings {
    /// Attaches `value`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::AlreadyBound`](crate::domain::BindError::AlreadyBound)
    /// if the implementation only accepts one value and already holds one.
    fn set_value(&mut self, value: Box<dyn Value>) -> BindResult<()>;
}
