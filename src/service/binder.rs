// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-flag value binder.
//!
//! A `Binder` sits inside each flag or argument definition. The registration
//! engine calls exactly one factory method on it, which allocates a typed
//! destination, wraps it in the matching value, attaches the value, and hands
//! the destination back to the caller.

use crate::adapters::{
    BoolValue, ExistingPathValue, FileValue, FloatValue, Int64Value, IntValue, IpValue,
    StringMapValue, StringValue, StringsValue, Uint64Value,
};
use crate::domain::{BindError, BindResult, ConversionError, Destination, Result};
use crate::ports::{Settings, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::net::IpAddr;

/// Binding state of a [`Binder`].
enum BinderState {
    Unbound,
    Bound(Box<dyn Value>),
}

/// Attaches exactly one value to one destination.
///
/// A binder starts out unbound. The first factory call (or
/// [`set_value`](Settings::set_value)) binds it; every later attempt fails with
/// [`BindError::AlreadyBound`] and leaves the original value in place, so a
/// destination handed out by a binder is never orphaned.
///
/// # Examples
///
/// ```rust
/// use flagbind::service::Binder;
///
/// let mut binder = Binder::new();
/// let hosts = binder.strings().unwrap();
///
/// binder.absorb("alpha").unwrap();
/// binder.absorb("beta").unwrap();
/// assert_eq!(hosts.get(), vec!["alpha", "beta"]);
///
/// assert!(binder.bool().is_err());
/// ```
pub struct Binder {
    state: BinderState,
    required: bool,
}

impl Binder {
    /// Creates a new, unbound binder.
    pub fn new() -> Self {
        Self {
            state: BinderState::Unbound,
            required: false,
        }
    }

    /// Marks the flag or argument as required.
    ///
    /// The binder only records this; enforcing it is up to the engine.
    pub fn required(&mut self) -> &mut Self {
        self.required = true;
        self
    }

    /// Returns `true` if the flag or argument was marked as required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns `true` once a value has been attached.
    pub fn is_bound(&self) -> bool {
        matches!(self.state, BinderState::Bound(_))
    }

    /// Returns the attached value, if any.
    pub fn value(&self) -> Option<&dyn Value> {
        match &self.state {
            BinderState::Bound(value) => Some(&**value),
            BinderState::Unbound => None,
        }
    }

    /// Returns the attached value mutably, if any.
    pub fn value_mut(&mut self) -> Option<&mut (dyn Value + 'static)> {
        match &mut self.state {
            BinderState::Bound(value) => Some(&mut **value),
            BinderState::Unbound => None,
        }
    }

    /// Returns `true` if the attached value is boolean-like.
    ///
    /// An unbound binder is never boolean-like.
    pub fn is_boolean_like(&self) -> bool {
        self.value().map_or(false, |v| v.is_boolean_like())
    }

    /// Feeds `token` to the attached value.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Unbound`] if no value is attached, or the
    /// value's own conversion error.
    pub fn absorb(&mut self, token: &str) -> Result<()> {
        match self.value_mut() {
            Some(value) => value.absorb(token),
            None => Err(ConversionError::Unbound {
                token: token.to_string(),
            }),
        }
    }

    /// Renders the attached value, or returns `None` if the binder is unbound.
    pub fn render(&self) -> Option<String> {
        self.value().map(|v| v.render())
    }

    /// Allocates a zero-valued destination and binds the value built around it.
    fn bind_new<T, V>(
        &mut self,
        make: impl FnOnce(Destination<T>) -> V,
    ) -> BindResult<Destination<T>>
    where
        T: Default,
        V: Value + 'static,
    {
        let target = Destination::default();
        self.set_value(Box::new(make(target.clone())))?;
        Ok(target)
    }

    /// Binds a string value that keeps the last token.
    pub fn string(&mut self) -> BindResult<Destination<String>> {
        self.bind_new(StringValue::new)
    }

    /// Binds a string list value that keeps every token in order.
    pub fn strings(&mut self) -> BindResult<Destination<Vec<String>>> {
        self.bind_new(StringsValue::new)
    }

    /// Binds a `KEY=VALUE` map value.
    pub fn string_map(&mut self) -> BindResult<Destination<BTreeMap<String, String>>> {
        self.bind_new(StringMapValue::new)
    }

    /// Binds a boolean value. The engine may offer `--no-<flag>` for it.
    pub fn bool(&mut self) -> BindResult<Destination<bool>> {
        self.bind_new(BoolValue::new)
    }

    /// Binds a host-width signed integer value.
    pub fn int(&mut self) -> BindResult<Destination<isize>> {
        self.bind_new(IntValue::new)
    }

    /// Binds a 64-bit signed integer value.
    pub fn int64(&mut self) -> BindResult<Destination<i64>> {
        self.bind_new(Int64Value::new)
    }

    /// Binds a 64-bit unsigned integer value.
    pub fn uint64(&mut self) -> BindResult<Destination<u64>> {
        self.bind_new(Uint64Value::new)
    }

    /// Binds a 64-bit floating point value.
    pub fn float(&mut self) -> BindResult<Destination<f64>> {
        self.bind_new(FloatValue::new)
    }

    /// Binds a duration value such as `1h30m`.
    #[cfg(feature = "duration")]
    pub fn duration(&mut self) -> BindResult<Destination<std::time::Duration>> {
        self.bind_new(crate::adapters::DurationValue::new)
    }

    /// Binds an IP address value.
    pub fn ip(&mut self) -> BindResult<Destination<Option<IpAddr>>> {
        self.bind_new(IpValue::new)
    }

    /// Binds a value that requires an existing file and stores its path.
    pub fn existing_file(&mut self) -> BindResult<Destination<String>> {
        self.bind_new(ExistingPathValue::file)
    }

    /// Binds a value that requires an existing directory and stores its path.
    pub fn existing_dir(&mut self) -> BindResult<Destination<String>> {
        self.bind_new(ExistingPathValue::dir)
    }

    /// Binds a value that opens a file for reading.
    ///
    /// Take ownership of the opened handle with [`Destination::take`].
    pub fn file(&mut self) -> BindResult<Destination<Option<File>>> {
        self.bind_new(FileValue::new)
    }

    /// Binds a URL value.
    #[cfg(feature = "url")]
    pub fn url(&mut self) -> BindResult<Destination<Option<::url::Url>>> {
        self.bind_new(crate::adapters::UrlValue::new)
    }
}

impl Settings for Binder {
    fn set_value(&mut self, value: Box<dyn Value>) -> BindResult<()> {
        if let BinderState::Bound(existing) = &self.state {
            tracing::warn!(
                "Rejected binding a {} value: already bound to a {} value",
                value.name(),
                existing.name()
            );
            return Err(BindError::AlreadyBound {
                bound: existing.name().to_string(),
                requested: value.name().to_string(),
            });
        }

        tracing::debug!("Bound {} value", value.name());
        self.state = BinderState::Bound(value);
        Ok(())
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Binder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binder")
            .field("value", &self.value())
            .field("required", &self.required)
            .finish()
    }
}
