// SPDX-License-Identifier: MIT OR Apache-2.0

//! Caller-visible destination handles.
//!
//! This module provides the `Destination` type, a shared handle to the storage a
//! value writes into. The binder hands one clone to the caller and keeps another
//! inside the value, so converted tokens become visible to the caller as soon as
//! they are absorbed.

use serde::{Serialize, Serializer};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// A shared, mutable slot holding the converted value of one flag or argument.
///
/// A `Destination` always holds a valid value: it is created with the zero value
/// of its type and is only ever overwritten with fully converted values.
///
/// # Thread Safety
///
/// Destinations are built on `Rc<RefCell<T>>` and are therefore neither `Send`
/// nor `Sync`. Conversion is single-threaded and driven by one engine.
///
/// # Borrowing
///
/// A guard returned by [`borrow`](Destination::borrow) must be dropped before
/// the owning value absorbs another token. Writing through any clone while a
/// guard is alive panics.
///
/// # Examples
///
/// ```
/// use flagbind::domain::Destination;
///
/// let dest = Destination::new(0u64);
/// let alias = dest.clone();
/// alias.set(42);
/// assert_eq!(dest.get(), 42);
/// ```
pub struct Destination<T>(Rc<RefCell<T>>);

impl<T> Destination<T> {
    /// Creates a new destination holding `value`.
    pub fn new(value: T) -> Self {
        Destination(Rc::new(RefCell::new(value)))
    }

    /// Borrows the current value.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently being written. While the returned
    /// guard is alive, any write through a clone panics instead, including
    /// the one made by `absorb` on the value that owns this destination.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Calls `f` with a reference to the current value.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagbind::domain::Destination;
    ///
    /// let dest = Destination::new(vec!["a".to_string()]);
    /// assert_eq!(dest.with(|v| v.len()), 1);
    /// ```
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }

    /// Replaces the current value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        self.0.replace(value)
    }

    /// Overwrites the current value.
    ///
    /// # Panics
    ///
    /// Panics if a guard from [`borrow`](Destination::borrow) is alive on any
    /// clone of this destination.
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Mutates the current value in place.
    pub(crate) fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.0.borrow_mut())
    }
}

impl<T: Clone> Destination<T> {
    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T: Default> Destination<T> {
    /// Moves the current value out, leaving the zero value behind.
    ///
    /// This is how ownership of a resource such as an open file is transferred
    /// to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagbind::domain::Destination;
    ///
    /// let dest = Destination::new(Some("owned".to_string()));
    /// assert_eq!(dest.take(), Some("owned".to_string()));
    /// assert_eq!(dest.get(), None);
    /// ```
    pub fn take(&self) -> T {
        self.0.take()
    }
}

impl<T: Default> Default for Destination<T> {
    fn default() -> Self {
        Destination::new(T::default())
    }
}

impl<T> Clone for Destination<T> {
    fn clone(&self) -> Self {
        Destination(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Destination<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Destination").field(&*self.0.borrow()).finish()
    }
}

impl<T: PartialEq> PartialEq<T> for Destination<T> {
    fn eq(&self, other: &T) -> bool {
        *self.0.borrow() == *other
    }
}

impl<T: Serialize> Serialize for Destination<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.borrow().serialize(serializer)
    }
}
