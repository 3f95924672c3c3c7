// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the binder.
//!
//! This module contains `Binder`, the factory surface a registration engine
//! uses to attach a typed value to each flag or argument it defines.

pub mod binder;

// Re-export commonly used types
pub use binder::Binder;
