// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the destination handle shared between a value and its
//! caller, and the error types every conversion reports. It is independent of
//! any concrete value type.

pub mod destination;
pub mod errors;

// Re-export commonly used types
pub use destination::Destination;
pub use errors::{BindError, BindResult, ConversionError, ErrorKind, Result};
