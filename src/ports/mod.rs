// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) through which an external
//! command-line engine talks to this crate. The `Value` trait is implemented by
//! the adapters layer, and `Settings` by the service layer.

pub mod settings;
pub mod value;

// Re-export commonly used types
pub use settings::Settings;
pub use value::Value;
