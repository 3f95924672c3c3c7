// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the built-in value implementations.
//!
//! This module contains concrete implementations of the `Value` trait defined in
//! the ports layer. Each adapter wraps a typed `Destination` and converts tokens
//! into that type.

pub mod boolean;
#[cfg(feature = "duration")]
pub mod duration;
pub mod file;
pub mod ip;
pub mod numeric;
pub mod path;
pub mod string;
#[cfg(feature = "url")]
pub mod url;

// Re-export adapters based on feature flags
pub use self::boolean::BoolValue;
#[cfg(feature = "duration")]
pub use self::duration::DurationValue;
pub use self::file::FileValue;
pub use self::ip::IpValue;
pub use self::numeric::{FloatValue, Int64Value, IntValue, Uint64Value};
pub use self::path::{ExistingPathValue, PathKind};
pub use self::string::{StringMapValue, StringValue, StringsValue};
#[cfg(feature = "url")]
pub use self::url::UrlValue;
