// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed value conversion for command-line flag libraries.
//!
//! This crate is the layer between "the user typed a string" and "the program
//! has a typed variable". A command-line engine creates one [`Binder`] per flag
//! or argument, asks it for a typed destination, and later feeds every matching
//! token to the attached [`Value`].
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`Destination`, `ConversionError`, `BindError`)
//! - **Ports**: Trait definitions that define interfaces (`Value`, `Settings`)
//! - **Adapters**: The built-in values (string, list, map, bool, numbers,
//!   duration, IP address, URL, existing paths, open files)
//! - **Service**: The `Binder` factory surface
//!
//! # Feature Flags
//!
//! - `duration`: Enable the duration value via `humantime` (default)
//! - `url`: Enable the URL value via `url` (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use flagbind::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let mut port = Binder::new();
//! let port_value = port.uint64()?;
//!
//! let mut labels = Binder::new();
//! let label_map = labels.string_map()?;
//!
//! // An engine drives the binders as it walks the command line.
//! port.absorb("8080")?;
//! labels.absorb("env=prod")?;
//! labels.absorb("tier=web")?;
//!
//! assert_eq!(port_value.get(), 8080);
//! assert_eq!(label_map.borrow().len(), 2);
//! assert!(port.absorb("-1").is_err());
//! assert_eq!(port_value.get(), 8080);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::Destination;
pub use ports::Value;
pub use service::Binder;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        BindError, BindResult, ConversionError, Destination, ErrorKind, Result,
    };
    pub use crate::ports::{Settings, Value};
    pub use crate::service::Binder;
}
