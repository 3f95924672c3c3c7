// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the value-conversion layer.
//!
//! This module defines the errors returned when a token cannot be converted into
//! its destination type and when a binder is misused. All errors use `thiserror`
//! for proper error handling and conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::AddrParseError;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The error returned when a token cannot be absorbed by a value.
///
/// Every variant carries the offending token, and the rendered message names
/// both the token and the shape that was expected, so a command-line engine can
/// surface it verbatim. It is marked as `#[non_exhaustive]` to allow for future
/// additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use flagbind::domain::errors::{ConversionError, ErrorKind};
///
/// let error = ConversionError::MalformedKeyValue {
///     token: "malformed".to_string(),
/// };
/// assert_eq!(error.kind(), ErrorKind::MalformedKeyValue);
/// assert_eq!(error.to_string(), "expected KEY=VALUE, got 'malformed'");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// A key/value token did not contain a `=` separator.
    #[error("expected KEY=VALUE, got '{token}'")]
    MalformedKeyValue {
        /// The offending token
        token: String,
    },

    /// A token was not a recognised boolean literal.
    #[error("expected a boolean (1/0, t/f, true/false), got '{token}'")]
    InvalidBoolean {
        /// The offending token
        token: String,
    },

    /// A token was not a valid number for the destination type.
    #[error("expected {expected}, got '{token}': {source}")]
    InvalidNumber {
        /// The offending token
        token: String,
        /// Description of the expected number shape
        expected: &'static str,
        /// The underlying parse error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A token was not a valid duration expression.
    #[error("expected a duration such as '1h30m', got '{token}': {source}")]
    InvalidDuration {
        /// The offending token
        token: String,
        /// The underlying parse error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A token was not a valid IPv4 or IPv6 address.
    #[error("expected an IP address, got '{token}': {source}")]
    InvalidAddress {
        /// The offending token
        token: String,
        /// The underlying parse error
        source: AddrParseError,
    },

    /// A token was not a valid URL.
    #[error("expected a URL, got '{token}': {source}")]
    InvalidUrl {
        /// The offending token
        token: String,
        /// The underlying parse error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The path named by a token could not be stat'ed.
    #[error("path '{token}' does not exist: {source}")]
    PathNotFound {
        /// The offending token
        token: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The path named by a token exists but is the wrong kind of entry.
    #[error("path '{token}' exists but is not {expected}")]
    WrongPathKind {
        /// The offending token
        token: String,
        /// Description of the required kind of entry
        expected: &'static str,
    },

    /// The file named by a token could not be opened.
    #[error("failed to open '{token}': {source}")]
    OpenFailed {
        /// The offending token
        token: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// A token was handed to a binder that has no value attached.
    #[error("cannot absorb '{token}': no value is bound")]
    Unbound {
        /// The offending token
        token: String,
    },
}

impl ConversionError {
    /// Creates an `InvalidNumber` error from a `ParseIntError`.
    pub fn from_parse_int_error(token: &str, expected: &'static str, err: ParseIntError) -> Self {
        ConversionError::InvalidNumber {
            token: token.to_string(),
            expected,
            source: Box::new(err),
        }
    }

    /// Creates an `InvalidNumber` error from a `ParseFloatError`.
    pub fn from_parse_float_error(token: &str, err: ParseFloatError) -> Self {
        ConversionError::InvalidNumber {
            token: token.to_string(),
            expected: "a floating point number",
            source: Box::new(err),
        }
    }

    /// Returns the kind tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::MalformedKeyValue { .. } => ErrorKind::MalformedKeyValue,
            ConversionError::InvalidBoolean { .. } => ErrorKind::InvalidBoolean,
            ConversionError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            ConversionError::InvalidDuration { .. } => ErrorKind::InvalidDuration,
            ConversionError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            ConversionError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            ConversionError::PathNotFound { .. } => ErrorKind::PathNotFound,
            ConversionError::WrongPathKind { .. } => ErrorKind::WrongPathKind,
            ConversionError::OpenFailed { .. } => ErrorKind::OpenFailed,
            ConversionError::Unbound { .. } => ErrorKind::Unbound,
        }
    }

    /// Returns the token that failed to convert.
    pub fn token(&self) -> &str {
        match self {
            ConversionError::MalformedKeyValue { token }
            | ConversionError::InvalidBoolean { token }
            | ConversionError::InvalidNumber { token, .. }
            | ConversionError::InvalidDuration { token, .. }
            | ConversionError::InvalidAddress { token, .. }
            | ConversionError::InvalidUrl { token, .. }
            | ConversionError::PathNotFound { token, .. }
            | ConversionError::WrongPathKind { token, .. }
            | ConversionError::OpenFailed { token, .. }
            | ConversionError::Unbound { token } => token,
        }
    }
}

/// A plain tag identifying the kind of a [`ConversionError`].
///
/// Engines that collect errors for structured reporting can match on or
/// serialize this instead of the full error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`ConversionError::MalformedKeyValue`].
    MalformedKeyValue,
    /// See [`ConversionError::InvalidBoolean`].
    InvalidBoolean,
    /// See [`ConversionError::InvalidNumber`].
    InvalidNumber,
    /// See [`ConversionError::InvalidDuration`].
    InvalidDuration,
    /// See [`ConversionError::InvalidAddress`].
    InvalidAddress,
    /// See [`ConversionError::InvalidUrl`].
    InvalidUrl,
    /// See [`ConversionError::PathNotFound`].
    PathNotFound,
    /// See [`ConversionError::WrongPathKind`].
    WrongPathKind,
    /// See [`ConversionError::OpenFailed`].
    OpenFailed,
    /// See [`ConversionError::Unbound`].
    Unbound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The error returned when a binder is asked to attach a second value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    /// The binder already has a value attached.
    #[error("cannot bind a {requested} value: already bound to a {bound} value")]
    AlreadyBound {
        /// Name of the value that is already attached
        bound: String,
        /// Name of the value that was rejected
        requested: String,
    },
}

/// A specialized Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// A specialized Result type for binding operations.
pub type BindResult<T> = std::result::Result<T, BindError>;
