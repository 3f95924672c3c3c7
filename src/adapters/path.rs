// SPDX-License-Identifier: MIT OR Apache-2.0

//! Existing file and directory values.
//!
//! These values stat the path named by a token and store it unchanged if it
//! exists and is the right kind of entry.

use crate::domain::{ConversionError, Destination, Result};
use crate::ports::Value;
use std::fs::{self, Metadata};

/// The kind of filesystem entry an [`ExistingPathValue`] requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathKind {
    /// Anything that is not a directory.
    File,
    /// A directory.
    Dir,
}

impl PathKind {
    fn matches(self, metadata: &Metadata) -> bool {
        match self {
            PathKind::File => !metadata.is_dir(),
            PathKind::Dir => metadata.is_dir(),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            PathKind::File => "a file",
            PathKind::Dir => "a directory",
        }
    }
}

/// A value that requires the token to name an existing file or directory.
///
/// # Examples
///
/// ```rust
/// use flagbind::adapters::ExistingPathValue;
/// use flagbind::domain::{Destination, ErrorKind};
/// use flagbind::ports::Value;
///
/// let dir = std::env::temp_dir();
/// let dir = dir.to_str().unwrap();
///
/// let dest = Destination::default();
/// let mut value = ExistingPathValue::dir(dest.clone());
/// value.absorb(dir).unwrap();
/// assert_eq!(dest.get(), dir);
///
/// let mut value = ExistingPathValue::file(Destination::default());
/// let err = value.absorb(dir).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::WrongPathKind);
/// ```
#[derive(Debug, Clone)]
pub struct ExistingPathValue {
    target: Destination<String>,
    kind: PathKind,
}

impl ExistingPathValue {
    /// Creates a value that requires `kind` of entry, writing into `target`.
    pub fn new(target: Destination<String>, kind: PathKind) -> Self {
        Self { target, kind }
    }

    /// Creates a value that requires an existing non-directory path.
    pub fn file(target: Destination<String>) -> Self {
        Self::new(target, PathKind::File)
    }

    /// Creates a value that requires an existing directory.
    pub fn dir(target: Destination<String>) -> Self {
        Self::new(target, PathKind::Dir)
    }

    /// Returns the kind of entry this value requires.
    pub fn kind(&self) -> PathKind {
        self.kind
    }
}

impl Value for ExistingPathValue {
    fn name(&self) -> &str {
        match self.kind {
            PathKind::File => "existing file",
            PathKind::Dir => "existing dir",
        }
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        let metadata = fs::metadata(token).map_err(|e| {
            tracing::debug!("Rejected path '{}': {}", token, e);
            ConversionError::PathNotFound {
                token: token.to_string(),
                source: e,
            }
        })?;

        if !self.kind.matches(&metadata) {
            tracing::debug!("Rejected path '{}': not {}", token, self.kind.expected());
            return Err(ConversionError::WrongPathKind {
                token: token.to_string(),
                expected: self.kind.expected(),
            });
        }

        self.target.set(token.to_string());
        Ok(())
    }

    fn render(&self) -> String {
        self.target.get()
    }
}
