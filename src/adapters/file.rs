// SPDX-License-Identifier: MIT OR Apache-2.0

//! Open file value.

use crate::domain::{ConversionError, Destination, Result};
use crate::ports::Value;
use std::fs::File;

/// A value that opens the file named by the token for reading.
///
/// The open handle is stored in the destination, and the caller takes
/// ownership of it with [`Destination::take`]. This value never closes the
/// handle itself. If a second token is absorbed before the caller takes the
/// first handle, the first handle is replaced and dropped.
///
/// # Examples
///
/// ```rust,no_run
/// use flagbind::adapters::FileValue;
/// use flagbind::domain::Destination;
/// use flagbind::ports::Value;
/// use std::io::Read;
///
/// let dest = Destination::default();
/// let mut value = FileValue::new(dest.clone());
/// value.absorb("/etc/hosts").unwrap();
///
/// let mut contents = String::new();
/// if let Some(mut file) = dest.take() {
///     file.read_to_string(&mut contents).unwrap();
/// }
/// ```
#[derive(Debug)]
pub struct FileValue {
    target: Destination<Option<File>>,
    path: String,
}

impl FileValue {
    /// Creates a new file value writing into `target`.
    pub fn new(target: Destination<Option<File>>) -> Self {
        Self {
            target,
            path: String::new(),
        }
    }
}

impl Value for FileValue {
    fn name(&self) -> &str {
        "file"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        let file = File::open(token).map_err(|e| {
            tracing::debug!("Failed to open '{}': {}", token, e);
            ConversionError::OpenFailed {
                token: token.to_string(),
                source: e,
            }
        })?;
        tracing::debug!("Opened '{}'", token);
        self.target.set(Some(file));
        self.path = token.to_string();
        Ok(())
    }

    /// Renders the path of the last opened file.
    fn render(&self) -> String {
        self.path.clone()
    }
}
