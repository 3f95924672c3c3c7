// SPDX-License-Identifier: MIT OR Apache-2.0

//! Duration value backed by `humantime`.

use crate::domain::{ConversionError, Destination, Result};
use crate::ports::Value;
use std::time::Duration;

/// A value that parses compound duration expressions such as `1h30m` or
/// `2m 15s`.
///
/// Parsing and rendering use `humantime`, so the rendered form (for example
/// `1h 30m`) is accepted by `absorb`.
///
/// # Examples
///
/// ```rust
/// use flagbind::adapters::DurationValue;
/// use flagbind::domain::Destination;
/// use flagbind::ports::Value;
/// use std::time::Duration;
///
/// let dest = Destination::default();
/// let mut value = DurationValue::new(dest.clone());
/// value.absorb("1h30m").unwrap();
/// assert_eq!(dest.get(), Duration::from_secs(5400));
/// assert_eq!(value.render(), "1h 30m");
/// ```
#[derive(Debug, Clone)]
pub struct DurationValue {
    target: Destination<Duration>,
}

impl DurationValue {
    /// Creates a new duration value writing into `target`.
    pub fn new(target: Destination<Duration>) -> Self {
        Self { target }
    }
}

impl Value for DurationValue {
    fn name(&self) -> &str {
        "duration"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        let parsed =
            humantime::parse_duration(token).map_err(|e| ConversionError::InvalidDuration {
                token: token.to_string(),
                source: Box::new(e),
            })?;
        self.target.set(parsed);
        Ok(())
    }

    fn render(&self) -> String {
        humantime::format_duration(self.target.get()).to_string()
    }
}
