// SPDX-License-Identifier: MIT OR Apache-2.0

//! URL value backed by the `url` crate.

use crate::domain::{ConversionError, Destination, Result};
use crate::ports::Value;
use ::url::Url;

/// A value that parses absolute URLs.
///
/// The destination holds `None` until a URL has been absorbed.
///
/// # Examples
///
/// ```rust
/// use flagbind::adapters::UrlValue;
/// use flagbind::domain::Destination;
/// use flagbind::ports::Value;
///
/// let dest = Destination::default();
/// let mut value = UrlValue::new(dest.clone());
/// value.absorb("https://example.org/path").unwrap();
/// assert_eq!(dest.borrow().as_ref().map(|u| u.scheme()), Some("https"));
/// ```
#[derive(Debug, Clone)]
pub struct UrlValue {
    target: Destination<Option<Url>>,
}

impl UrlValue {
    /// Creates a new URL value writing into `target`.
    pub fn new(target: Destination<Option<Url>>) -> Self {
        Self { target }
    }
}

impl Value for UrlValue {
    fn name(&self) -> &str {
        "url"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        let parsed = Url::parse(token).map_err(|e| ConversionError::InvalidUrl {
            token: token.to_string(),
            source: Box::new(e),
        })?;
        self.target.set(Some(parsed));
        Ok(())
    }

    fn render(&self) -> String {
        self.target
            .with(|url| url.as_ref().map(|u| u.as_str().to_string()))
            .unwrap_or_default()
    }
}
