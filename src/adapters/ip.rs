// SPDX-License-Identifier: MIT OR Apache-2.0

//! IP address value.

use crate::domain::{ConversionError, Destination, Result};
use crate::ports::Value;
use std::net::IpAddr;

/// A value that parses IPv4 dotted-quad or IPv6 colon-hex addresses.
///
/// The destination holds `None` until an address has been absorbed.
///
/// # Examples
///
/// ```rust
/// use flagbind::adapters::IpValue;
/// use flagbind::domain::Destination;
/// use flagbind::ports::Value;
/// use std::net::IpAddr;
///
/// let dest = Destination::default();
/// let mut value = IpValue::new(dest.clone());
/// value.absorb("::1").unwrap();
/// assert_eq!(dest.get(), Some("::1".parse::<IpAddr>().unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct IpValue {
    target: Destination<Option<IpAddr>>,
}

impl IpValue {
    /// Creates a new IP address value writing into `target`.
    pub fn new(target: Destination<Option<IpAddr>>) -> Self {
        Self { target }
    }
}

impl Value for IpValue {
    fn name(&self) -> &str {
        "ip"
    }

    fn absorb(&mut self, token: &str) -> Result<()> {
        let parsed = token
            .parse::<IpAddr>()
            .map_err(|e| ConversionError::InvalidAddress {
                token: token.to_string(),
                source: e,
            })?;
        self.target.set(Some(parsed));
        Ok(())
    }

    fn render(&self) -> String {
        self.target
            .get()
            .map(|addr| addr.to_string())
            .unwrap_or_default()
    }
}
