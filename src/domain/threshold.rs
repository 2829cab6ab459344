//! Threshold newtype for Shamir Secret Sharing

use std::str::FromStr;

use crate::error::{Error, Result};

/// Threshold for Shamir Secret Sharing (2..=255)
///
/// Invariant: threshold >= 2 (enforced at construction)
/// A threshold of 1 makes every shard a plain copy of the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Smallest threshold that still splits the secret
    pub const MIN: u8 = 2;

    /// Creates a new threshold, returning an error if value < 2
    ///
    /// # Errors
    /// Returns [`Error::InvalidScheme`] if the threshold is less than 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shardphrase::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(1).is_err());
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::InvalidScheme(format!(
                "Threshold must be at least {} (got {value})",
                Self::MIN
            )));
        }
        Ok(Self(value))
    }
}

impl FromStr for Threshold {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidScheme(format!("'{s}' is not a valid threshold")))?;
        Self::new(value)
    }
}

impl std::ops::Deref for Threshold {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
