//! `ShareCount` newtype for Shamir Secret Sharing

use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of shards to create (1..=254)
///
/// The maximum is 254 due to GF256 limitations in the blahaj crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u8);

impl ShareCount {
    /// Minimum valid share count
    pub const MIN: u8 = 1;

    /// Maximum valid share count (254)
    pub const MAX: u8 = 254;

    /// Creates a new share count
    ///
    /// # Errors
    /// Returns [`Error::InvalidScheme`] if count is 0 or 255
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shardphrase::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// let max_count = ShareCount::new(ShareCount::MAX).unwrap();
    /// assert_eq!(*max_count, 254);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// assert!(ShareCount::new(255).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self> {
        if value < Self::MIN {
            return Err(Error::InvalidScheme(
                "Share count must be at least 1".to_string(),
            ));
        }
        if value > Self::MAX {
            return Err(Error::InvalidScheme(format!(
                "Share count maximum is {} due to GF256 limitations",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }
}

impl FromStr for ShareCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidScheme(format!("'{s}' is not a valid share count")))?;
        Self::new(value)
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
