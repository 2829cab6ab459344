//! Configuration validation for Shamir Secret Sharing splits

use crate::error::{Error, Result};

use super::{ShareCount, Threshold};

/// Validated pair of threshold and share count
///
/// Enforces the invariant that threshold <= `share_count` at the type level.
/// This prevents creating configurations where more shards are required
/// than actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl SplitConfig {
    /// Creates a new split configuration
    ///
    /// # Errors
    /// Returns [`Error::InvalidScheme`] if threshold exceeds share count
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shardphrase::domain::{SplitConfig, Threshold, ShareCount};
    ///
    /// let config = SplitConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap()
    /// ).unwrap();
    ///
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    ///
    /// let result = SplitConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap()
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            return Err(Error::InvalidScheme(format!(
                "Threshold {} cannot exceed share count {}",
                *threshold, *share_count
            )));
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    /// Parses the `N M` pair as typed on the command line
    ///
    /// # Errors
    /// Returns [`Error::InvalidScheme`] if either value is not a number in range, or
    /// if `threshold` exceeds `share_count`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shardphrase::domain::SplitConfig;
    ///
    /// let config = SplitConfig::parse("3", "5").unwrap();
    /// assert_eq!(*config.threshold(), 3);
    ///
    /// assert!(SplitConfig::parse("5", "3").is_err());
    /// assert!(SplitConfig::parse("x", "3").is_err());
    /// ```
    pub fn parse(threshold: &str, share_count: &str) -> Result<Self> {
        Self::new(threshold.parse()?, share_count.parse()?)
    }

    /// Gets the threshold value
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Gets the share count value
    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
