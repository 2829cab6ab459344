//! Validated scheme parameters for threshold secret sharing
//!
//! - [`Threshold`] - Minimum shards required for reconstruction (2..=255)
//! - [`ShareCount`] - Total number of shards to create (1..=254)
//! - [`SplitConfig`] - Validated threshold and share count pair
//!
//! Every constructor fails with [`crate::Error::InvalidScheme`].

mod config;
mod share_count;
mod threshold;

pub use config::SplitConfig;
pub use share_count::ShareCount;
pub use threshold::Threshold;
