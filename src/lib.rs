//! Back up a BIP39 secret phrase as N-of-M Shamir shards written in BIP39 words
//!
//! Split: mnemonic → entropy → shares → 20-byte framed chunks → 15-word groups.
//! Assemble runs the same pipeline backwards.

#[cfg(feature = "cli")]
pub mod cli;
pub mod chunk;
pub mod commands;
pub mod domain;
pub mod error;
pub mod report;
pub mod shard;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use commands::{assemble_shards, inspect_shards, split_mnemonic};
pub use error::{Error, Result};
pub use shard::ShardMnemonic;
