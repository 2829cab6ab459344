//! Serializable results shared by the `--json` CLI output and the WASM bindings

use serde::{Deserialize, Serialize};

use crate::domain::SplitConfig;
use crate::shard::ShardMnemonic;

/// Result of a split operation (for JSON serialization)
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitReport {
    /// Minimum number of shards needed to reconstruct
    pub threshold: u8,
    /// Number of shards generated
    pub share_count: u8,
    /// The generated shard mnemonics, in dealer order
    pub shards: Vec<String>,
}

impl SplitReport {
    #[must_use]
    pub fn new(config: SplitConfig, shards: &[ShardMnemonic]) -> Self {
        Self {
            threshold: *config.threshold(),
            share_count: *config.share_count(),
            shards: shards.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Structural description of a decoded shard
///
/// Carries no share payload, only what a user needs to check a transcription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardSummary {
    pub words: usize,
    pub chunks: usize,
    /// Length of the decoded share, one more than the secret's entropy length
    pub share_len: usize,
    /// The share's x-coordinate (its first byte)
    pub share_x: Option<u8>,
}

impl std::fmt::Display for ShardSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} words, {} chunk(s), {}-byte share",
            self.words, self.chunks, self.share_len
        )?;
        if let Some(x) = self.share_x {
            write!(f, ", x={x}")?;
        }
        Ok(())
    }
}
