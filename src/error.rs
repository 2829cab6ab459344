//! Error types for shard encoding, decoding and recovery

use thiserror::Error;

/// Result type alias for shardphrase operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a split or assemble can hit
///
/// All variants are fatal to the current invocation. Nothing in the library retries
/// or returns partial output.
#[derive(Error, Debug)]
pub enum Error {
    // ===== Scheme Errors =====
    #[error("Invalid scheme: {0}")]
    InvalidScheme(String),

    // ===== Mnemonic Errors =====
    #[error("Invalid mnemonic ({context}): {source}")]
    InvalidMnemonic {
        context: String,
        source: bip39::Error,
    },

    #[error("Failed to encode chunk as mnemonic: {0}")]
    MnemonicEncoding(#[source] bip39::Error),

    #[error("Recovered entropy of {length} bytes cannot be encoded as a mnemonic: {source}")]
    EntropyLength { length: usize, source: bip39::Error },

    // ===== Framing Errors =====
    #[error("Chunk length byte {0} exceeds maximum payload of 19 bytes")]
    Framing(u8),

    #[error("Chunk must be exactly 20 bytes, got {0}")]
    ChunkSize(usize),

    #[error("Chunk payload of {0} bytes exceeds maximum of 19 bytes")]
    PayloadSize(usize),

    #[error("Malformed shard: {words} words is not a positive multiple of 15")]
    MalformedShard { words: usize },

    #[error("Shard #{index}: {source}")]
    Shard {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    // ===== Sharing Errors =====
    #[error("No shards provided")]
    NoShares,

    #[error("Secret sharing failed: {0}")]
    Sharing(String),

    #[error("Insufficient shares: need at least {required}, but only {provided} provided")]
    InsufficientShares { provided: usize, required: usize },

    #[error("Inconsistent shares: {0}")]
    InconsistentShares(String),
}
