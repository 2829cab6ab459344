//! Shard mnemonics: one share encoded as a run of 15-word BIP39 groups
//!
//! Each share is framed into 20-byte chunks by [`crate::chunk`], and each chunk is
//! turned into a standard 15-word BIP39 mnemonic. The groups are joined with single
//! spaces to form one shard mnemonic. Because every group carries its own BIP39
//! checksum, a mistranscribed word is caught when the shard is decoded rather than
//! when the secret is recovered.
//!
//! # Examples
//!
//! ```rust
//! use shardphrase::shard::{decode_shard, encode_shard};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let share = vec![0x01; 17];
//! let shard = encode_shard(&share)?;
//! assert_eq!(shard.word_count(), 15);
//!
//! let decoded = decode_shard(shard.as_str())?;
//! assert_eq!(share, *decoded);
//! # Ok(())
//! # }
//! ```

use bip39::{Language, Mnemonic};
use tracing::trace;
use zeroize::Zeroizing;

use crate::chunk::{self, Chunk};
use crate::error::{Error, Result};
use crate::report::ShardSummary;

/// Number of BIP39 words encoding one 20-byte chunk
pub const WORDS_PER_CHUNK: usize = 15;

/// A space-joined shard mnemonic
///
/// Wraps the mnemonic in `Zeroizing` to ensure secure memory cleanup.
#[derive(Debug, Clone, PartialEq)]
pub struct ShardMnemonic(Zeroizing<String>);

impl ShardMnemonic {
    /// Gets the mnemonic as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of words in the mnemonic, always a multiple of [`WORDS_PER_CHUNK`]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    /// Number of 15-word chunk groups
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.word_count() / WORDS_PER_CHUNK
    }
}

impl std::fmt::Display for ShardMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &*self.0)
    }
}

/// Encodes one share as a shard mnemonic
///
/// Produces `15 * ceil(share.len() / 19)` words.
///
/// # Errors
/// Returns [`Error::MnemonicEncoding`] if BIP39 rejects a chunk, which cannot happen
/// for well-formed 20-byte frames
pub fn encode_shard(share: &[u8]) -> Result<ShardMnemonic> {
    let chunks = chunk::encode(share);
    let mut groups = Vec::with_capacity(chunks.len());

    for chunk in &chunks {
        let mnemonic = Mnemonic::from_entropy_in(Language::English, &*chunk.to_bytes())
            .map_err(Error::MnemonicEncoding)?;
        groups.push(Zeroizing::new(mnemonic.to_string()));
    }

    trace!(
        share_len = share.len(),
        chunks = chunks.len(),
        "encoded share"
    );

    let joined = groups
        .iter()
        .map(|group| group.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(ShardMnemonic(Zeroizing::new(joined)))
}

/// Splits a shard mnemonic into chunks, validating every BIP39 checksum
///
/// Words are matched case-insensitively and may be separated by any whitespace.
///
/// # Errors
/// Returns [`Error::MalformedShard`] if the word count is not a positive multiple of
/// 15 (checked before any word lookup), [`Error::InvalidMnemonic`] if a group has an
/// unknown word or a bad checksum, or [`Error::Framing`] if a group's length byte is
/// out of range
pub fn parse_chunks(shard: &str) -> Result<Vec<Chunk>> {
    let words: Vec<Zeroizing<String>> = shard
        .split_whitespace()
        .map(|word| Zeroizing::new(word.to_lowercase()))
        .collect();

    if words.is_empty() || words.len() % WORDS_PER_CHUNK != 0 {
        return Err(Error::MalformedShard { words: words.len() });
    }

    let group_count = words.len() / WORDS_PER_CHUNK;
    words
        .chunks(WORDS_PER_CHUNK)
        .enumerate()
        .map(|(idx, group)| {
            let phrase = Zeroizing::new(
                group
                    .iter()
                    .map(|word| word.as_str())
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            let mnemonic = Mnemonic::parse_in(Language::English, phrase.as_str()).map_err(
                |source| Error::InvalidMnemonic {
                    context: format!("chunk {}/{group_count}", idx + 1),
                    source,
                },
            )?;
            let entropy = Zeroizing::new(mnemonic.to_entropy());
            Chunk::from_bytes(&entropy)
        })
        .collect()
}

/// Decodes a shard mnemonic back to the share bytes it encodes
///
/// # Errors
/// See [`parse_chunks`]
pub fn decode_shard(shard: &str) -> Result<Zeroizing<Vec<u8>>> {
    let chunks = parse_chunks(shard)?;
    let share = chunk::decode(&chunks);
    trace!(share_len = share.len(), chunks = chunks.len(), "decoded shard");
    Ok(share)
}

/// Decodes a shard and describes it without revealing its payload
///
/// # Errors
/// See [`parse_chunks`]
pub fn inspect_shard(shard: &str) -> Result<ShardSummary> {
    let chunks = parse_chunks(shard)?;
    let share = chunk::decode(&chunks);
    Ok(ShardSummary {
        words: chunks.len() * WORDS_PER_CHUNK,
        chunks: chunks.len(),
        share_len: share.len(),
        share_x: share.first().copied(),
    })
}
