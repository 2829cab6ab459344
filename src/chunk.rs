//! Fixed-size, self-describing framing for arbitrary-length share data
//!
//! BIP39 only accepts entropy of 16, 20, 24, 28 or 32 bytes, while a share can be any
//! length. Shares are therefore cut into 20-byte chunks (160 bits, one 15-word
//! mnemonic each). A chunk carries at most 19 payload bytes, zero padding up to byte
//! 19, and a trailing length byte recording how many leading bytes are payload:
//!
//! ```text
//! | payload (L bytes) | 0x00 * (19 - L) | L |
//! ```
//!
//! ```rust
//! use shardphrase::chunk::{self, Chunk};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let share = [0xAB; 17];
//! let chunks = chunk::encode(&share);
//! assert_eq!(chunks.len(), 1);
//!
//! let framed = chunks[0].to_bytes();
//! assert_eq!(framed[19], 17);
//!
//! let parsed = Chunk::from_bytes(&*framed)?;
//! assert_eq!(*chunk::decode(&[parsed]), share);
//! # Ok(())
//! # }
//! ```

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

/// Size of one framed chunk in bytes
pub const CHUNK_LEN: usize = 20;

/// Maximum number of payload bytes a chunk can carry
pub const PAYLOAD_LEN: usize = CHUNK_LEN - 1;

/// One framed unit of share data
///
/// Invariant: `len <= PAYLOAD_LEN` and every byte of `payload` past `len` is zero.
/// Both are enforced by the constructors, so [`Chunk::to_bytes`] always produces a
/// valid frame.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Chunk {
    payload: [u8; PAYLOAD_LEN],
    len: u8,
}

impl Chunk {
    /// Creates a chunk holding `payload`
    ///
    /// # Errors
    /// Returns [`Error::PayloadSize`] if `payload` is longer than [`PAYLOAD_LEN`]
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        if payload.len() > PAYLOAD_LEN {
            return Err(Error::PayloadSize(payload.len()));
        }

        #[allow(
            clippy::cast_possible_truncation,
            reason = "payload.len() <= PAYLOAD_LEN checked above"
        )]
        let len = payload.len() as u8;

        let mut buf = [0u8; PAYLOAD_LEN];
        buf[..payload.len()].copy_from_slice(payload);
        Ok(Self { payload: buf, len })
    }

    /// Parses a 20-byte frame
    ///
    /// Padding bytes are not required to be zero; only the length byte is trusted.
    ///
    /// # Errors
    /// Returns [`Error::ChunkSize`] if `bytes` is not exactly [`CHUNK_LEN`] long, or
    /// [`Error::Framing`] if the trailing length byte exceeds [`PAYLOAD_LEN`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != CHUNK_LEN {
            return Err(Error::ChunkSize(bytes.len()));
        }

        let len = bytes[PAYLOAD_LEN];
        if usize::from(len) > PAYLOAD_LEN {
            return Err(Error::Framing(len));
        }
        Self::from_payload(&bytes[..usize::from(len)])
    }

    /// Serializes the chunk as `payload ‖ zero padding ‖ length`
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<[u8; CHUNK_LEN]> {
        let mut frame = Zeroizing::new([0u8; CHUNK_LEN]);
        frame[..PAYLOAD_LEN].copy_from_slice(&self.payload);
        frame[PAYLOAD_LEN] = self.len;
        frame
    }

    /// The meaningful bytes of this chunk, padding excluded
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload[..usize::from(self.len)]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Splits `data` into chunks of at most [`PAYLOAD_LEN`] bytes, in order
///
/// Produces `ceil(data.len() / 19)` chunks; empty input produces none.
#[must_use]
pub fn encode(data: &[u8]) -> Vec<Chunk> {
    data.chunks(PAYLOAD_LEN)
        .map(|payload| {
            Chunk::from_payload(payload)
                .unwrap_or_else(|_| unreachable!("chunks() yields at most PAYLOAD_LEN bytes"))
        })
        .collect()
}

/// Concatenates the payloads of `chunks`, in order
///
/// Exact left inverse of [`encode`].
#[must_use]
pub fn decode(chunks: &[Chunk]) -> Zeroizing<Vec<u8>> {
    let total = chunks.iter().map(Chunk::len).sum();
    let mut data = Zeroizing::new(Vec::with_capacity(total));
    for chunk in chunks {
        data.extend_from_slice(chunk.payload());
    }
    data
}
