//! Property tests for chunk framing and shard encoding

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shardphrase::chunk::{self, CHUNK_LEN, Chunk, PAYLOAD_LEN};
use shardphrase::shard::{self, WORDS_PER_CHUNK};
use shardphrase::Error;

/// Wrapper for arbitrary byte vectors
#[derive(Clone, Debug)]
struct ByteVec(Vec<u8>);

impl Arbitrary for ByteVec {
    fn arbitrary(g: &mut Gen) -> Self {
        ByteVec(Vec::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(ByteVec))
    }
}

/// Decoding the encoded chunks returns exactly the input, including empty input
#[quickcheck]
fn prop_chunk_round_trip(data: ByteVec) -> bool {
    let ByteVec(bytes) = data;
    *chunk::decode(&chunk::encode(&bytes)) == bytes
}

/// Round trip also holds through the 20-byte wire frames
#[quickcheck]
fn prop_chunk_round_trip_through_frames(data: ByteVec) -> bool {
    let ByteVec(bytes) = data;
    let parsed: Result<Vec<Chunk>, _> = chunk::encode(&bytes)
        .iter()
        .map(|c| Chunk::from_bytes(&*c.to_bytes()))
        .collect();
    parsed.is_ok_and(|chunks| *chunk::decode(&chunks) == bytes)
}

/// Chunk count is ceil(len / 19)
#[quickcheck]
fn prop_chunk_count(data: ByteVec) -> bool {
    let ByteVec(bytes) = data;
    chunk::encode(&bytes).len() == bytes.len().div_ceil(PAYLOAD_LEN)
}

/// Every frame's trailing byte is in 0..=19 and padding is zero
#[quickcheck]
fn prop_length_byte_bound(data: ByteVec) -> bool {
    let ByteVec(bytes) = data;
    chunk::encode(&bytes).iter().all(|c| {
        let frame = c.to_bytes();
        let len = usize::from(frame[PAYLOAD_LEN]);
        len <= PAYLOAD_LEN && frame[len..PAYLOAD_LEN].iter().all(|&b| b == 0)
    })
}

/// Any trailing byte above 19 is a framing error
#[quickcheck]
fn prop_out_of_range_length_rejected(len: u8, fill: u8) -> bool {
    if usize::from(len) <= PAYLOAD_LEN {
        return true;
    }
    let mut frame = [fill; CHUNK_LEN];
    frame[PAYLOAD_LEN] = len;
    matches!(Chunk::from_bytes(&frame), Err(Error::Framing(l)) if l == len)
}

/// Shard encoding round trips and always yields 15 words per chunk
#[quickcheck]
fn prop_shard_round_trip(data: ByteVec) -> bool {
    let ByteVec(bytes) = data;
    let Ok(mnemonic) = shard::encode_shard(&bytes) else {
        return false;
    };

    if mnemonic.word_count() != WORDS_PER_CHUNK * bytes.len().div_ceil(PAYLOAD_LEN) {
        return false;
    }

    // The empty share encodes to no words, which the decoder treats as malformed
    if bytes.is_empty() {
        return mnemonic.as_str().is_empty();
    }

    shard::decode_shard(mnemonic.as_str()).is_ok_and(|decoded| *decoded == bytes)
}

/// Appending a stray word always breaks the multiple-of-15 rule
#[quickcheck]
fn prop_extra_word_is_malformed(data: ByteVec) -> bool {
    let ByteVec(bytes) = data;
    let Ok(mnemonic) = shard::encode_shard(&bytes) else {
        return false;
    };
    let padded = format!("{} abandon", mnemonic.as_str());
    matches!(
        shard::decode_shard(&padded),
        Err(Error::MalformedShard { words }) if words % WORDS_PER_CHUNK == 1
    )
}
