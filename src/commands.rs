use bip39::{Language, Mnemonic};
use blahaj::{Share, Sharks};
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::domain::{SplitConfig, Threshold};
use crate::error::{Error, Result};
use crate::report::ShardSummary;
use crate::shard::{self, ShardMnemonic};

/// Split a mnemonic into Shamir Secret Shares encoded as shard mnemonics
///
/// Returns one shard mnemonic per share, in the order the dealer produced them.
///
/// # Errors
/// Returns [`Error::InvalidMnemonic`] if the secret does not parse, or
/// [`Error::Sharing`] / [`Error::MnemonicEncoding`] if a share cannot be produced or
/// encoded. No shards are returned unless all of them succeeded.
pub fn split_mnemonic(mnemonic_str: &str, config: SplitConfig) -> Result<Vec<ShardMnemonic>> {
    let normalized = Zeroizing::new(mnemonic_str.to_lowercase());
    let mnemonic = Mnemonic::parse_in(Language::English, normalized.as_str()).map_err(
        |source| Error::InvalidMnemonic {
            context: "secret".to_string(),
            source,
        },
    )?;

    let entropy = Zeroizing::new(mnemonic.to_entropy());

    let threshold = config.threshold();
    let num_shares = *config.share_count();

    info!(
        threshold = *threshold,
        shares = num_shares,
        words = mnemonic.word_count(),
        "splitting secret"
    );

    let sharks = Sharks(*threshold);
    let dealer = sharks.dealer(&entropy);
    let share_vec: Vec<Share> = dealer.take(usize::from(num_shares)).collect();

    if share_vec.len() != usize::from(num_shares) {
        return Err(Error::Sharing(format!(
            "Dealer produced {} shares, expected {num_shares}",
            share_vec.len()
        )));
    }

    let mut share_mnemonics = Vec::with_capacity(share_vec.len());
    for share in &share_vec {
        let share_bytes = Zeroizing::new(Vec::from(share));
        share_mnemonics.push(shard::encode_shard(&share_bytes)?);
    }

    debug!(
        shards = share_mnemonics.len(),
        words_per_shard = share_mnemonics.first().map_or(0, ShardMnemonic::word_count),
        "encoded shards"
    );

    Ok(share_mnemonics)
}

/// Combine shard mnemonics to reconstruct the original mnemonic
///
/// Lines are consumed in order up to the first blank line, which ends the input.
/// A line holding only whitespace counts as blank, so trailing spaces left by a
/// terminal or editor still end the input. Byte-identical duplicate shards are collapsed.
///
/// When `threshold` is known, fewer distinct shards than required fail with
/// [`Error::InsufficientShares`]. Without it at least [`Threshold::MIN`] distinct
/// shards are still required, and every supplied shard is interpolated; too few
/// shards above that minimum yield a wrong secret that cannot be told apart from
/// the right one.
///
/// # Errors
/// Returns [`Error::NoShares`] for empty input, [`Error::Shard`] naming the 1-based
/// line whose shard failed to decode, [`Error::InconsistentShares`] for shards of
/// different lengths or conflicting x-coordinates, [`Error::Sharing`] if
/// interpolation fails, or [`Error::EntropyLength`] if the result is not a valid
/// mnemonic entropy length
pub fn assemble_shards<I, S>(lines: I, threshold: Option<Threshold>) -> Result<Zeroizing<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut decoded: Vec<Zeroizing<Vec<u8>>> = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            break;
        }

        let share = shard::decode_shard(line).map_err(|source| Error::Shard {
            index: idx + 1,
            source: Box::new(source),
        })?;

        if decoded.iter().any(|seen| **seen == *share) {
            debug!(shard = idx + 1, "skipping duplicate shard");
            continue;
        }
        decoded.push(share);
    }

    if decoded.is_empty() {
        return Err(Error::NoShares);
    }

    check_consistency(&decoded)?;

    let required = match threshold {
        Some(t) => {
            let required = usize::from(*t);
            if decoded.len() < required {
                return Err(Error::InsufficientShares {
                    provided: decoded.len(),
                    required,
                });
            }
            *t
        }
        None => {
            // No split ever uses fewer than two shards
            let minimum = usize::from(Threshold::MIN);
            if decoded.len() < minimum {
                return Err(Error::InsufficientShares {
                    provided: decoded.len(),
                    required: minimum,
                });
            }
            warn!(
                shards = decoded.len(),
                "no threshold given; too few shards would go undetected"
            );
            u8::try_from(decoded.len()).map_err(|_| {
                Error::InconsistentShares(format!(
                    "{} distinct shards exceed the 255 possible x-coordinates",
                    decoded.len()
                ))
            })?
        }
    };

    let shares = decoded
        .iter()
        .map(|bytes| {
            Share::try_from(bytes.as_slice())
                .map_err(|e| Error::Sharing(format!("Failed to create share from data: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    info!(shards = shares.len(), threshold = required, "combining shards");

    let recovered = Zeroizing::new(
        Sharks(required)
            .recover(&shares)
            .map_err(|e| Error::Sharing(format!("Failed to recover secret: {e}")))?,
    );

    let mnemonic = Mnemonic::from_entropy_in(Language::English, &recovered).map_err(|source| {
        Error::EntropyLength {
            length: recovered.len(),
            source,
        }
    })?;

    Ok(Zeroizing::new(mnemonic.to_string()))
}

/// Decode each shard line without combining, for transcription checks
///
/// Stops at the first blank line like [`assemble_shards`].
///
/// # Errors
/// Returns [`Error::NoShares`] for empty input or [`Error::Shard`] for the first
/// shard that fails to decode
pub fn inspect_shards<I, S>(lines: I) -> Result<Vec<ShardSummary>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let summaries = lines
        .into_iter()
        .take_while(|line| !line.as_ref().trim().is_empty())
        .enumerate()
        .map(|(idx, line)| {
            shard::inspect_shard(line.as_ref()).map_err(|source| Error::Shard {
                index: idx + 1,
                source: Box::new(source),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if summaries.is_empty() {
        return Err(Error::NoShares);
    }
    Ok(summaries)
}

/// Rejects share sets that cannot belong to the same split
fn check_consistency(shares: &[Zeroizing<Vec<u8>>]) -> Result<()> {
    let Some(expected) = shares.first().map(|share| share.len()) else {
        return Ok(());
    };
    for (idx, share) in shares.iter().enumerate() {
        if share.len() != expected {
            return Err(Error::InconsistentShares(format!(
                "shard lengths differ: {expected} bytes vs {} bytes (distinct shard #{})",
                share.len(),
                idx + 1
            )));
        }
    }

    for (idx, share) in shares.iter().enumerate() {
        let x = share.first();
        if shares[..idx].iter().any(|other| other.first() == x) {
            return Err(Error::InconsistentShares(format!(
                "two different shards share x-coordinate {}",
                x.copied().unwrap_or_default()
            )));
        }
    }

    Ok(())
}
