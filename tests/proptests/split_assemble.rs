//! Property tests for split/assemble workflows

use bip39::Mnemonic;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shardphrase::domain::{ShareCount, SplitConfig, Threshold};
use shardphrase::{Error, assemble_shards, split_mnemonic};

/// Wrapper for valid BIP39 mnemonics of every standard length
#[derive(Clone, Debug)]
struct ValidMnemonic(Mnemonic);

impl Arbitrary for ValidMnemonic {
    fn arbitrary(g: &mut Gen) -> Self {
        let entropy_size = *g.choose(&[16usize, 20, 24, 28, 32]).unwrap();

        let mut entropy = vec![0u8; entropy_size];
        for byte in &mut entropy {
            *byte = u8::arbitrary(g);
        }

        // Create mnemonic from entropy (this handles checksum automatically)
        let mnemonic = Mnemonic::from_entropy(&entropy).expect("Valid entropy");
        ValidMnemonic(mnemonic)
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidParams {
    threshold: u8,
    num_shares: u8,
}

impl ValidParams {
    fn config(self) -> SplitConfig {
        SplitConfig::new(
            Threshold::new(self.threshold).unwrap(),
            ShareCount::new(self.num_shares).unwrap(),
        )
        .unwrap()
    }
}

impl Arbitrary for ValidParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Share count between 2 and 12 keeps the suite fast
        let num_shares = (u8::arbitrary(g) % 11) + 2; // 2..=12
        let threshold = (u8::arbitrary(g) % (num_shares - 1)) + 2; // 2..=num_shares

        ValidParams {
            threshold,
            num_shares,
        }
    }
}

/// Deterministic shuffle of 0..n driven by a seed
fn shuffled(n: usize, seed: u64) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut state = seed;
    for i in (1..n).rev() {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let j = usize::try_from((state >> 33) % (i as u64 + 1)).unwrap();
        indices.swap(i, j);
    }
    indices
}

/// Any threshold-sized selection of shards reproduces the secret
#[quickcheck]
fn prop_split_assemble_round_trip(
    mnemonic: ValidMnemonic,
    params: ValidParams,
    selection_seed: u64,
) -> bool {
    let ValidMnemonic(inner) = mnemonic;
    let original = inner.to_string();

    let Ok(shards) = split_mnemonic(&original, params.config()) else {
        return false;
    };
    if shards.len() != usize::from(params.num_shares) {
        return false;
    }

    let selected: Vec<String> = shuffled(shards.len(), selection_seed)
        .into_iter()
        .take(usize::from(params.threshold))
        .map(|i| shards[i].to_string())
        .collect();

    let threshold = Threshold::new(params.threshold).ok();
    assemble_shards(&selected, threshold).is_ok_and(|recovered| *recovered == original)
}

/// Shard word count follows the secret length: 15 words per 19 share bytes
#[quickcheck]
fn prop_shard_word_count(mnemonic: ValidMnemonic, params: ValidParams) -> bool {
    let ValidMnemonic(inner) = mnemonic;
    let share_len = inner.to_entropy().len() + 1;
    let expected_words = 15 * share_len.div_ceil(19);

    let Ok(shards) = split_mnemonic(&inner.to_string(), params.config()) else {
        return false;
    };
    shards.iter().all(|s| s.word_count() == expected_words)
}

/// One shard short of the threshold is reported when the threshold is known
#[quickcheck]
fn prop_insufficient_shares_detected(mnemonic: ValidMnemonic, params: ValidParams) -> bool {
    let ValidMnemonic(inner) = mnemonic;
    let Ok(shards) = split_mnemonic(&inner.to_string(), params.config()) else {
        return false;
    };

    let short: Vec<String> = shards
        .iter()
        .take(usize::from(params.threshold) - 1)
        .map(ToString::to_string)
        .collect();

    let threshold = Threshold::new(params.threshold).ok();
    matches!(
        assemble_shards(&short, threshold),
        Err(Error::InsufficientShares { .. })
    )
}

/// Without the threshold, too few shards never silently yield the secret
#[quickcheck]
fn prop_insufficient_shares_never_reproduce_secret(
    mnemonic: ValidMnemonic,
    params: ValidParams,
) -> bool {
    let ValidMnemonic(inner) = mnemonic;
    let original = inner.to_string();
    let Ok(shards) = split_mnemonic(&original, params.config()) else {
        return false;
    };

    let short: Vec<String> = shards
        .iter()
        .take(usize::from(params.threshold) - 1)
        .map(ToString::to_string)
        .collect();

    match assemble_shards(&short, None) {
        Err(Error::InsufficientShares { provided, required }) => {
            provided == short.len() && required == usize::from(Threshold::MIN)
        }
        // A lone shard must always be refused outright
        _ if short.len() < usize::from(Threshold::MIN) => false,
        Err(_) => true,
        Ok(recovered) => *recovered != original,
    }
}

/// Threshold above share count is always an invalid scheme
#[quickcheck]
fn prop_threshold_above_share_count_rejected(threshold: u8, shares: u8) -> bool {
    if threshold <= shares || shares == 0 {
        return true;
    }
    matches!(
        SplitConfig::parse(&threshold.to_string(), &shares.to_string()),
        Err(Error::InvalidScheme(_))
    )
}
