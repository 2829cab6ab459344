use clap::{ArgAction, Parser, Subcommand};

use crate::domain::Threshold;

/// Parses a `--threshold` value through [`Threshold`]
fn validate_threshold(s: &str) -> Result<Threshold, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

#[derive(Parser)]
#[command(name = "shardphrase")]
#[command(
    about = "Split a BIP39 secret phrase into N-of-M Shamir shards, each written as BIP39 words"
)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret phrase read from stdin into M shards, any N of which recover it
    ///
    /// The phrase is decoded to its entropy and split with Shamir secret sharing.
    /// Each shard is cut into 20-byte chunks whose last byte is the chunk length,
    /// and every chunk is written as 15 BIP39 words. A 12-word phrase gives 15-word
    /// shards; a 24-word phrase gives 30-word shards.
    Split {
        /// Threshold N: minimum number of shards needed to reconstruct (must be >= 2)
        #[arg(value_name = "N")]
        threshold: String,

        /// Total number of shards M to create
        #[arg(value_name = "M")]
        shares: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Reassemble the secret phrase from shards read from stdin, one per line
    ///
    /// Input ends at the first blank line or end of stream.
    #[command(alias = "combine")]
    Assemble {
        /// Threshold used when splitting; without it, too few shards are not detected
        #[arg(short, long, value_parser = validate_threshold)]
        threshold: Option<Threshold>,
    },
    /// Check that shards read from stdin decode, without reassembling the secret
    Inspect {
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
