use std::io::{self, BufRead, Read};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use shardphrase::cli::{Cli, Commands};
use shardphrase::domain::SplitConfig;
use shardphrase::report::SplitReport;
use shardphrase::{assemble_shards, inspect_shards, split_mnemonic};

/// Route logs to stderr so stdout only ever carries shards or the recovered phrase
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read a mnemonic securely from stdin (hidden input when TTY available)
fn read_mnemonic() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter secret phrase:");
        let mnemonic =
            rpassword::read_password().context("Failed to read secret phrase from stdin")?;
        Ok(Zeroizing::new(mnemonic))
    } else {
        // Piped input: the whole stream is the phrase
        let mut mnemonic = Zeroizing::new(String::new());
        io::stdin()
            .lock()
            .read_to_string(&mut mnemonic)
            .context("Failed to read secret phrase from stdin")?;
        Ok(mnemonic)
    }
}

/// Read shards securely from stdin (hidden input when TTY available)
/// User should input shards one per line, followed by an empty line to finish.
/// Whitespace-only lines also finish, matching `assemble_shards`.
fn read_shards() -> Result<Vec<Zeroizing<String>>> {
    let mut shards = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shards (one per line, empty line to finish):");

        loop {
            let shard = Zeroizing::new(
                rpassword::read_password().context("Failed to read shard from stdin")?,
            );
            if shard.trim().is_empty() {
                break;
            }
            shards.push(shard);
        }
    } else {
        for line in io::stdin().lock().lines() {
            let line = Zeroizing::new(line.context("Failed to read line from stdin")?);
            if line.trim().is_empty() {
                break;
            }
            shards.push(line);
        }
    }

    Ok(shards)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Split {
            threshold,
            shares,
            json,
        } => {
            let config = SplitConfig::parse(&threshold, &shares)?;
            let mnemonic = read_mnemonic()?;

            let shards = split_mnemonic(&mnemonic, config).context("Failed to split secret")?;

            if json {
                let report = SplitReport::new(config, &shards);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for shard in &shards {
                    println!("{shard}");
                }
            }
        }
        Commands::Assemble { threshold } => {
            let shards = read_shards()?;
            let mnemonic = assemble_shards(shards.iter().map(|s| s.as_str()), threshold)
                .context("Failed to assemble secret")?;
            println!("{}", mnemonic.as_str());
        }
        Commands::Inspect { json } => {
            let shards = read_shards()?;
            let summaries = inspect_shards(shards.iter().map(|s| s.as_str()))
                .context("Failed to inspect shards")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else {
                for (idx, summary) in summaries.iter().enumerate() {
                    println!("Shard #{}: {summary}", idx + 1);
                }
            }
        }
    }

    Ok(())
}
