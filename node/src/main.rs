// Copyright (c) 2026 Linkchain Contributors. MIT License.
// See LICENSE for details.

//! # Linkchain CLI
//!
//! Entry point for the `linkchain` binary. Parses CLI arguments, initializes
//! logging, and drives the protocol library.
//!
//! The binary supports four subcommands:
//!
//! - `append`  — build a chain from payloads and print it as JSON
//! - `verify`  — audit a JSON chain dump
//! - `hash`    — compute one block digest
//! - `version` — print build version information
//!
//! Every run starts from an empty chain. Keeping a chain around between runs
//! is the caller's business: save the `append` output, feed it to `verify`.

mod cli;
mod logging;

use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use linkchain_protocol::storage::audit::verify_chain;
use linkchain_protocol::storage::block::Block;
use linkchain_protocol::storage::chain::Chain;

use cli::{Commands, LinkchainCli};

fn main() -> Result<()> {
    let cli = LinkchainCli::parse();
    logging::init_logging(&cli.log, cli.log_format);

    match cli.command {
        Commands::Append(args) => run_append(args),
        Commands::Verify(args) => run_verify(args),
        Commands::Hash(args) => {
            println!(
                "{}",
                Block::compute_hash(&args.prev_hash, args.height, &args.data)
            );
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Builds a fresh chain from the payloads and prints its snapshot.
fn run_append(args: cli::AppendArgs) -> Result<()> {
    let payloads = if args.stdin {
        collect_payloads(args.data, Some(io::stdin().lock()))?
    } else {
        collect_payloads(args.data, None::<io::Empty>)?
    };

    let chain = Chain::new();
    for data in payloads {
        chain.append(data);
    }

    let tip = chain.tip();
    tracing::info!(
        blocks = chain.len(),
        tip = tip.as_deref().map(Block::hash).unwrap_or(""),
        "chain built"
    );

    println!("{}", render_snapshot(&chain.snapshot(), args.compact)?);
    Ok(())
}

/// Audits a chain dump and prints a one-line summary.
///
/// An integrity failure is returned as an error so the process exits
/// non-zero.
fn run_verify(args: cli::VerifyArgs) -> Result<()> {
    let blocks = read_blocks(&args.file)?;
    tracing::info!(file = %args.file.display(), blocks = blocks.len(), "auditing chain dump");

    let report = verify_chain(&blocks)
        .with_context(|| format!("integrity audit failed for {}", args.file.display()))?;

    match report.tip {
        Some(tip) => println!("ok: {} blocks, tip {}", report.blocks, tip),
        None => println!("ok: empty chain"),
    }
    Ok(())
}

/// Positional payloads first, then one payload per line from `reader`.
///
/// Lines keep their content exactly, minus the line terminator; blank lines
/// become empty payloads.
fn collect_payloads<R: BufRead>(
    mut payloads: Vec<String>,
    reader: Option<R>,
) -> Result<Vec<String>> {
    if let Some(reader) = reader {
        for line in reader.lines() {
            payloads.push(line.context("failed to read payload from stdin")?);
        }
    }
    Ok(payloads)
}

/// Renders a snapshot as the JSON array accepted by `verify`.
fn render_snapshot(blocks: &[Arc<Block>], compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(blocks)
    } else {
        serde_json::to_string_pretty(blocks)
    };
    rendered.context("failed to serialize chain snapshot")
}

/// Reads a JSON array of blocks from `path`, or from stdin when `path` is `-`.
fn read_blocks(path: &Path) -> Result<Vec<Block>> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read chain dump from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read chain dump: {}", path.display()))?
    };

    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse chain dump: {}", path.display()))
}

/// Prints version information to stdout.
fn print_version() {
    println!("linkchain {}", env!("CARGO_PKG_VERSION"));
    println!("protocol  {}", linkchain_protocol::config::PROTOCOL_VERSION);
    println!("digest    {}", linkchain_protocol::config::DIGEST_ALGORITHM);
}
