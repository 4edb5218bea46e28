//! # CLI Interface
//!
//! Defines the command-line argument structure for `linkchain` using
//! `clap` derive. Supports four subcommands: `append`, `verify`, `hash`,
//! and `version`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Default filter when neither `RUST_LOG` nor `--log` is set.
pub const DEFAULT_LOG_FILTER: &str = "linkchain=info,linkchain_protocol=info";

/// Linkchain command-line driver.
///
/// Builds hash-linked chains from payloads, audits JSON chain dumps, and
/// computes individual block digests. Nothing is persisted between runs.
#[derive(Parser, Debug)]
#[command(
    name = "linkchain",
    about = "Build and audit append-only hash-linked chains",
    version,
    propagate_version = true
)]
pub struct LinkchainCli {
    /// Log filter directives in `tracing` EnvFilter syntax.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, global = true, env = "LINKCHAIN_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log: String,

    /// Log output format. Logs always go to stderr.
    #[arg(
        long,
        global = true,
        env = "LINKCHAIN_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the `linkchain` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a chain from the given payloads and print it as JSON.
    Append(AppendArgs),
    /// Audit a JSON chain dump for digest and linkage integrity.
    Verify(VerifyArgs),
    /// Compute the digest for a single set of block fields.
    Hash(HashArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `append` subcommand.
#[derive(Parser, Debug)]
pub struct AppendArgs {
    /// Payloads to append, in order.
    pub data: Vec<String>,

    /// Also read payloads from stdin, one per line, after the positional ones.
    #[arg(long)]
    pub stdin: bool,

    /// Print the chain as single-line JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `verify` subcommand.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// JSON file holding an array of blocks, or `-` for stdin.
    pub file: PathBuf,
}

/// Arguments for the `hash` subcommand.
#[derive(Parser, Debug)]
pub struct HashArgs {
    /// Digest of the preceding block. Empty for genesis.
    #[arg(long, default_value = "")]
    pub prev_hash: String,

    /// Block height (1 for genesis).
    #[arg(long)]
    pub height: u64,

    /// Block payload.
    #[arg(long, default_value = "")]
    pub data: String,
}
