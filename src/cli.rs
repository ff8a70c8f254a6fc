//! Command-line interface definitions for dupesweep.
//!
//! All arguments are defined with the clap derive API. Flag-style arguments
//! that take an optional value (`--recursive [BOOL]`) default to a truthy
//! value when the value is omitted.
//!
//! # Example
//!
//! ```bash
//! # Deduplicate the top level of a directory
//! dupesweep ~/Downloads
//!
//! # Descend into subdirectories (each deduplicated independently)
//! dupesweep ~/Downloads --recursive
//!
//! # Byte-for-byte verification instead of SHA-1 digests
//! dupesweep ~/Downloads --compare bytes
//!
//! # Verbose mode for debugging
//! dupesweep -v ~/Downloads
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::duplicates::Strategy;

/// Duplicate file finder and remover.
///
/// Groups files by size, verifies same-size candidates by content (SHA-1
/// digests or byte comparison), keeps the first-discovered copy of each
/// distinct content, and permanently deletes the rest.
#[derive(Debug, Parser)]
#[command(name = "dupesweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to sweep for duplicates
    ///
    /// Optional at the clap level so the missing-argument message and exit
    /// code stay under application control.
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Descend into subdirectories; each directory is deduplicated
    /// independently (duplicates are never matched across directories)
    ///
    /// A bare `--recursive` means true; an explicit value may be 1/0 or
    /// true/false.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "1",
        value_parser = parse_truthy
    )]
    pub recursive: bool,

    /// Content verification strategy
    ///
    /// `hash` compares SHA-1 digests (fast, accepts the theoretical risk of
    /// digest collisions); `bytes` compares file contents directly (no
    /// collision risk, quadratic per size group).
    #[arg(long, value_enum, value_name = "STRATEGY", default_value_t = CompareMode::Hash)]
    pub compare: CompareMode,

    /// I/O chunk size in bytes for hashing and comparison
    ///
    /// A pure performance parameter; results are identical for any value.
    #[arg(long, value_name = "BYTES", default_value = "8192", value_parser = parse_chunk_size)]
    pub chunk_size: usize,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress and informational lines (removed paths and errors
    /// still print)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Content verification strategy as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CompareMode {
    /// Chunked SHA-1 digest comparison
    Hash,
    /// Direct byte-for-byte comparison
    Bytes,
}

impl From<CompareMode> for Strategy {
    fn from(mode: CompareMode) -> Self {
        match mode {
            CompareMode::Hash => Strategy::Hash,
            CompareMode::Bytes => Strategy::Bytes,
        }
    }
}

impl std::fmt::Display for CompareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompareMode::Hash => write!(f, "hash"),
            CompareMode::Bytes => write!(f, "bytes"),
        }
    }
}

/// Parse a truthy/falsy flag value.
///
/// Accepts `1`/`0` and `true`/`false` (ASCII case-insensitive).
///
/// # Errors
///
/// Returns an error for any other value.
pub fn parse_truthy(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(format!("expected 1/0 or true/false, got '{other}'")),
    }
}

/// Parse the I/O chunk size (a positive byte count).
///
/// # Errors
///
/// Returns an error for zero or a non-numeric value.
pub fn parse_chunk_size(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("invalid byte count: '{s}'"))?;
    if n == 0 {
        return Err("chunk size must be at least 1".to_string());
    }
    Ok(n)
}
