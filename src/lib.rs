//! Dupesweep - duplicate file finder and remover.
//!
//! Groups files by size, verifies same-size candidates by content (SHA-1
//! digests or byte-for-byte comparison), keeps the first-discovered copy of
//! each distinct content, and permanently deletes the rest. In recursive
//! mode every directory is deduplicated independently.

pub mod actions;
pub mod cli;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod progress;
pub mod scanner;

use std::sync::Arc;

use anyhow::Result;

use crate::cli::Cli;
use crate::duplicates::{Deduplicator, SweepConfig, SweepError};
use crate::error::ExitCode;
use crate::progress::{ConsoleSink, MessageSink};

/// Run the application logic and map the outcome to an exit code.
///
/// Validation failures (missing or invalid root) are reported to stderr and
/// returned as [`ExitCode::InvalidInput`]; a completed sweep returns
/// [`ExitCode::Success`] even when some deletions fail (failures are
/// reported per file, counts reflect detection).
///
/// # Errors
///
/// Returns an error only for failures outside the sweep contract; expected
/// conditions are expressed through the exit code.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    let Some(directory) = cli.directory else {
        eprintln!("You must provide a directory");
        return Ok(ExitCode::InvalidInput);
    };

    let sink: Arc<dyn MessageSink> = Arc::new(ConsoleSink::new(cli.quiet));
    let config = SweepConfig::default()
        .with_recursive(cli.recursive)
        .with_strategy(cli.compare.into())
        .with_chunk_size(cli.chunk_size);

    let summary = match Deduplicator::new(config)
        .with_sink(Arc::clone(&sink))
        .run(&directory)
    {
        Ok(summary) => summary,
        Err(err @ SweepError::InvalidRoot(_)) => {
            eprintln!("{err}");
            return Ok(ExitCode::InvalidInput);
        }
    };

    // Results are reported before any deletion is attempted; the counts
    // reflect detection, not deletion success.
    sink.on_duplicates_found(&summary.marked);
    sink.on_kept(summary.kept_count());

    let report = actions::remove_marked(&summary.marked, sink.as_ref());
    log::info!("{}", report.summary());

    Ok(ExitCode::Success)
}
