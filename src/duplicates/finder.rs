//! Sweep orchestration: walk, bucket, and select per directory group.
//!
//! # Overview
//!
//! The [`Deduplicator`] runs the full detection pipeline:
//! 1. **Traversal**: group regular files per directory (see
//!    [`crate::scanner::walker`])
//! 2. **Size bucketing**: same-length candidates per group (see
//!    [`crate::duplicates::buckets`])
//! 3. **Selection**: first-seen-wins keep/remove decisions per group (see
//!    [`crate::duplicates::selector`])
//!
//! Detection is scoped per directory group: in recursive mode every visited
//! directory is deduplicated independently, and identical content in two
//! different directories is never treated as duplicated. Removal is a
//! separate action (see [`crate::actions`]) driven by the returned summary.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::duplicates::{Deduplicator, Strategy, SweepConfig};
//! use std::path::Path;
//!
//! let config = SweepConfig::default()
//!     .with_recursive(true)
//!     .with_strategy(Strategy::Hash);
//! let summary = Deduplicator::new(config).run(Path::new("/tmp/photos"))?;
//!
//! println!("{} duplicate(s), {} kept", summary.marked.len(), summary.kept_count());
//! # Ok::<(), dupesweep::duplicates::SweepError>(())
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::progress::{MessageSink, NullSink};
use crate::scanner::{ByteComparator, FileEntry, Sha1Hasher, Walker};

use super::buckets::{bucket_by_size, candidate_set};
use super::selector::{select_by_bytes, select_by_digest};

/// Content equivalence strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Chunked SHA-1 digests, one keeper per distinct digest.
    ///
    /// Digest collisions are an accepted correctness risk of this strategy;
    /// there is no byte-comparison fallback.
    Hash,
    /// Pairwise byte-for-byte comparison. Quadratic per size bucket, no
    /// collision risk.
    Bytes,
}

/// Fatal pre-scan errors. Everything past root validation is recovered
/// locally and logged.
#[derive(thiserror::Error, Debug)]
pub enum SweepError {
    /// The root is missing or not a directory. The message is the exact
    /// operator-facing line; the offending path travels with it for logs.
    #[error("You did not provide a valid directory")]
    InvalidRoot(PathBuf),
}

/// Configuration for a sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Descend into subdirectories (each deduplicated independently).
    pub recursive: bool,
    /// Content equivalence strategy.
    pub strategy: Strategy,
    /// I/O chunk size in bytes for hashing and comparison.
    pub chunk_size: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            strategy: Strategy::Hash,
            chunk_size: crate::scanner::hasher::DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SweepConfig {
    /// Enable/disable recursive traversal.
    #[must_use]
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Set the equivalence strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the I/O chunk size (bytes per read, must be nonzero).
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0, "chunk size must be nonzero");
        self.chunk_size = chunk_size;
        self
    }
}

/// Aggregate result of one sweep.
///
/// Counts reflect detection; whether the marked entries are then removed
/// (and whether removal succeeds) is the caller's business.
#[derive(Debug, Clone, Default)]
pub struct SweepSummary {
    /// Number of directory groups visited.
    pub directories: usize,
    /// Total regular files discovered across all groups.
    pub total_files: usize,
    /// Upper-bound duplicate estimate summed over groups (files - buckets).
    pub possible_duplicates: usize,
    /// Entries marked for removal, in group order then discovery order.
    pub marked: Vec<FileEntry>,
}

impl SweepSummary {
    /// Files kept: total discovered minus marked.
    #[must_use]
    pub fn kept_count(&self) -> usize {
        self.total_files - self.marked.len()
    }
}

/// The duplicate detection engine.
///
/// Owns the configuration and an injected [`MessageSink`]; holds no other
/// state, so one instance can run several sweeps.
pub struct Deduplicator {
    config: SweepConfig,
    sink: Arc<dyn MessageSink>,
}

impl Deduplicator {
    /// Create an engine with the given configuration and a silent sink.
    #[must_use]
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            sink: Arc::new(NullSink),
        }
    }

    /// Install a message sink for progress and result reporting.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run detection under `root` and return the sweep summary.
    ///
    /// Each directory group is bucketed by size, its candidate set verified
    /// with the configured strategy, and the losers of each equivalence
    /// class collected into `summary.marked`. Nothing is deleted here.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::InvalidRoot`] if `root` does not exist or is
    /// not a directory. All later failures (unreadable directories or
    /// files) are recovered locally and logged.
    pub fn run(&self, root: &Path) -> Result<SweepSummary, SweepError> {
        if !root.is_dir() {
            return Err(SweepError::InvalidRoot(root.to_path_buf()));
        }

        log::info!(
            "Sweeping {} ({}, {:?} strategy)",
            root.display(),
            if self.config.recursive {
                "recursive"
            } else {
                "non-recursive"
            },
            self.config.strategy
        );

        let hasher = Sha1Hasher::new().with_chunk_size(self.config.chunk_size);
        let comparator = ByteComparator::new().with_chunk_size(self.config.chunk_size);

        let groups = Walker::new(root, self.config.recursive).walk();
        let mut summary = SweepSummary::default();

        for (dir, files) in groups {
            summary.directories += 1;

            let (buckets, stats) = bucket_by_size(files);
            summary.total_files += stats.total_files;
            summary.possible_duplicates += stats.possible_duplicates;
            self.sink
                .on_possible_duplicates(&dir, stats.possible_duplicates);

            let candidates = candidate_set(&buckets);
            self.sink
                .on_verification_start(self.config.strategy, candidates.len());
            let marked = match self.config.strategy {
                Strategy::Hash => select_by_digest(&candidates, &hasher, self.sink.as_ref()),
                Strategy::Bytes => select_by_bytes(&candidates, &comparator, self.sink.as_ref()),
            };
            self.sink.on_verification_end();

            log::debug!(
                "{}: {} candidate(s), {} marked",
                dir.display(),
                candidates.len(),
                marked.len()
            );
            summary.marked.extend(marked);
        }

        Ok(summary)
    }
}
