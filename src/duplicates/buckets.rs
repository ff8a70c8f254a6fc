//! Size-based bucketing of one directory group's files.
//!
//! # Overview
//!
//! Bucketing is the first, cheap stage of duplicate detection: files with
//! different byte lengths cannot be duplicates, so only buckets holding two
//! or more same-length files go on to content verification. No file content
//! is read here; lengths come from the entries captured at discovery.
//!
//! The per-group estimate `total files - bucket count` is an upper bound on
//! how many duplicates the group can contain (every bucket keeps at least
//! one survivor).
//!
//! # Example
//!
//! ```
//! use dupesweep::scanner::FileEntry;
//! use dupesweep::duplicates::{bucket_by_size, candidate_set};
//! use std::path::PathBuf;
//!
//! let files = vec![
//!     FileEntry::new(PathBuf::from("/a.txt"), 1024),
//!     FileEntry::new(PathBuf::from("/b.txt"), 1024),
//!     FileEntry::new(PathBuf::from("/c.txt"), 2048),
//! ];
//!
//! let (buckets, stats) = bucket_by_size(files);
//!
//! assert_eq!(stats.total_files, 3);
//! assert_eq!(stats.bucket_count, 2);
//! assert_eq!(stats.possible_duplicates, 1);
//!
//! // Only the 1024-byte bucket has candidates
//! let candidates = candidate_set(&buckets);
//! assert_eq!(candidates.len(), 2);
//! ```

use std::collections::BTreeMap;

use crate::scanner::FileEntry;

/// Buckets keyed by exact byte length, ascending.
///
/// Within a bucket, files keep their discovery order; that order decides
/// which duplicate survives selection.
pub type SizeBuckets = BTreeMap<u64, Vec<FileEntry>>;

/// Statistics from the size-bucketing stage of one directory group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketStats {
    /// Total number of files bucketed
    pub total_files: usize,
    /// Number of distinct byte lengths seen
    pub bucket_count: usize,
    /// Upper-bound duplicate estimate: total files minus bucket count
    pub possible_duplicates: usize,
    /// Number of files in buckets with 2+ members (verification workload)
    pub candidate_files: usize,
}

/// Bucket one directory group's files by exact byte length.
///
/// Zero-byte files form a valid bucket like any other: two empty files are
/// trivially equal by bytes, and the SHA-1 of empty content applies
/// uniformly under hashing.
///
/// # Arguments
///
/// * `files` - File entries of a single directory group, in discovery order
///
/// # Returns
///
/// All buckets (singletons included, since the estimate needs the full
/// bucket count) plus the stage statistics.
///
/// # Example
///
/// ```
/// use dupesweep::scanner::FileEntry;
/// use dupesweep::duplicates::bucket_by_size;
/// use std::path::PathBuf;
///
/// let files = vec![
///     FileEntry::new(PathBuf::from("/a.txt"), 100),
///     FileEntry::new(PathBuf::from("/b.txt"), 100),
/// ];
///
/// let (buckets, stats) = bucket_by_size(files);
/// assert_eq!(buckets[&100].len(), 2);
/// assert_eq!(stats.possible_duplicates, 1);
/// ```
#[must_use]
pub fn bucket_by_size(files: impl IntoIterator<Item = FileEntry>) -> (SizeBuckets, BucketStats) {
    let mut buckets = SizeBuckets::new();
    let mut stats = BucketStats::default();

    for file in files {
        stats.total_files += 1;
        buckets.entry(file.size).or_default().push(file);
    }

    stats.bucket_count = buckets.len();
    stats.possible_duplicates = stats.total_files.saturating_sub(stats.bucket_count);
    stats.candidate_files = buckets
        .values()
        .filter(|files| files.len() > 1)
        .map(Vec::len)
        .sum();

    log::debug!(
        "Size bucketing: {} file(s) in {} bucket(s), {} possible duplicate(s)",
        stats.total_files,
        stats.bucket_count,
        stats.possible_duplicates
    );

    (buckets, stats)
}

/// Flatten the buckets with 2+ members into the ordered candidate set.
///
/// Candidates are emitted in ascending bucket length; within a bucket they
/// keep discovery order, which is the order the selector relies on.
/// Singleton buckets are definitively unique and never verified.
#[must_use]
pub fn candidate_set(buckets: &SizeBuckets) -> Vec<FileEntry> {
    buckets
        .values()
        .filter(|files| files.len() > 1)
        .flat_map(|files| files.iter().cloned())
        .collect()
}
