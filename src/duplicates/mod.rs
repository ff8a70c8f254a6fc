//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Size-based bucketing of one directory group's files
//! - First-seen-wins keep/remove selection (hash or byte strategy)
//! - Sweep orchestration across directory groups

pub mod buckets;
pub mod finder;
pub mod selector;

// Re-export main types
pub use buckets::{bucket_by_size, candidate_set, BucketStats, SizeBuckets};
pub use finder::{Deduplicator, Strategy, SweepConfig, SweepError, SweepSummary};
pub use selector::{select_by_bytes, select_by_digest};
