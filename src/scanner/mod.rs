//! Scanner module for directory traversal and content verification.
//!
//! This module provides functionality for:
//! - Single-threaded depth-first directory walking, grouped per directory
//! - Streaming SHA-1 content digests
//! - Direct byte-for-byte file comparison
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and per-directory file discovery
//! - [`hasher`]: Chunked SHA-1 hashing
//! - [`compare`]: Exact byte-stream comparison of two files
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::scanner::Walker;
//! use std::path::Path;
//!
//! // Walk recursively; every visited directory becomes its own group
//! let walker = Walker::new(Path::new("."), true);
//! for (dir, files) in walker.walk() {
//!     println!("{}: {} file(s)", dir.display(), files.len());
//! }
//! ```

pub mod compare;
pub mod hasher;
pub mod walker;

use std::collections::BTreeMap;
use std::path::PathBuf;

// Re-export main types
pub use compare::ByteComparator;
pub use hasher::Sha1Hasher;
pub use walker::Walker;

/// Mapping from a visited directory to the regular files directly inside it.
///
/// Ordered by directory path so iteration (and therefore reporting) is
/// deterministic. File order within a group is discovery order.
pub type DirectoryGroups = BTreeMap<PathBuf, Vec<FileEntry>>;

/// A discovered regular file.
///
/// Identity is the path; the size is captured once at discovery time and is
/// only revalidated by the byte comparator's own length re-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl FileEntry {
    /// Create a new FileEntry.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file
    /// * `size` - File size in bytes
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        Self { path, size }
    }
}

/// Errors that can occur while digesting a file's content.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while comparing two files byte by byte.
#[derive(thiserror::Error, Debug)]
pub enum CompareError {
    /// One of the two files was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading one of the files.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading one of the files.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
