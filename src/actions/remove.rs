//! Permanent deletion of marked duplicates.
//!
//! # Overview
//!
//! Each deletion is attempted independently: a failure (permission denied,
//! file vanished since the scan) is captured as a typed per-file error in
//! the report and never stops the remaining deletions. Detection counts are
//! unaffected by deletion outcomes.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::actions::remove_marked;
//! use dupesweep::progress::NullSink;
//! use dupesweep::scanner::FileEntry;
//! use std::path::PathBuf;
//!
//! let marked = vec![FileEntry::new(PathBuf::from("/tmp/dup.txt"), 5)];
//! let report = remove_marked(&marked, &NullSink);
//! println!("{}", report.summary());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::progress::MessageSink;
use crate::scanner::FileEntry;

/// Error type for removal operations.
#[derive(Debug, Error)]
pub enum RemoveError {
    /// File was not found (vanished since the scan).
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied when attempting to remove.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// General I/O error.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl RemoveError {
    /// Get the path associated with this error.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(p) | Self::PermissionDenied(p) | Self::Io { path: p, .. } => p,
        }
    }

    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}

/// Aggregate result of a removal batch.
#[derive(Debug, Default)]
pub struct RemovalReport {
    /// Successfully removed paths, in removal order.
    pub removed: Vec<PathBuf>,
    /// Total bytes freed by successful removals.
    pub bytes_freed: u64,
    /// Failed removals with their errors.
    pub failures: Vec<RemoveError>,
}

impl RemovalReport {
    /// Number of successful removals.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }

    /// Number of failed removals.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Check if every removal succeeded.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Human-readable summary of the batch.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.all_succeeded() {
            format!(
                "Removed {} file(s), freed {} bytes",
                self.removed_count(),
                self.bytes_freed
            )
        } else {
            format!(
                "Removed {} file(s), {} failed, freed {} bytes",
                self.removed_count(),
                self.failure_count(),
                self.bytes_freed
            )
        }
    }
}

/// Permanently delete every marked entry.
///
/// Failures are reported through the sink and collected in the returned
/// report; the batch always runs to the end.
pub fn remove_marked(marked: &[FileEntry], sink: &dyn MessageSink) -> RemovalReport {
    let mut report = RemovalReport::default();

    for entry in marked {
        match fs::remove_file(&entry.path) {
            Ok(()) => {
                log::debug!("Removed {}", entry.path.display());
                report.removed.push(entry.path.clone());
                report.bytes_freed += entry.size;
            }
            Err(err) => {
                let err = RemoveError::from_io(&entry.path, err);
                log::warn!("{}", err);
                sink.on_removal_failed(&entry.path, &err.to_string());
                report.failures.push(err);
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullSink;
    use tempfile::TempDir;

    fn entry(dir: &TempDir, name: &str, content: &[u8]) -> FileEntry {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        FileEntry::new(path, content.len() as u64)
    }

    #[test]
    fn test_removes_all_marked_files() {
        let dir = TempDir::new().unwrap();
        let marked = vec![entry(&dir, "a", b"aaa"), entry(&dir, "b", b"bbbbb")];

        let report = remove_marked(&marked, &NullSink);

        assert!(report.all_succeeded());
        assert_eq!(report.removed_count(), 2);
        assert_eq!(report.bytes_freed, 8);
        assert!(!marked[0].path.exists());
        assert!(!marked[1].path.exists());
    }

    #[test]
    fn test_missing_file_is_isolated() {
        let dir = TempDir::new().unwrap();
        let marked = vec![
            entry(&dir, "first", b"one"),
            FileEntry::new(dir.path().join("ghost"), 3),
            entry(&dir, "last", b"three"),
        ];

        let report = remove_marked(&marked, &NullSink);

        // The vanished file fails alone; its neighbors are still removed.
        assert_eq!(report.removed_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(matches!(report.failures[0], RemoveError::NotFound(_)));
        assert!(!marked[0].path.exists());
        assert!(!marked[2].path.exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_permission_denied_is_isolated() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked_dir = dir.path().join("locked");
        fs::create_dir(&locked_dir).unwrap();
        let locked = locked_dir.join("held");
        fs::write(&locked, b"held").unwrap();
        fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o555)).unwrap();

        let marked = vec![
            entry(&dir, "free", b"free"),
            FileEntry::new(locked.clone(), 4),
        ];
        let report = remove_marked(&marked, &NullSink);

        fs::set_permissions(&locked_dir, fs::Permissions::from_mode(0o755)).unwrap();

        if report.all_succeeded() {
            // Permission bits are not enforced for root; nothing to isolate.
            return;
        }
        assert_eq!(report.removed_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures[0].path(), locked.as_path());
        assert_eq!(report.bytes_freed, 4);
    }

    #[test]
    fn test_empty_batch() {
        let report = remove_marked(&[], &NullSink);

        assert!(report.all_succeeded());
        assert_eq!(report.removed_count(), 0);
        assert_eq!(report.summary(), "Removed 0 file(s), freed 0 bytes");
    }

    #[test]
    fn test_summary_reports_failures() {
        let dir = TempDir::new().unwrap();
        let marked = vec![FileEntry::new(dir.path().join("absent"), 10)];

        let report = remove_marked(&marked, &NullSink);
        assert_eq!(report.summary(), "Removed 0 file(s), 1 failed, freed 0 bytes");
    }
}
