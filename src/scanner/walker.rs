//! Directory walker producing per-directory file groups.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing a directory
//! tree and collecting its regular files grouped by containing directory.
//! The walk is single-threaded and iterative (no call-stack recursion),
//! built on [`walkdir`].
//!
//! Grouping is the load-bearing property: duplicate detection runs
//! independently per directory group, so a file in `root/` and an identical
//! file in `root/sub/` belong to different groups and are never compared.
//!
//! # Example
//!
//! ```no_run
//! use dupesweep::scanner::Walker;
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("/home/user/Downloads"), true);
//! for (dir, files) in walker.walk() {
//!     println!("{}: {} file(s)", dir.display(), files.len());
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{DirectoryGroups, FileEntry};

/// Directory walker for grouped file discovery.
///
/// Children are visited in file-name order, so discovery order (which later
/// decides which duplicate is kept) is stable across runs on the same tree.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Descend into subdirectories
    recursive: bool,
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory to scan
    /// * `recursive` - Whether to descend into subdirectories
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dupesweep::scanner::Walker;
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."), false);
    /// ```
    #[must_use]
    pub fn new(path: &Path, recursive: bool) -> Self {
        Self {
            root: path.to_path_buf(),
            recursive,
        }
    }

    /// Walk the tree and group regular files by their containing directory.
    ///
    /// - Non-recursive mode: the mapping has exactly one key (the root),
    ///   holding the root's immediate regular-file children.
    /// - Recursive mode: every visited directory becomes its own key,
    ///   holding only the regular files directly inside it.
    ///
    /// Unreadable directories contribute zero entries and are logged at warn
    /// level; the walk never aborts. Symlinks and other non-regular entries
    /// are skipped and never followed. A file whose metadata cannot be read
    /// is excluded from its group with a warning.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dupesweep::scanner::Walker;
    /// use std::path::Path;
    ///
    /// let groups = Walker::new(Path::new("."), true).walk();
    /// let total: usize = groups.values().map(Vec::len).sum();
    /// println!("Found {} files in {} directories", total, groups.len());
    /// ```
    #[must_use]
    pub fn walk(&self) -> DirectoryGroups {
        let mut groups = DirectoryGroups::new();

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walk = WalkDir::new(&self.root)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name();

        for entry_result in walk {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map_or_else(|| self.root.clone(), Path::to_path_buf);
                    log::warn!("Cannot read {}: {}", path.display(), err);
                    continue;
                }
            };

            let file_type = entry.file_type();

            if file_type.is_dir() {
                // In non-recursive mode subdirectories are listed at depth 1
                // but never descended and never form a group of their own.
                if self.recursive || entry.depth() == 0 {
                    groups.entry(entry.path().to_path_buf()).or_default();
                }
                continue;
            }

            if !file_type.is_file() {
                log::trace!("Skipping non-regular entry: {}", entry.path().display());
                continue;
            }

            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => {
                    log::warn!("Cannot stat {}: {}", entry.path().display(), err);
                    continue;
                }
            };

            let parent = entry
                .path()
                .parent()
                .map_or_else(|| self.root.clone(), Path::to_path_buf);
            groups
                .entry(parent)
                .or_default()
                .push(FileEntry::new(entry.path().to_path_buf(), size));
        }

        let total: usize = groups.values().map(Vec::len).sum();
        log::debug!(
            "Walk complete: {} file(s) across {} director{}",
            total,
            groups.len(),
            if groups.len() == 1 { "y" } else { "ies" }
        );

        groups
    }
}
