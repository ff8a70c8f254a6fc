//! Keep/remove selection over one directory group's candidate set.
//!
//! Both policies are stable: the earliest-discovered member of an
//! equivalence class is kept, every later member is marked for removal.
//! A file whose content cannot be verified is never marked; it is kept and
//! the failure is logged.

use std::collections::HashSet;

use crate::progress::MessageSink;
use crate::scanner::{ByteComparator, FileEntry, Sha1Hasher};

/// Hash-based selection: first digest seen wins.
///
/// Candidates are digested in order; a file whose digest matches an
/// earlier-seen digest is marked for removal. The seen-set is fresh per
/// call, so selection is scoped to one directory group's candidate set.
///
/// Each processed candidate ticks the sink's live counter.
pub fn select_by_digest(
    candidates: &[FileEntry],
    hasher: &Sha1Hasher,
    sink: &dyn MessageSink,
) -> Vec<FileEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut marked = Vec::new();
    let total = candidates.len();

    for (i, entry) in candidates.iter().enumerate() {
        match hasher.digest_file(&entry.path) {
            Ok(digest) => {
                if !seen.insert(digest) {
                    marked.push(entry.clone());
                }
            }
            Err(err) => {
                // Unverifiable files are kept, never marked.
                log::warn!("Cannot hash {}: {}", entry.path.display(), err);
            }
        }
        sink.on_file_processed(i + 1, total);
    }

    marked
}

/// Byte-comparison selection: pairwise against later unmarked files.
///
/// For each file not already marked, every later not-yet-marked file is
/// compared byte for byte; matches are marked for removal. Quadratic in the
/// number of same-size files, but carries no hashing dependency and no
/// collision risk. Cross-bucket pairs are rejected by the comparator's own
/// length re-check.
pub fn select_by_bytes(
    candidates: &[FileEntry],
    comparator: &ByteComparator,
    sink: &dyn MessageSink,
) -> Vec<FileEntry> {
    let mut removed = vec![false; candidates.len()];
    let total = candidates.len();

    for i in 0..candidates.len() {
        if !removed[i] {
            for j in (i + 1)..candidates.len() {
                if removed[j] || candidates[i].size != candidates[j].size {
                    continue;
                }
                match comparator.files_equal(&candidates[i].path, &candidates[j].path) {
                    Ok(true) => removed[j] = true,
                    Ok(false) => {}
                    Err(err) => {
                        // Treated as non-equal; neither file is marked.
                        log::warn!(
                            "Cannot compare {} with {}: {}",
                            candidates[i].path.display(),
                            candidates[j].path.display(),
                            err
                        );
                    }
                }
            }
        }
        sink.on_file_processed(i + 1, total);
    }

    candidates
        .iter()
        .zip(&removed)
        .filter(|(_, &marked)| marked)
        .map(|(entry, _)| entry.clone())
        .collect()
}
