//! Operator-facing reporting through an injected message sink.
//!
//! The engine never touches the terminal: every progress or result message
//! goes through the [`MessageSink`] trait. The CLI installs a
//! [`ConsoleSink`] (exact result lines plus an indicatif live counter during
//! verification); tests and quiet mode use [`NullSink`].

use std::path::Path;
use std::sync::Mutex;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::duplicates::Strategy;
use crate::scanner::FileEntry;

/// Sink for progress and result messages from a sweep.
///
/// All methods have no-op defaults so implementations only handle what they
/// care about.
pub trait MessageSink: Send + Sync {
    /// Called once per directory group after size bucketing.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory group being processed
    /// * `count` - Upper-bound possible-duplicate estimate (files - buckets)
    fn on_possible_duplicates(&self, _dir: &Path, _count: usize) {}

    /// Called when content verification starts for one directory group.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The equivalence strategy in use
    /// * `total` - Number of candidate files to verify
    fn on_verification_start(&self, _strategy: Strategy, _total: usize) {}

    /// Called after each candidate file is verified.
    ///
    /// # Arguments
    ///
    /// * `current` - Files verified so far in this group (1-based)
    /// * `total` - Number of candidate files in this group
    fn on_file_processed(&self, _current: usize, _total: usize) {}

    /// Called when content verification ends for one directory group.
    fn on_verification_end(&self) {}

    /// Called once after all groups: the files marked for removal.
    fn on_duplicates_found(&self, _marked: &[FileEntry]) {}

    /// Called once after all groups with the kept-file count
    /// (total scanned minus marked).
    fn on_kept(&self, _count: usize) {}

    /// Called when a marked file could not be removed.
    fn on_removal_failed(&self, _path: &Path, _message: &str) {}
}

/// Sink that swallows every message.
///
/// Used in quiet mode and as the default for library callers that do their
/// own reporting.
#[derive(Debug, Default)]
pub struct NullSink;

impl MessageSink for NullSink {}

/// Console reporter: result lines on stdout, failures on stderr, and a
/// single overwriting `{pos}/{len}` counter line while candidates are being
/// verified.
///
/// In quiet mode the counter and the informational lines are suppressed;
/// the removed-paths list and failure lines still print.
pub struct ConsoleSink {
    bar: Mutex<Option<ProgressBar>>,
    quiet: bool,
}

impl ConsoleSink {
    /// Create a console sink.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            bar: Mutex::new(None),
            quiet,
        }
    }

    fn counter_style() -> ProgressStyle {
        ProgressStyle::with_template("{pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    // Line rendering is split from printing so the exact texts and the
    // quiet-mode gating are unit-testable.

    fn render_possible_duplicates(&self, count: usize) -> Option<String> {
        (!self.quiet).then(|| format!("Found {} possible duplicate(s)", count))
    }

    fn render_phase(&self, strategy: Strategy) -> Option<&'static str> {
        (!self.quiet).then(|| match strategy {
            Strategy::Hash => "Processing SHA",
            Strategy::Bytes => "Comparing bytes",
        })
    }

    /// The count header is informational; the marked paths always print.
    fn render_duplicates_found(&self, marked: &[FileEntry]) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.quiet {
            lines.push(format!("Found {} duplicate(s)", marked.len()));
        }
        lines.extend(marked.iter().map(|e| e.path.display().to_string()));
        lines
    }

    fn render_kept(&self, count: usize) -> Option<String> {
        (!self.quiet).then(|| format!("Found {} to keep", count))
    }

    fn render_removal_failed(path: &Path, message: &str) -> String {
        format!("Failed to remove {}: {}", path.display(), message)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(false)
    }
}

impl MessageSink for ConsoleSink {
    fn on_possible_duplicates(&self, _dir: &Path, count: usize) {
        if let Some(line) = self.render_possible_duplicates(count) {
            println!("{}", line);
        }
    }

    fn on_verification_start(&self, strategy: Strategy, total: usize) {
        let Some(phase) = self.render_phase(strategy) else {
            return;
        };
        println!("{}", phase);

        let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        pb.set_style(Self::counter_style());
        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_file_processed(&self, current: usize, _total: usize) {
        if let Some(ref pb) = *self.bar.lock().unwrap() {
            pb.set_position(current as u64);
        }
    }

    fn on_verification_end(&self) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }

    fn on_duplicates_found(&self, marked: &[FileEntry]) {
        for line in self.render_duplicates_found(marked) {
            println!("{}", line);
        }
    }

    fn on_kept(&self, count: usize) {
        if let Some(line) = self.render_kept(count) {
            println!("{}", line);
        }
    }

    fn on_removal_failed(&self, path: &Path, message: &str) {
        eprintln!("{}", Self::render_removal_failed(path, message));
    }
}
