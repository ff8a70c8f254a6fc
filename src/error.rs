//! Process exit codes.

/// Exit codes for the dupesweep binary.
///
/// The contract is deliberately small: a run either completes (including
/// "no duplicates found" and runs with deletion failures) or is rejected
/// up front for a missing/invalid root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The sweep ran to completion.
    Success = 0,
    /// The root directory was missing or invalid; nothing was scanned.
    InvalidInput = -1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
