//! File actions module.
//!
//! Detection (see [`crate::duplicates`]) only marks entries; this module
//! carries them out. Removal is permanent: there is no trash/recycle step
//! and no undo.

pub mod remove;

// Re-export commonly used types
pub use remove::{remove_marked, RemovalReport, RemoveError};
