//! Exact byte-stream comparison of two files.
//!
//! Content equivalence under the byte strategy: two files are duplicates iff
//! their contents match byte for byte. The comparator re-checks lengths by
//! seeking to the end of both files before reading any content, then rewinds
//! and compares buffered chunks, short-circuiting on the first mismatch. Two
//! streams are equal only if they reach end-of-input simultaneously.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use super::hasher::DEFAULT_CHUNK_SIZE;
use super::CompareError;

/// Buffered two-file comparator with a tunable read chunk size.
#[derive(Debug, Clone)]
pub struct ByteComparator {
    chunk_size: usize,
}

impl Default for ByteComparator {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ByteComparator {
    /// Create a comparator with the default chunk size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the I/O chunk size (bytes per read, must be nonzero).
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        debug_assert!(chunk_size > 0, "chunk size must be nonzero");
        self.chunk_size = chunk_size;
        self
    }

    /// Compare two files for exact content equality.
    ///
    /// Files of different length are never equal; the length re-check reads
    /// no content. Otherwise contents are compared chunk by chunk until the
    /// first mismatch or until both streams end together.
    ///
    /// # Errors
    ///
    /// Returns a [`CompareError`] naming the file that could not be opened
    /// or read.
    pub fn files_equal(&self, a: &Path, b: &Path) -> Result<bool, CompareError> {
        let mut file_a = File::open(a).map_err(|e| classify(a, e))?;
        let mut file_b = File::open(b).map_err(|e| classify(b, e))?;

        // Sizes may have drifted since discovery; probe the ends first.
        let len_a = file_a.seek(SeekFrom::End(0)).map_err(|e| classify(a, e))?;
        let len_b = file_b.seek(SeekFrom::End(0)).map_err(|e| classify(b, e))?;
        if len_a != len_b {
            return Ok(false);
        }

        file_a.seek(SeekFrom::Start(0)).map_err(|e| classify(a, e))?;
        file_b.seek(SeekFrom::Start(0)).map_err(|e| classify(b, e))?;

        let mut reader_a = BufReader::with_capacity(self.chunk_size, file_a);
        let mut reader_b = BufReader::with_capacity(self.chunk_size, file_b);

        loop {
            let n = {
                let chunk_a = reader_a.fill_buf().map_err(|e| classify(a, e))?;
                let chunk_b = reader_b.fill_buf().map_err(|e| classify(b, e))?;

                if chunk_a.is_empty() || chunk_b.is_empty() {
                    return Ok(chunk_a.is_empty() && chunk_b.is_empty());
                }

                let n = chunk_a.len().min(chunk_b.len());
                if chunk_a[..n] != chunk_b[..n] {
                    return Ok(false);
                }
                n
            };
            reader_a.consume(n);
            reader_b.consume(n);
        }
    }
}

/// Map an I/O error to a typed comparison error.
fn classify(path: &Path, error: std::io::Error) -> CompareError {
    use std::io::ErrorKind;

    match error.kind() {
        ErrorKind::NotFound => CompareError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => CompareError::PermissionDenied(path.to_path_buf()),
        _ => CompareError::Io {
            path: path.to_path_buf(),
            source: error,
        },
    }
}
