//! Chunked SHA-1 file hashing.
//!
//! Content equivalence under the hash strategy: two files are duplicates iff
//! their SHA-1 digests match exactly. Digests are rendered as 40-char
//! lowercase hex so they can be looked up in a seen-set per candidate group.
//!
//! SHA-1 collisions are an accepted correctness risk of this strategy: two
//! distinct files with colliding digests would be treated as duplicates.
//! There is deliberately no byte-comparison fallback (use
//! [`ByteComparator`](super::ByteComparator) instead if that risk matters).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha1::{Digest, Sha1};

use super::HashError;

/// Default I/O chunk size in bytes.
///
/// Purely a performance parameter; the digest is identical for any chunk
/// size.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Streaming SHA-1 digester with a tunable read chunk size.
#[derive(Debug, Clone)]
pub struct Sha1Hasher {
    chunk_size: usize,
}

impl Default for Sha1Hasher {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Sha1Hasher {
    /// Create a digester with the default chunk size.
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

    /// Compute the SHA-1 digest of a file's content as lowercase hex.
    ///
    /// The file is read in `chunk_size` blocks into a scoped buffer that is
    /// released on every exit path, including early read errors.
    ///
    /// # Errors
    ///
    /// Returns a [`HashError`] if the file cannot be opened or read.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dupesweep::scanner::Sha1Hasher;
    /// use std::path::Path;
    ///
    /// let hasher = Sha1Hasher::new();
    /// let digest = hasher.digest_file(Path::new("a.txt"))?;
    /// assert_eq!(digest.len(), 40);
    /// # Ok::<(), dupesweep::scanner::HashError>(())
    /// ```
    pub fn digest_file(&self, path: &Path) -> Result<String, HashError> {
        let file = File::open(path).map_err(|e| classify(path, e))?;
        let mut reader = BufReader::with_capacity(self.chunk_size, file);
        let mut hasher = Sha1::new();
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            let n = reader.read(&mut buffer).map_err(|e| classify(path, e))?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }

        Ok(format!("{:x}", hasher.finalize()))
    }
}

/// Map an I/O error to a typed hashing error.
fn classify(path: &Path, error: std::io::Error) -> HashError {
    use std::io::ErrorKind;

    match error.kind() {
        ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source: error,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_known_vector_quick_brown_fox() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "fox.txt",
            b"The quick brown fox jumps over the lazy dog",
        );

        let digest = Sha1Hasher::new().digest_file(&path).unwrap();
        assert_eq!(digest, "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
    }

    #[test]
    fn test_known_vector_empty_input() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty", b"");

        let digest = Sha1Hasher::new().digest_file(&path).unwrap();
        assert_eq!(digest, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data", b"some bytes");

        let digest = Sha1Hasher::new().digest_file(&path).unwrap();
        assert_eq!(digest.len(), 40);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn test_chunk_size_does_not_change_digest() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data", b"chunk boundaries should not matter at all");

        let reference = Sha1Hasher::new().digest_file(&path).unwrap();
        for chunk_size in [1, 3, 16, 64, 4096] {
            let digest = Sha1Hasher::new()
                .with_chunk_size(chunk_size)
                .digest_file(&path)
                .unwrap();
            assert_eq!(digest, reference, "chunk size {} diverged", chunk_size);
        }
    }

    #[test]
    fn test_identical_content_same_digest() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.txt", b"hello");
        let b = write_file(&dir, "b.txt", b"hello");

        let hasher = Sha1Hasher::new();
        assert_eq!(
            hasher.digest_file(&a).unwrap(),
            hasher.digest_file(&b).unwrap()
        );
    }

    #[test]
    fn test_different_content_different_digest() {
        let dir = TempDir::new().unwrap();
        let a = write_file(&dir, "a.txt", b"hello");
        let b = write_file(&dir, "b.txt", b"world");

        let hasher = Sha1Hasher::new();
        assert_ne!(
            hasher.digest_file(&a).unwrap(),
            hasher.digest_file(&b).unwrap()
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = Sha1Hasher::new()
            .digest_file(&dir.path().join("absent"))
            .unwrap_err();

        assert!(matches!(err, HashError::NotFound(_)));
    }
}
