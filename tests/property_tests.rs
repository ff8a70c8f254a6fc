//! Property-based tests over random contents and size distributions.

use std::fs;
use std::path::PathBuf;

use dupesweep::duplicates::{bucket_by_size, candidate_set, Deduplicator, Strategy, SweepConfig};
use dupesweep::scanner::{FileEntry, Sha1Hasher};
use proptest::prelude::*;
use tempfile::TempDir;

proptest! {
    #[test]
    fn test_digest_determinism(content in "\\PC*") {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.bin");
        fs::write(&path, content.as_bytes()).unwrap();

        let hasher = Sha1Hasher::new();
        let first = hasher.digest_file(&path).unwrap();
        let second = hasher.digest_file(&path).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_digest_chunk_size_independence(
        content in prop::collection::vec(any::<u8>(), 0..2048),
        chunk_size in 1usize..512,
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.bin");
        fs::write(&path, &content).unwrap();

        let reference = Sha1Hasher::new().digest_file(&path).unwrap();
        let chunked = Sha1Hasher::new()
            .with_chunk_size(chunk_size)
            .digest_file(&path)
            .unwrap();

        prop_assert_eq!(chunked, reference);
    }

    #[test]
    fn test_bucket_partition_invariants(sizes in prop::collection::vec(0u64..1000, 0..50)) {
        let entries: Vec<FileEntry> = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| FileEntry::new(PathBuf::from(format!("/fake/{}", i)), size))
            .collect();

        let (buckets, stats) = bucket_by_size(entries.clone());

        // Every file lands in exactly one bucket, under its own size.
        let bucketed: usize = buckets.values().map(Vec::len).sum();
        prop_assert_eq!(bucketed, entries.len());
        for (size, files) in &buckets {
            for file in files {
                prop_assert_eq!(file.size, *size);
            }
        }

        prop_assert_eq!(stats.total_files, entries.len());
        prop_assert_eq!(stats.possible_duplicates, entries.len() - buckets.len());

        // Candidates are exactly the members of multi-file buckets.
        let candidates = candidate_set(&buckets);
        let expected: usize = buckets.values().filter(|f| f.len() > 1).map(Vec::len).sum();
        prop_assert_eq!(candidates.len(), expected);
        prop_assert_eq!(candidates.len(), stats.candidate_files);
    }

    #[test]
    fn test_exactly_one_keeper_per_distinct_content(
        contents in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 1..12),
    ) {
        let dir = TempDir::new().unwrap();
        for (i, content) in contents.iter().enumerate() {
            fs::write(dir.path().join(format!("f{:02}", i)), content).unwrap();
        }

        let distinct = {
            let mut unique = contents.clone();
            unique.sort();
            unique.dedup();
            unique.len()
        };

        let summary = Deduplicator::new(SweepConfig::default())
            .run(dir.path())
            .unwrap();

        prop_assert_eq!(summary.kept_count(), distinct);
        prop_assert_eq!(summary.marked.len(), contents.len() - distinct);
    }

    #[test]
    fn test_strategies_agree_on_random_fixtures(
        contents in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..32), 1..10),
    ) {
        let dir = TempDir::new().unwrap();
        for (i, content) in contents.iter().enumerate() {
            fs::write(dir.path().join(format!("f{:02}", i)), content).unwrap();
        }

        let by_hash = Deduplicator::new(SweepConfig::default().with_strategy(Strategy::Hash))
            .run(dir.path())
            .unwrap();
        let by_bytes = Deduplicator::new(SweepConfig::default().with_strategy(Strategy::Bytes))
            .run(dir.path())
            .unwrap();

        let hash_marked: Vec<_> = by_hash.marked.iter().map(|e| e.path.clone()).collect();
        let bytes_marked: Vec<_> = by_bytes.marked.iter().map(|e| e.path.clone()).collect();
        prop_assert_eq!(hash_marked, bytes_marked);
    }

    #[test]
    fn test_sweep_is_deterministic(
        contents in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..32), 1..10),
    ) {
        let dir = TempDir::new().unwrap();
        for (i, content) in contents.iter().enumerate() {
            fs::write(dir.path().join(format!("f{:02}", i)), content).unwrap();
        }

        let engine = Deduplicator::new(SweepConfig::default());
        let first = engine.run(dir.path()).unwrap();
        let second = engine.run(dir.path()).unwrap();

        prop_assert_eq!(first.marked, second.marked);
        prop_assert_eq!(first.total_files, second.total_files);
    }
}
