//! Integration tests for the on-disk graph cache

#![cfg(feature = "serialization")]

use std::fs;
use std::io::Cursor;

use tempfile::TempDir;
use word_ladder::cache::{CACHE_MAGIC, CACHE_VERSION};
use word_ladder::prelude::*;

const WORDS: &str = "lead\nlad\nload\nold\ngold\ncat\nat\n";

fn write_words(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("wordList.txt");
    fs::write(&path, contents).unwrap();
    path
}

fn load(path: &std::path::Path) -> WordList {
    WordList::from_path(path, &NormalizationConfig::default()).unwrap()
}

#[test]
fn test_cached_graph_answers_like_fresh_build() {
    let dir = TempDir::new().unwrap();
    let words = load(&write_words(&dir, WORDS));
    let cache = GraphCache::new(dir.path().join("cache").join("graph.bin.gz"));

    let fresh = WordGraph::precompute(&words, &cache).unwrap();
    let (restored, source) = WordGraph::open(&words, Some(&cache));

    assert_eq!(source, GraphSource::Cache);
    assert_eq!(fresh.index(), restored.index());
    assert_eq!(fresh.graph(), restored.graph());
    assert_eq!(
        fresh.search("lead", "gold").unwrap().into_ladder().unwrap().into_words(),
        restored.search("lead", "gold").unwrap().into_ladder().unwrap().into_words(),
    );
}

#[test]
fn test_file_and_in_memory_lists_share_fingerprint() {
    let dir = TempDir::new().unwrap();
    let from_file = load(&write_words(&dir, WORDS));
    let from_words = WordList::from_words(
        ["lead", "lad", "load", "old", "gold", "cat", "at"],
        &NormalizationConfig::default(),
    )
    .unwrap();

    assert_eq!(from_file.fingerprint(), from_words.fingerprint());
}

#[test]
fn test_edited_word_list_invalidates_cache() {
    let dir = TempDir::new().unwrap();
    let path = write_words(&dir, WORDS);
    let cache = GraphCache::new(dir.path().join("graph.bin.gz"));

    let original = load(&path);
    WordGraph::precompute(&original, &cache).unwrap();

    fs::write(&path, format!("{WORDS}goad\n")).unwrap();
    let edited = load(&path);
    assert_ne!(original.fingerprint(), edited.fingerprint());
    assert!(cache.load_matching(edited.fingerprint()).is_none());

    let (graph, source) = WordGraph::open(&edited, Some(&cache));
    assert_eq!(source, GraphSource::Rebuilt);
    assert!(graph.index().contains_word("goad"));

    // The rebuild replaced the single cached generation
    assert!(cache.load_matching(original.fingerprint()).is_none());
    assert!(cache.load_matching(edited.fingerprint()).is_some());
}

#[test]
fn test_normalization_change_invalidates_cache() {
    let dir = TempDir::new().unwrap();
    let path = write_words(&dir, WORDS);
    let cache = GraphCache::new(dir.path().join("graph.bin.gz"));

    WordGraph::precompute(&load(&path), &cache).unwrap();

    let preserve = NormalizationConfig::new(CaseFolding::Preserve, InvalidWordPolicy::Skip);
    let words = WordList::from_path(&path, &preserve).unwrap();
    let (_, source) = WordGraph::open(&words, Some(&cache));
    assert_eq!(source, GraphSource::Rebuilt);
}

#[test]
fn test_corrupt_cache_falls_back_to_rebuild() {
    let dir = TempDir::new().unwrap();
    let words = load(&write_words(&dir, WORDS));
    let cache = GraphCache::new(dir.path().join("graph.bin.gz"));

    WordGraph::precompute(&words, &cache).unwrap();
    let mut bytes = fs::read(cache.path()).unwrap();
    for b in bytes.iter_mut().skip(CACHE_MAGIC.len() + 2) {
        *b = !*b;
    }
    fs::write(cache.path(), &bytes).unwrap();

    assert!(cache.try_load().is_err());
    assert!(cache.load().is_none());

    let (graph, source) = WordGraph::open(&words, Some(&cache));
    assert_eq!(source, GraphSource::Rebuilt);
    assert_eq!(graph.search("lead", "gold").unwrap().ladder().unwrap().len(), 5);
    assert!(cache.try_load().unwrap().is_some());
}

#[test]
fn test_foreign_and_outdated_files_are_rejected() {
    let dir = TempDir::new().unwrap();
    let cache = GraphCache::new(dir.path().join("graph.bin.gz"));

    fs::write(cache.path(), b"not a cache at all").unwrap();
    assert!(matches!(cache.try_load(), Err(CacheError::BadMagic)));

    let mut outdated = CACHE_MAGIC.to_vec();
    outdated.extend_from_slice(&CACHE_VERSION.wrapping_add(1).to_le_bytes());
    fs::write(cache.path(), &outdated).unwrap();
    assert!(matches!(
        cache.try_load(),
        Err(CacheError::Version { expected, .. }) if expected == CACHE_VERSION
    ));
}

/// Header followed by a payload whose first string claims 16 TiB.
fn oversized_string_cache() -> Vec<u8> {
    let mut payload = vec![0u8; 32];
    payload.extend_from_slice(&1u64.to_le_bytes());
    payload.extend_from_slice(&(1u64 << 44).to_le_bytes());
    payload.extend_from_slice(b"abc");

    #[cfg(feature = "compression")]
    let payload = {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&payload).unwrap();
        encoder.finish().unwrap()
    };

    let mut bytes = CACHE_MAGIC.to_vec();
    bytes.extend_from_slice(&CACHE_VERSION.to_le_bytes());
    bytes.extend_from_slice(&payload);
    bytes
}

#[test]
fn test_oversized_length_prefix_is_absent() {
    let dir = TempDir::new().unwrap();
    let cache = GraphCache::new(dir.path().join("graph.bin.gz"));
    fs::write(cache.path(), oversized_string_cache()).unwrap();

    assert!(matches!(
        cache.try_load(),
        Err(CacheError::Serialization(SerializationError::Bincode(_)))
    ));
    assert!(cache.load().is_none());
}

#[test]
fn test_oversized_length_prefix_falls_back_to_rebuild() {
    let dir = TempDir::new().unwrap();
    let words = load(&write_words(&dir, WORDS));
    let cache = GraphCache::new(dir.path().join("graph.bin.gz"));
    fs::write(cache.path(), oversized_string_cache()).unwrap();

    let (graph, source) = WordGraph::open(&words, Some(&cache));
    assert_eq!(source, GraphSource::Rebuilt);
    assert_eq!(graph.search("lead", "gold").unwrap().ladder().unwrap().len(), 5);
    assert!(cache.load_matching(words.fingerprint()).is_some());
}

#[test]
fn test_missing_cache_is_absent_not_error() {
    let dir = TempDir::new().unwrap();
    let cache = GraphCache::new(dir.path().join("nothing.bin.gz"));

    assert!(!cache.exists());
    assert!(cache.try_load().unwrap().is_none());
    assert!(cache.clear().is_ok());
}

#[test]
fn test_clear_removes_artifact() {
    let dir = TempDir::new().unwrap();
    let words = load(&write_words(&dir, WORDS));
    let cache = GraphCache::new(dir.path().join("graph.bin.gz"));

    WordGraph::precompute(&words, &cache).unwrap();
    assert!(cache.exists());
    cache.clear().unwrap();
    assert!(!cache.exists());
}

#[test]
fn test_json_snapshot_round_trip() {
    let words = WordList::from_words(["lead", "lad", "load"], &NormalizationConfig::default())
        .unwrap();
    let graph = WordGraph::build(&words);

    let mut buffer = Vec::new();
    JsonSerializer::serialize(&graph.snapshot(), &mut buffer).unwrap();
    let snapshot = JsonSerializer::deserialize(Cursor::new(buffer)).unwrap();

    assert!(snapshot.matches(words.fingerprint()));
    assert!(snapshot.is_consistent());
    assert_eq!(&snapshot.index, graph.index());
    assert_eq!(&snapshot.graph, graph.graph());
}
