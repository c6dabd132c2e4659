//! On-disk cache of the precomputed signature graph.
//!
//! Building the adjacency graph for a full dictionary is the expensive part
//! of a run, so the (index, graph) pair is persisted to a single file and
//! restored on later runs. Only one generation is kept: every
//! [`GraphCache::store`] replaces the previous artifact whatever its
//! fingerprint.
//!
//! # File layout
//!
//! ```text
//! ┌──────────────┬────────────────┬─────────────────────────────────────┐
//! │ "WLADDER\0"  │ version: u16 LE│ gzip(bincode(GraphSnapshot))        │
//! │   8 bytes    │    2 bytes     │ (plain bincode without compression) │
//! └──────────────┴────────────────┴─────────────────────────────────────┘
//! ```
//!
//! # Failure semantics
//!
//! [`GraphCache::load`] never fails: a missing, truncated, foreign, or
//! inconsistent file is reported as absent (and logged), and the caller
//! rebuilds. Deciding whether a loaded snapshot is still valid is the
//! caller's job: compare its fingerprint with the current word list's, or
//! use [`GraphCache::load_matching`].

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::dictionary::Fingerprint;
use crate::graph::AdjacencyGraph;
use crate::serialization::{
    BincodeSerializer, GraphSerializer, GraphSnapshot, SerializationError, SnapshotRef,
};
use crate::signature::SignatureIndex;

#[cfg(feature = "compression")]
use crate::serialization::GzipSerializer;

/// Leading bytes of every cache file.
pub const CACHE_MAGIC: &[u8; 8] = b"WLADDER\0";

/// Layout version; bumped whenever the snapshot encoding changes.
#[cfg(feature = "compression")]
pub const CACHE_VERSION: u16 = 1;
/// Layout version; bumped whenever the snapshot encoding changes.
#[cfg(not(feature = "compression"))]
pub const CACHE_VERSION: u16 = 0x8001;

#[cfg(feature = "compression")]
type CacheCodec = GzipSerializer<BincodeSerializer>;
#[cfg(not(feature = "compression"))]
type CacheCodec = BincodeSerializer;

/// Errors from reading or writing the cache file.
///
/// Only [`GraphCache::store`], [`GraphCache::try_load`] and
/// [`GraphCache::clear`] return these; [`GraphCache::load`] absorbs them.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The file could not be opened, read, written, or renamed
    #[error("I/O error on cache file {}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
    /// The snapshot could not be encoded or decoded
    #[error("cache encoding error")]
    Serialization(#[from] SerializationError),
    /// The file does not start with [`CACHE_MAGIC`]
    #[error("not a word-ladder cache file")]
    BadMagic,
    /// The file was written by an incompatible version
    #[error("unsupported cache version {found} (expected {expected})")]
    Version {
        /// Version in the file
        found: u16,
        /// Version this build writes
        expected: u16,
    },
    /// The decoded index and graph violate their invariants
    #[error("cache contents are inconsistent")]
    Inconsistent,
}

/// Handle to the single cache artifact at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphCache {
    path: PathBuf,
}

impl GraphCache {
    /// Cache stored at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Location of the artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether an artifact file exists (it may still be unreadable).
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(path: &Path) -> impl FnOnce(io::Error) -> CacheError + '_ {
        move |source| CacheError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Persist the index and graph, replacing any previous artifact.
    ///
    /// The snapshot is written to a sibling `.tmp` file and renamed over the
    /// artifact, so a failed write leaves the previous artifact (or none)
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the file cannot be written.
    pub fn store(
        &self,
        index: &SignatureIndex,
        graph: &AdjacencyGraph,
        fingerprint: &Fingerprint,
    ) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(Self::io_error(parent))?;
        }

        let temp = self.temp_path();
        let result = self.write_snapshot(&temp, index, graph, fingerprint);
        if let Err(e) = result {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(Self::io_error(&self.path)(e));
        }
        info!(
            path = %self.path.display(),
            %fingerprint,
            signatures = index.len(),
            edges = graph.edge_count(),
            "graph cache stored"
        );
        Ok(())
    }

    fn write_snapshot(
        &self,
        temp: &Path,
        index: &SignatureIndex,
        graph: &AdjacencyGraph,
        fingerprint: &Fingerprint,
    ) -> Result<(), CacheError> {
        let file = File::create(temp).map_err(Self::io_error(temp))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(CACHE_MAGIC)
            .and_then(|_| writer.write_all(&CACHE_VERSION.to_le_bytes()))
            .map_err(Self::io_error(temp))?;

        let view = SnapshotRef {
            fingerprint,
            index,
            graph,
        };
        CacheCodec::serialize(&view, &mut writer)?;

        let file = writer
            .into_inner()
            .map_err(|e| Self::io_error(temp)(e.into_error()))?;
        file.sync_all().map_err(Self::io_error(temp))?;
        Ok(())
    }

    /// Read the artifact, surfacing every failure.
    ///
    /// Returns `Ok(None)` only when no artifact exists.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] for unreadable, foreign, outdated, corrupt, or
    /// inconsistent artifacts.
    pub fn try_load(&self) -> Result<Option<GraphSnapshot>, CacheError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::io_error(&self.path)(e)),
        };
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 8];
        match reader.read_exact(&mut magic) {
            Ok(()) if &magic == CACHE_MAGIC => {}
            Ok(()) => return Err(CacheError::BadMagic),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(CacheError::BadMagic)
            }
            Err(e) => return Err(Self::io_error(&self.path)(e)),
        }

        let mut version = [0u8; 2];
        reader
            .read_exact(&mut version)
            .map_err(Self::io_error(&self.path))?;
        let found = u16::from_le_bytes(version);
        if found != CACHE_VERSION {
            return Err(CacheError::Version {
                found,
                expected: CACHE_VERSION,
            });
        }

        let snapshot = CacheCodec::deserialize(reader)?;
        if !snapshot.is_consistent() {
            return Err(CacheError::Inconsistent);
        }
        Ok(Some(snapshot))
    }

    /// Read the artifact, treating any failure as "absent".
    pub fn load(&self) -> Option<GraphSnapshot> {
        match self.try_load() {
            Ok(Some(snapshot)) => {
                debug!(
                    path = %self.path.display(),
                    fingerprint = %snapshot.fingerprint,
                    "graph cache loaded"
                );
                Some(snapshot)
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no graph cache");
                None
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable graph cache");
                None
            }
        }
    }

    /// Load the artifact only if it was built from `fingerprint`.
    pub fn load_matching(
        &self,
        fingerprint: &Fingerprint,
    ) -> Option<(SignatureIndex, AdjacencyGraph)> {
        let snapshot = self.load()?;
        if !snapshot.matches(fingerprint) {
            info!(
                cached = %snapshot.fingerprint,
                current = %fingerprint,
                "graph cache is stale"
            );
            return None;
        }
        Some((snapshot.index, snapshot.graph))
    }

    /// Delete the artifact. Missing files are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] if an existing file cannot be removed.
    pub fn clear(&self) -> Result<(), CacheError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(&self.path)(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::NormalizationConfig;
    use crate::graph::AdjacencyBuilder;
    use tempfile::TempDir;

    fn parts(words: &[&str]) -> (SignatureIndex, AdjacencyGraph, Fingerprint) {
        let index = SignatureIndex::from_words(words.iter().copied());
        let graph = AdjacencyBuilder::new(&index).build();
        let fingerprint =
            Fingerprint::of_source(words.join("\n").as_bytes(), &NormalizationConfig::default());
        (index, graph, fingerprint)
    }

    #[test]
    fn test_store_then_load() {
        let dir = TempDir::new().unwrap();
        let cache = GraphCache::new(dir.path().join("graph.bin.gz"));
        let (index, graph, fingerprint) = parts(&["lead", "lad", "load"]);

        cache.store(&index, &graph, &fingerprint).unwrap();
        let snapshot = cache.load().unwrap();

        assert_eq!(snapshot.fingerprint, fingerprint);
        assert_eq!(snapshot.index, index);
        assert_eq!(snapshot.graph, graph);
        assert!(!cache.temp_path().exists());
    }

    #[test]
    fn test_missing_is_absent() {
        let dir = TempDir::new().unwrap();
        let cache = GraphCache::new(dir.path().join("none.bin.gz"));
        assert!(cache.load().is_none());
        assert!(matches!(cache.try_load(), Ok(None)));
    }

    #[test]
    fn test_store_overwrites_other_fingerprint() {
        let dir = TempDir::new().unwrap();
        let cache = GraphCache::new(dir.path().join("graph.bin.gz"));
        let (i1, g1, f1) = parts(&["lead", "lad"]);
        let (i2, g2, f2) = parts(&["old", "gold"]);

        cache.store(&i1, &g1, &f1).unwrap();
        cache.store(&i2, &g2, &f2).unwrap();

        let snapshot = cache.load().unwrap();
        assert_eq!(snapshot.fingerprint, f2);
        assert_eq!(snapshot.index, i2);
        assert!(cache.load_matching(&f1).is_none());
        assert!(cache.load_matching(&f2).is_some());
    }

    #[test]
    fn test_garbage_is_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.bin.gz");
        fs::write(&path, b"definitely not a cache").unwrap();

        let cache = GraphCache::new(&path);
        assert!(cache.load().is_none());
        assert!(matches!(cache.try_load(), Err(CacheError::BadMagic)));
    }

    #[test]
    fn test_short_file_is_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.bin.gz");
        fs::write(&path, b"WL").unwrap();

        assert!(GraphCache::new(&path).load().is_none());
    }

    #[test]
    fn test_wrong_version_is_absent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.bin.gz");
        let mut bytes = CACHE_MAGIC.to_vec();
        bytes.extend_from_slice(&(CACHE_VERSION + 1).to_le_bytes());
        fs::write(&path, bytes).unwrap();

        let cache = GraphCache::new(&path);
        assert!(matches!(cache.try_load(), Err(CacheError::Version { .. })));
        assert!(cache.load().is_none());
    }

    #[test]
    fn test_truncated_payload_is_absent() {
        let dir = TempDir::new().unwrap();
        let cache = GraphCache::new(dir.path().join("graph.bin.gz"));
        let (index, graph, fingerprint) = parts(&["lead", "lad", "load", "old", "gold"]);
        cache.store(&index, &graph, &fingerprint).unwrap();

        let bytes = fs::read(cache.path()).unwrap();
        fs::write(cache.path(), &bytes[..bytes.len() / 2]).unwrap();

        assert!(cache.load().is_none());
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let cache = GraphCache::new(dir.path().join("nested").join("deeper").join("graph.bin.gz"));
        let (index, graph, fingerprint) = parts(&["a", "at"]);

        cache.store(&index, &graph, &fingerprint).unwrap();
        assert!(cache.exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.bin.gz");
        // a non-empty directory in the way makes the final rename fail
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), b"x").unwrap();

        let cache = GraphCache::new(&path);
        let (index, graph, fingerprint) = parts(&["a", "at"]);

        assert!(matches!(
            cache.store(&index, &graph, &fingerprint),
            Err(CacheError::Io { .. })
        ));
        assert!(!cache.temp_path().exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let cache = GraphCache::new(dir.path().join("graph.bin.gz"));
        let (index, graph, fingerprint) = parts(&["a", "at"]);

        cache.store(&index, &graph, &fingerprint).unwrap();
        cache.clear().unwrap();
        assert!(!cache.exists());
        cache.clear().unwrap();
    }
}
