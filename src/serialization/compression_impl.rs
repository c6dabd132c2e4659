//! Gzip compression wrapper for serializers.

use std::io::{Read, Write};

use super::{GraphSerializer, GraphSnapshot, SerializationError, SnapshotRef};

/// Gzip-compressed serializer wrapper.
///
/// Applies gzip compression to any underlying serializer. Adjacency lists of
/// small ids compress well, so the cache file is a fraction of the raw
/// bincode size.
///
/// # Example
///
/// ```rust,ignore
/// use word_ladder::serialization::{BincodeSerializer, GraphSerializer, GzipSerializer};
/// use std::fs::File;
///
/// let file = File::create("graph.bin.gz")?;
/// GzipSerializer::<BincodeSerializer>::serialize(&snapshot, file)?;
///
/// let file = File::open("graph.bin.gz")?;
/// let loaded = GzipSerializer::<BincodeSerializer>::deserialize(file)?;
/// ```
pub struct GzipSerializer<S> {
    _inner: std::marker::PhantomData<S>,
}

impl<S: GraphSerializer> GraphSerializer for GzipSerializer<S> {
    fn serialize<W>(snapshot: &SnapshotRef<'_>, writer: W) -> Result<(), SerializationError>
    where
        W: Write,
    {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(writer, Compression::default());
        S::serialize(snapshot, &mut encoder)?;
        encoder.finish().map_err(SerializationError::Io)?;
        Ok(())
    }

    fn deserialize<R>(reader: R) -> Result<GraphSnapshot, SerializationError>
    where
        R: Read,
    {
        use flate2::read::GzDecoder;

        let decoder = GzDecoder::new(reader);
        S::deserialize(decoder)
    }
}
