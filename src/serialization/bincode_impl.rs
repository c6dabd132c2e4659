//! Bincode serializer for compact binary format.

use std::io::{Read, Write};

use bincode::Options;

use super::{GraphSerializer, GraphSnapshot, SerializationError, SnapshotRef};

/// Upper bound on the encoded size of a snapshot.
///
/// Bincode allocates string and byte buffers at the length the input claims,
/// so a hostile length prefix must fail the decode instead of the allocator.
pub const MAX_SNAPSHOT_BYTES: u64 = 512 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_limit(MAX_SNAPSHOT_BYTES)
        .allow_trailing_bytes()
}

/// Bincode serializer for compact binary format.
///
/// Fast and small; this is what the on-disk cache uses. Encoding and
/// decoding are both capped at [`MAX_SNAPSHOT_BYTES`].
pub struct BincodeSerializer;

impl GraphSerializer for BincodeSerializer {
    fn serialize<W>(snapshot: &SnapshotRef<'_>, mut writer: W) -> Result<(), SerializationError>
    where
        W: Write,
    {
        options().serialize_into(&mut writer, snapshot)?;
        Ok(())
    }

    fn deserialize<R>(mut reader: R) -> Result<GraphSnapshot, SerializationError>
    where
        R: Read,
    {
        Ok(options().deserialize_from(&mut reader)?)
    }
}
