//! JSON serializer for human-readable format.

use std::io::{Read, Write};

use super::{GraphSerializer, GraphSnapshot, SerializationError, SnapshotRef};

/// JSON serializer for human-readable format.
///
/// Useful for inspecting a small graph by hand; much larger and slower than
/// bincode for a full dictionary.
pub struct JsonSerializer;

impl GraphSerializer for JsonSerializer {
    fn serialize<W>(snapshot: &SnapshotRef<'_>, mut writer: W) -> Result<(), SerializationError>
    where
        W: Write,
    {
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        Ok(())
    }

    fn deserialize<R>(mut reader: R) -> Result<GraphSnapshot, SerializationError>
    where
        R: Read,
    {
        Ok(serde_json::from_reader(&mut reader)?)
    }
}
