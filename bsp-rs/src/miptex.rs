use tracing::debug;

use crate::{
    bsp_header::BspHeader,
    bsp_schema::BspSchema,
    byte_cursor::ByteCursor,
    diagnostics::{Diagnostic, DiagnosticSink},
    error::BspError,
    schema::{DecodedRecord, StructDecoder},
    utility::null_string::trim_null_terminated,
};

/// A texture record as stored in the miptex lump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiptexRecord {
    /// The null-padded name, untrimmed.
    pub name: Vec<u8>,
    pub width: i32,
    pub height: i32,
    /// Offsets of the four mip levels' pixel data, relative to the record.
    pub offsets: [i32; 4],
}

impl MiptexRecord {
    fn from_record(record: &DecodedRecord) -> Result<Self, BspError> {
        Ok(Self {
            name: record.bytes("name")?.to_vec(),
            width: record.int32("width")?,
            height: record.int32("height")?,
            offsets: [
                record.int32("ofs1")?,
                record.int32("ofs2")?,
                record.int32("ofs3")?,
                record.int32("ofs4")?,
            ],
        })
    }
}

/// The compacted texture directory of a BSP file.
pub type MiptexDirectory = Vec<MiptexDirectoryEntry>;

/// One texture in the final, compacted miptex directory.
///
/// The layout mirrors a WAD directory entry so the textures can be listed alongside
/// those from texture packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiptexDirectoryEntry {
    /// Absolute file offset of the miptex record.
    pub offset: usize,
    /// Pixel count of the base mip level (`width * height`).
    pub dsize: i64,
    /// Same as `dsize`; textures inside a BSP are never compressed.
    pub size: i64,
    /// Always [`MiptexDirectoryEntry::TYPE_MIPTEX`].
    pub entry_type: u8,
    /// Always [`MiptexDirectoryEntry::COMPRESSION_NONE`].
    pub compression: u8,
    /// The trimmed texture name. Never empty.
    pub name: String,
}

impl MiptexDirectoryEntry {
    /// The WAD lump type tag for a mip texture (`'D'`).
    pub const TYPE_MIPTEX: u8 = b'D';
    pub const COMPRESSION_NONE: u8 = 0;

    fn new(offset: usize, record: &MiptexRecord, name: String) -> Self {
        let pixels = record.width as i64 * record.height as i64;
        Self {
            offset,
            dsize: pixels,
            size: pixels,
            entry_type: Self::TYPE_MIPTEX,
            compression: Self::COMPRESSION_NONE,
            name,
        }
    }
}

/// Decodes the texture directory stored in the miptex lump.
pub struct MiptexDirectoryDecoder<'a> {
    schema: &'a BspSchema,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> MiptexDirectoryDecoder<'a> {
    pub fn new(schema: &'a BspSchema, sink: &'a dyn DiagnosticSink) -> Self {
        Self { schema, sink }
    }

    /// Decodes every texture listed in the miptex lump.
    ///
    /// Records whose name is empty after trimming are reported to the sink and
    /// skipped. The result holds only the valid records, in their original relative
    /// order, with no gaps.
    pub fn decode(
        &self,
        cursor: &mut ByteCursor,
        header: &BspHeader,
    ) -> Result<MiptexDirectory, BspError> {
        let decoder = StructDecoder::new();
        let base = header.miptex().offset as i64;
        cursor.seek(Self::absolute_offset(cursor, base, 0)?)?;

        let raw = decoder.decode(&self.schema.miptex_directory, cursor)?;
        let listed = raw.int("num_miptex")?;
        let offsets = raw
            .array("offsets")?
            .iter()
            .map(|value| {
                value
                    .as_int()
                    .ok_or_else(|| BspError::Schema("Miptex offset is not an int".to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut directory = Vec::with_capacity(offsets.len());
        for (index, relative) in offsets.into_iter().enumerate() {
            let offset = Self::absolute_offset(cursor, base, relative)?;
            cursor.seek(offset)?;
            let record =
                MiptexRecord::from_record(&decoder.decode(&self.schema.miptex, cursor)?)?;

            let name = trim_null_terminated(&record.name);
            if name.is_empty() {
                self.sink.report(&Diagnostic::CorruptMiptex {
                    index,
                    offset,
                    raw_name: record.name,
                });
                continue;
            }
            directory.push(MiptexDirectoryEntry::new(offset, &record, name));
        }

        debug!(
            listed,
            decoded = directory.len(),
            "Decoded miptex directory"
        );
        Ok(directory)
    }

    /// Resolves `base + relative`. A target before the start of the buffer is out of
    /// bounds just like one past its end.
    fn absolute_offset(cursor: &ByteCursor, base: i64, relative: i64) -> Result<usize, BspError> {
        usize::try_from(base + relative).map_err(|_| BspError::OutOfBounds {
            offset: 0,
            len: 0,
            size: cursor.len(),
        })
    }
}
