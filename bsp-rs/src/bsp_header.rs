use tracing::debug;

use crate::{
    bsp_schema::BspSchema,
    byte_cursor::ByteCursor,
    error::BspError,
    schema::{DecodedRecord, StructDecoder},
};

/// The number of lumps listed in the header.
pub const LUMP_COUNT: usize = 15;

/// The size of the header in bytes: the version plus one `{offset, size}` pair per lump.
pub const BSP_HEADER_SIZE: usize = 4 + LUMP_COUNT * 8;

/// Identifies a lump in the header's directory, in on-disk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LumpKind {
    Entities = 0,
    Planes = 1,
    Miptex = 2,
    Vertices = 3,
    Visilist = 4,
    Nodes = 5,
    Texinfo = 6,
    Faces = 7,
    Lightmaps = 8,
    Clipnodes = 9,
    Leaves = 10,
    Lface = 11,
    Edges = 12,
    Ledges = 13,
    Models = 14,
}

impl LumpKind {
    /// Every lump, in the order it appears in the header.
    pub const ALL: [LumpKind; LUMP_COUNT] = [
        LumpKind::Entities,
        LumpKind::Planes,
        LumpKind::Miptex,
        LumpKind::Vertices,
        LumpKind::Visilist,
        LumpKind::Nodes,
        LumpKind::Texinfo,
        LumpKind::Faces,
        LumpKind::Lightmaps,
        LumpKind::Clipnodes,
        LumpKind::Leaves,
        LumpKind::Lface,
        LumpKind::Edges,
        LumpKind::Ledges,
        LumpKind::Models,
    ];

    /// The position of this lump in the header directory.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The field name used for this lump in the header descriptor.
    pub fn name(self) -> &'static str {
        match self {
            LumpKind::Entities => "entities",
            LumpKind::Planes => "planes",
            LumpKind::Miptex => "miptex",
            LumpKind::Vertices => "vertices",
            LumpKind::Visilist => "visilist",
            LumpKind::Nodes => "nodes",
            LumpKind::Texinfo => "texinfo",
            LumpKind::Faces => "faces",
            LumpKind::Lightmaps => "lightmaps",
            LumpKind::Clipnodes => "clipnodes",
            LumpKind::Leaves => "leaves",
            LumpKind::Lface => "lface",
            LumpKind::Edges => "edges",
            LumpKind::Ledges => "ledges",
            LumpKind::Models => "models",
        }
    }
}

/// A lump directory entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Lump {
    /// Absolute byte offset of the lump in the file.
    pub offset: i32,
    /// Length of the lump in bytes.
    pub size: i32,
}

impl Lump {
    fn from_record(record: &DecodedRecord) -> Result<Self, BspError> {
        Ok(Self {
            offset: record.int32("offset")?,
            size: record.int32("size")?,
        })
    }
}

/// The BSP file header: format version and the lump directory.
///
/// Neither the version nor the lump offsets are validated; that is left to consumers
/// so format variants still decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BspHeader {
    /// The format version (29 for Quake).
    pub version: i32,
    /// The lump directory, indexed by [`LumpKind::index`].
    pub lumps: [Lump; LUMP_COUNT],
}

impl BspHeader {
    /// Decodes the header from the start of the buffer.
    ///
    /// The cursor is moved to offset 0 first and is left just past the header.
    pub fn decode(cursor: &mut ByteCursor, schema: &BspSchema) -> Result<Self, BspError> {
        cursor.seek(0)?;
        let record = StructDecoder::new().decode(&schema.header, cursor)?;
        let header = Self::from_record(&record)?;
        debug!(
            version = header.version,
            miptex_offset = header.miptex().offset,
            "Decoded BSP header"
        );
        Ok(header)
    }

    fn from_record(record: &DecodedRecord) -> Result<Self, BspError> {
        let mut lumps = [Lump::default(); LUMP_COUNT];
        for kind in LumpKind::ALL {
            lumps[kind.index()] = Lump::from_record(record.record(kind.name())?)?;
        }
        Ok(Self {
            version: record.int32("version")?,
            lumps,
        })
    }

    pub fn lump(&self, kind: LumpKind) -> Lump {
        self.lumps[kind.index()]
    }

    pub fn miptex(&self) -> Lump {
        self.lump(LumpKind::Miptex)
    }
}
