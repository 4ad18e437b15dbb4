use std::{fmt, fs, path::Path};

use tracing::debug;

use crate::{
    bsp_header::BspHeader,
    bsp_schema::BspSchema,
    byte_cursor::ByteCursor,
    diagnostics::{DiagnosticSink, TracingSink},
    error::BspError,
    miptex::{MiptexDirectory, MiptexDirectoryDecoder},
};

/// A decoded BSP level file.
///
/// Only the header, the lump directory and the texture directory are decoded; the
/// remaining lumps are located by [`BspHeader::lump`] but left untouched.
///
/// ```rust,no_run
/// use bsp_rs::bsp::Bsp;
///
/// let bsp = Bsp::open("maps/e1m1.bsp").unwrap();
/// println!("{bsp}");
/// for texture in &bsp.miptex_directory {
///     println!("{} ({} pixels)", texture.name, texture.size);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bsp {
    /// The final component of the path the file was loaded from.
    pub filename: String,
    pub header: BspHeader,
    /// Valid textures only, densely packed.
    pub miptex_directory: MiptexDirectory,
}

impl Bsp {
    /// Reads the whole file into memory and decodes it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BspError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        Self::from_bytes(path, &bytes)
    }

    /// Decodes an in-memory file. `path` is only used to derive [`Bsp::filename`].
    pub fn from_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<Self, BspError> {
        Self::from_bytes_with_sink(path, bytes, &TracingSink)
    }

    /// Decodes an in-memory file, reporting corrupt textures to `sink`.
    pub fn from_bytes_with_sink<P: AsRef<Path>>(
        path: P,
        bytes: &[u8],
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, BspError> {
        let filename = path
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(filename = %filename, size = bytes.len(), "Decoding BSP");

        let schema = BspSchema::shared()?;
        let mut cursor = ByteCursor::new(bytes);
        let header = BspHeader::decode(&mut cursor, schema)?;
        let miptex_directory =
            MiptexDirectoryDecoder::new(schema, sink).decode(&mut cursor, &header)?;

        Ok(Self {
            filename,
            header,
            miptex_directory,
        })
    }
}

impl fmt::Display for Bsp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BSP: '{}' Version {}, {} miptex in lump",
            self.filename,
            self.header.version,
            self.miptex_directory.len()
        )
    }
}
