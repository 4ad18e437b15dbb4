/// Represents all possible errors that can occur while decoding a BSP file.
///
/// Corrupt miptex records are deliberately absent here: they are recoverable and are
/// reported through a [`DiagnosticSink`](crate::diagnostics::DiagnosticSink) instead.
#[derive(Debug)]
pub enum BspError {
    /// A read or seek fell outside the buffer.
    OutOfBounds {
        /// The position the access started at.
        offset: usize,
        /// The number of bytes requested (0 for a seek).
        len: usize,
        /// The total size of the buffer.
        size: usize,
    },
    /// A descriptor is malformed. This is a programming error, not bad input.
    Schema(String),
    /// Represents an error that occurs while reading the file from disk.
    Io(std::io::Error),
}

impl std::fmt::Display for BspError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BspError::OutOfBounds { offset, len, size } => write!(
                f,
                "Out of bounds: {len} bytes at offset {offset} exceeds buffer of {size} bytes"
            ),
            BspError::Schema(err) => write!(f, "Schema error: {err}"),
            BspError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for BspError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BspError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Allows automatic conversion from `std::io::Error` to `BspError`.
impl From<std::io::Error> for BspError {
    fn from(error: std::io::Error) -> Self {
        BspError::Io(error)
    }
}

impl BspError {
    /// Returns `true` if this error was caused by the buffer being too short.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, BspError::OutOfBounds { .. })
    }
}
