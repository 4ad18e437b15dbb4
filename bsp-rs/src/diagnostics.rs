//! Non-fatal anomalies found while decoding, and the sinks that receive them.

use std::fmt;
use std::sync::Mutex;

use tracing::warn;

/// A recoverable anomaly. Decoding continues after one is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A miptex record whose name is empty after trimming. The record is dropped from
    /// the directory.
    CorruptMiptex {
        /// Position of the record in the raw offset table.
        index: usize,
        /// Absolute file offset the record was read from.
        offset: usize,
        /// The untrimmed name bytes.
        raw_name: Vec<u8>,
    },
}

impl Diagnostic {
    /// The decoder that raised the diagnostic.
    pub fn component(&self) -> &'static str {
        match self {
            Diagnostic::CorruptMiptex { .. } => "miptex_directory",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::CorruptMiptex {
                index,
                offset,
                raw_name,
            } => write!(
                f,
                "BSP miptex entry at index {index} (offset {offset}) is unreadable. Name: {}",
                hex::encode(raw_name)
            ),
        }
    }
}

/// Receives diagnostics from the decoders.
///
/// Implementations must not panic or block; reporting is best effort.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::CorruptMiptex {
                index,
                offset,
                raw_name,
            } => warn!(
                component = diagnostic.component(),
                index,
                offset,
                raw_name = %hex::encode(raw_name),
                "{diagnostic}"
            ),
        }
    }
}

/// Keeps every reported diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the diagnostics reported so far, in report order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic.clone());
    }
}
