//! A small declarative schema language for little-endian binary structs.
//!
//! A [`StructDescriptor`] lists named fields; [`StructDecoder`] walks it against a
//! [`ByteCursor`](crate::byte_cursor::ByteCursor) and yields a [`DecodedRecord`].
//! Arrays may size themselves from fields decoded earlier in the same struct.

pub mod decoded_record;
pub mod struct_decoder;
pub mod struct_descriptor;
pub mod type_descriptor;

pub use decoded_record::{DecodedRecord, Value};
pub use struct_decoder::StructDecoder;
pub use struct_descriptor::{FieldDescriptor, StructDescriptor};
pub use type_descriptor::{IntWidth, LengthResolver, TypeDescriptor};
