use std::sync::Arc;

use crate::{
    error::BspError,
    schema::{decoded_record::DecodedRecord, struct_descriptor::StructDescriptor},
};

/// Computes the element count of a dynamic array from the fields decoded before it.
///
/// Resolvers are part of the schema, so a failing or negative result is reported as
/// [`BspError::Schema`] rather than as bad input.
pub type LengthResolver = fn(&DecodedRecord) -> Result<i64, BspError>;

/// The width of a signed little-endian integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum IntWidth {
    I8 = 1,
    I16 = 2,
    I32 = 4,
    I64 = 8,
}

impl IntWidth {
    /// Returns the number of bytes the integer occupies.
    pub fn bytes(self) -> usize {
        self as usize
    }
}

/// Describes how a single field is laid out in the buffer.
#[derive(Debug, Clone)]
pub enum TypeDescriptor {
    /// A signed little-endian integer.
    Int(IntWidth),
    /// Exactly `n` raw bytes. Trimming and text decoding are left to the caller.
    FixedString(usize),
    /// A nested struct, decoded inline at the current position.
    Struct(Arc<StructDescriptor>),
    /// A run of elements whose count is computed from earlier sibling fields.
    Array(Box<TypeDescriptor>, LengthResolver),
}

impl TypeDescriptor {
    pub fn int32() -> Self {
        TypeDescriptor::Int(IntWidth::I32)
    }

    /// Creates a dynamic array of `element` sized by `resolver`.
    pub fn array(element: TypeDescriptor, resolver: LengthResolver) -> Self {
        TypeDescriptor::Array(Box::new(element), resolver)
    }

    /// Returns the encoded size in bytes, or `None` if the size depends on decoded data.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            TypeDescriptor::Int(width) => Some(width.bytes()),
            TypeDescriptor::FixedString(len) => Some(*len),
            TypeDescriptor::Struct(descriptor) => descriptor.fixed_size(),
            TypeDescriptor::Array(..) => None,
        }
    }
}
