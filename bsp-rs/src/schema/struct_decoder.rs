use crate::{
    byte_cursor::ByteCursor,
    error::BspError,
    schema::{
        decoded_record::{DecodedRecord, Value},
        struct_descriptor::StructDescriptor,
        type_descriptor::TypeDescriptor,
    },
};

/// Interprets a [`StructDescriptor`] against a [`ByteCursor`].
///
/// Decoding is a single forward pass starting at the cursor's current position. Nested
/// structs are laid out inline, and array resolvers only ever see the fields decoded
/// before them in the same struct. Any failure aborts the whole decode.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructDecoder;

impl StructDecoder {
    pub fn new() -> Self {
        StructDecoder
    }

    /// Decodes one record described by `descriptor`.
    pub fn decode(
        &self,
        descriptor: &StructDescriptor,
        cursor: &mut ByteCursor,
    ) -> Result<DecodedRecord, BspError> {
        let mut record = DecodedRecord::new();
        for field in descriptor.fields() {
            let value = self.decode_value(&field.ty, &record, cursor)?;
            record.push(&field.name, value);
        }
        Ok(record)
    }

    fn decode_value(
        &self,
        ty: &TypeDescriptor,
        record: &DecodedRecord,
        cursor: &mut ByteCursor,
    ) -> Result<Value, BspError> {
        let value = match ty {
            TypeDescriptor::Int(width) => Value::Int(cursor.read_int(*width)?),
            TypeDescriptor::FixedString(len) => Value::Bytes(cursor.read_bytes(*len)?.to_vec()),
            TypeDescriptor::Struct(descriptor) => Value::Record(self.decode(descriptor, cursor)?),
            TypeDescriptor::Array(element, resolver) => {
                let count = resolver(record)?;
                let count = usize::try_from(count).map_err(|_| {
                    BspError::Schema(format!("Array length resolved to {count}"))
                })?;
                // Bound the preallocation by what the buffer could possibly hold
                let mut values = Vec::with_capacity(count.min(cursor.remaining()));
                for _ in 0..count {
                    values.push(self.decode_value(element, record, cursor)?);
                }
                Value::Array(values)
            }
        };
        Ok(value)
    }
}
