use byteorder::{ByteOrder, LittleEndian};

use crate::{error::BspError, schema::type_descriptor::IntWidth};

/// A positionable, little-endian reader over an immutable byte buffer.
///
/// Every read is bounds-checked before anything is consumed, so a failed read leaves
/// the position untouched.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    /// The underlying buffer.
    bytes: &'a [u8],
    /// The current read position.
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a new cursor positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Returns the current read position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the underlying buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the number of bytes left between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Sets the position directly. Seeking to the end is allowed, past it is not.
    pub fn seek(&mut self, offset: usize) -> Result<(), BspError> {
        if offset > self.bytes.len() {
            return Err(BspError::OutOfBounds {
                offset,
                len: 0,
                size: self.bytes.len(),
            });
        }
        self.position = offset;
        Ok(())
    }

    /// Reads exactly `count` raw bytes and advances past them.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], BspError> {
        let end = self
            .position
            .checked_add(count)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(BspError::OutOfBounds {
                offset: self.position,
                len: count,
                size: self.bytes.len(),
            })?;
        let bytes = &self.bytes[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    /// Reads a signed little-endian integer of the given width, sign-extended to `i64`.
    pub fn read_int(&mut self, width: IntWidth) -> Result<i64, BspError> {
        let bytes = self.read_bytes(width.bytes())?;
        let value = match width {
            IntWidth::I8 => bytes[0] as i8 as i64,
            IntWidth::I16 => LittleEndian::read_i16(bytes) as i64,
            IntWidth::I32 => LittleEndian::read_i32(bytes) as i64,
            IntWidth::I64 => LittleEndian::read_i64(bytes),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_signed_values() {
        let data = [0xFF, 0x34, 0x12, 0xFE, 0xFF, 0xFF, 0xFF];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_int(IntWidth::I8).unwrap(), -1);
        assert_eq!(cursor.read_int(IntWidth::I16).unwrap(), 0x1234);
        assert_eq!(cursor.read_int(IntWidth::I32).unwrap(), -2);
        assert_eq!(cursor.position(), 7);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn reads_eight_byte_integers() {
        let data = (-5i64).to_le_bytes();
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.read_int(IntWidth::I64).unwrap(), -5);
    }

    #[test]
    fn short_read_fails_without_advancing() {
        let data = [1, 2, 3];
        let mut cursor = ByteCursor::new(&data);
        cursor.seek(1).unwrap();
        let err = cursor.read_int(IntWidth::I32).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_bytes(2).unwrap(), &[2, 3]);
    }

    #[test]
    fn seek_to_end_is_allowed_but_reading_is_not() {
        let data = [0u8; 4];
        let mut cursor = ByteCursor::new(&data);
        assert_eq!(cursor.len(), 4);
        assert!(!cursor.is_empty());
        cursor.seek(4).unwrap();
        assert!(cursor.read_bytes(1).unwrap_err().is_out_of_bounds());
        assert!(cursor.read_bytes(0).unwrap().is_empty());
        assert!(cursor.seek(5).unwrap_err().is_out_of_bounds());
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn huge_reads_do_not_overflow() {
        let data = [0u8; 4];
        let mut cursor = ByteCursor::new(&data);
        cursor.seek(2).unwrap();
        assert!(cursor.read_bytes(usize::MAX).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn empty_buffer_only_allows_position_zero() {
        let mut cursor = ByteCursor::new(&[]);
        assert!(cursor.is_empty());
        assert!(cursor.seek(0).is_ok());
        assert!(cursor.read_int(IntWidth::I8).unwrap_err().is_out_of_bounds());
    }
}
