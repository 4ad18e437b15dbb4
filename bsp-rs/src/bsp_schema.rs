use std::sync::{Arc, OnceLock};

use crate::{
    bsp_header::LumpKind,
    error::BspError,
    schema::{DecodedRecord, StructDescriptor, TypeDescriptor},
};

/// The length of a miptex name on disk, including null padding.
pub const MIPTEX_NAME_LEN: usize = 16;

/// The read-only descriptors needed to decode a BSP file.
///
/// Build one with [`BspSchema::new`] or borrow the process-wide instance from
/// [`BspSchema::shared`]; decoders only ever take it by reference.
#[derive(Debug, Clone)]
pub struct BspSchema {
    /// A lump directory entry: `offset`, `size`.
    pub entry: Arc<StructDescriptor>,
    /// `version` followed by one entry per [`LumpKind`].
    pub header: StructDescriptor,
    /// One texture record inside the miptex lump.
    pub miptex: StructDescriptor,
    /// `num_miptex` followed by that many relative offsets.
    pub miptex_directory: StructDescriptor,
}

fn miptex_count(record: &DecodedRecord) -> Result<i64, BspError> {
    record.int("num_miptex")
}

impl BspSchema {
    pub fn new() -> Result<Self, BspError> {
        let entry = Arc::new(StructDescriptor::new(vec![
            ("offset", TypeDescriptor::int32()),
            ("size", TypeDescriptor::int32()),
        ])?);

        let mut header_fields = vec![("version", TypeDescriptor::int32())];
        header_fields.extend(
            LumpKind::ALL
                .iter()
                .map(|kind| (kind.name(), TypeDescriptor::Struct(entry.clone()))),
        );
        let header = StructDescriptor::new(header_fields)?;

        let miptex = StructDescriptor::new(vec![
            ("name", TypeDescriptor::FixedString(MIPTEX_NAME_LEN)),
            ("width", TypeDescriptor::int32()),
            ("height", TypeDescriptor::int32()),
            ("ofs1", TypeDescriptor::int32()),
            ("ofs2", TypeDescriptor::int32()),
            ("ofs3", TypeDescriptor::int32()),
            ("ofs4", TypeDescriptor::int32()),
        ])?;

        let miptex_directory = StructDescriptor::new(vec![
            ("num_miptex", TypeDescriptor::int32()),
            (
                "offsets",
                TypeDescriptor::array(TypeDescriptor::int32(), miptex_count),
            ),
        ])?;

        Ok(Self {
            entry,
            header,
            miptex,
            miptex_directory,
        })
    }

    /// Returns the schema shared by every decode session in the process.
    pub fn shared() -> Result<&'static BspSchema, BspError> {
        static SHARED: OnceLock<Result<BspSchema, String>> = OnceLock::new();
        SHARED
            .get_or_init(|| BspSchema::new().map_err(|err| err.to_string()))
            .as_ref()
            .map_err(|err| BspError::Schema(err.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsp_header::BSP_HEADER_SIZE;

    #[test]
    fn fixed_layouts_have_the_on_disk_sizes() {
        let schema = BspSchema::new().unwrap();
        assert_eq!(schema.entry.fixed_size(), Some(8));
        assert_eq!(schema.header.fixed_size(), Some(BSP_HEADER_SIZE));
        assert_eq!(schema.header.len(), 16);
        assert_eq!(schema.miptex.fixed_size(), Some(40));
        assert_eq!(schema.miptex_directory.fixed_size(), None);
    }

    #[test]
    fn shared_schema_is_built_once() {
        let a = BspSchema::shared().unwrap();
        let b = BspSchema::shared().unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
