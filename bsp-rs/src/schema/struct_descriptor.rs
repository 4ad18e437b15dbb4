use std::collections::HashSet;

use crate::{error::BspError, schema::type_descriptor::TypeDescriptor};

/// A single named field of a [`StructDescriptor`].
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// The name the decoded value is stored under.
    pub name: String,
    /// The layout of the field.
    pub ty: TypeDescriptor,
}

/// An ordered list of named fields. Field order is decode order.
#[derive(Debug, Clone, Default)]
pub struct StructDescriptor {
    fields: Vec<FieldDescriptor>,
}

impl StructDescriptor {
    /// Builds a descriptor from `(name, type)` pairs, rejecting duplicate names.
    pub fn new(fields: Vec<(&str, TypeDescriptor)>) -> Result<Self, BspError> {
        let mut seen = HashSet::new();
        let mut descriptor = StructDescriptor::default();
        for (name, ty) in fields {
            if !seen.insert(name) {
                return Err(BspError::Schema(format!("Duplicate field name: {name}")));
            }
            descriptor.fields.push(FieldDescriptor {
                name: name.to_string(),
                ty,
            });
        }
        Ok(descriptor)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the encoded size in bytes when no field depends on decoded data.
    pub fn fixed_size(&self) -> Option<usize> {
        self.fields
            .iter()
            .map(|field| field.ty.fixed_size())
            .sum::<Option<usize>>()
    }
}
