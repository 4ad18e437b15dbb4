use crate::error::BspError;

/// A single decoded field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bytes(Vec<u8>),
    Record(DecodedRecord),
    Array(Vec<Value>),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&DecodedRecord> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// A short name for the variant, used in error messages.
    fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bytes(_) => "bytes",
            Value::Record(_) => "record",
            Value::Array(_) => "array",
        }
    }
}

/// The fields decoded from one struct, in decode order.
///
/// Typed accessors return [`BspError::Schema`] when a field is missing or holds a
/// different kind of value, since that means the descriptor and its consumer disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedRecord {
    fields: Vec<(String, Value)>,
}

impl DecodedRecord {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &str, value: Value) {
        self.fields.push((name.to_string(), value));
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn int(&self, name: &str) -> Result<i64, BspError> {
        let value = self.require(name)?;
        value.as_int().ok_or_else(|| Self::mismatch(name, "int", value))
    }

    /// Reads an integer field that must fit in an `i32`.
    pub fn int32(&self, name: &str) -> Result<i32, BspError> {
        let value = self.int(name)?;
        i32::try_from(value)
            .map_err(|_| BspError::Schema(format!("Field '{name}' does not fit in i32: {value}")))
    }

    pub fn bytes(&self, name: &str) -> Result<&[u8], BspError> {
        let value = self.require(name)?;
        value
            .as_bytes()
            .ok_or_else(|| Self::mismatch(name, "bytes", value))
    }

    pub fn record(&self, name: &str) -> Result<&DecodedRecord, BspError> {
        let value = self.require(name)?;
        value
            .as_record()
            .ok_or_else(|| Self::mismatch(name, "record", value))
    }

    pub fn array(&self, name: &str) -> Result<&[Value], BspError> {
        let value = self.require(name)?;
        value
            .as_array()
            .ok_or_else(|| Self::mismatch(name, "array", value))
    }

    /// Iterates over `(name, value)` pairs in decode order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn require(&self, name: &str) -> Result<&Value, BspError> {
        self.get(name)
            .ok_or_else(|| BspError::Schema(format!("Missing field: {name}")))
    }

    fn mismatch(name: &str, expected: &str, found: &Value) -> BspError {
        BspError::Schema(format!(
            "Field '{name}' is {}, expected {expected}",
            found.kind()
        ))
    }
}
