use std::fmt;

use serde_json::Value;

/// Runtime type tags for dynamically shaped option values.
///
/// The CLI hands helpers parsed JSON option values, so the supported tags
/// are exactly the JSON value shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl TypeTag {
    /// Determine the tag of a parsed value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => TypeTag::String,
            Value::Number(_) => TypeTag::Number,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
            Value::Null => TypeTag::Null,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::String => "String",
            TypeTag::Number => "Number",
            TypeTag::Boolean => "Boolean",
            TypeTag::Array => "Array",
            TypeTag::Object => "Object",
            TypeTag::Null => "Null",
        };
        f.write_str(name)
    }
}
