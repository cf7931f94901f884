//! Wire-level property assignments.
//!
//! An [`Assignment`] is what gets persisted for a behavior instance: the
//! property's variable name plus a weakly-typed value. The value serializes
//! as a bare JSON scalar, array or `null`.

use serde::{Deserialize, Serialize};

/// A weakly-typed assignment value.
///
/// `Null` marks an unset value. It is meaningful for string shapes (an
/// unselected actor) and array shapes (read back as empty).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i32),
    Float(f32),
    String(String),
    IntegerArray(Vec<i32>),
    StringArray(Vec<String>),
}

impl WireValue {
    /// Returns the shape name of this value, for error messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            WireValue::Null => "null",
            WireValue::Bool(_) => "bool",
            WireValue::Integer(_) => "integer",
            WireValue::Float(_) => "float",
            WireValue::String(_) => "string",
            WireValue::IntegerArray(_) => "integer[]",
            WireValue::StringArray(_) => "string[]",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, WireValue::Null)
    }
}

/// A property value as stored for a behavior instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// The `variableName` of the property this value is for.
    pub property_name: String,
    #[serde(default)]
    pub value: WireValue,
}

impl Assignment {
    /// Creates an assignment for the named property.
    pub fn new(property_name: impl Into<String>, value: WireValue) -> Self {
        Self {
            property_name: property_name.into(),
            value,
        }
    }
}
