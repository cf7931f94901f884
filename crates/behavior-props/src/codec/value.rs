//! Conversions between assignments and editor values.
//!
//! Every conversion dispatches on the closed [`PropType`] set, so adding a
//! kind fails to compile until each direction handles it.

use crate::codec::Editable;
use crate::error::AssignmentError;
use crate::model::{Assignment, PropType, PropValue, WireType, WireValue};

// =============================================================================
// ASSIGNMENT -> EDITOR
// =============================================================================

/// Extracts the editor value for `prop_type` from an assignment.
///
/// Null or missing arrays become empty arrays. An unselected actor stays
/// `None`; other string kinds read a null as "". An integer is accepted
/// where a float is expected, and an empty array is accepted for either
/// array shape, since JSON cannot tell these apart.
pub fn assignment_to_value(
    assignment: Assignment,
    prop_type: PropType,
) -> Result<PropValue, AssignmentError> {
    let Assignment { property_name, value } = assignment;

    let result = match prop_type {
        PropType::Number => take_integer(value).map(PropValue::Number),
        PropType::Decimal => take_float(value).map(PropValue::Decimal),
        PropType::Boolean => take_bool(value).map(PropValue::Boolean),
        PropType::Actor => take_optional_text(value).map(PropValue::Actor),
        PropType::String => take_text(value).map(PropValue::String),
        PropType::CardDeck => take_strings(value).map(PropValue::CardDeck),
        PropType::Prefab => take_text(value).map(PropValue::Prefab),
        PropType::Sound => take_text(value).map(PropValue::Sound),
        PropType::ParticleEffect => take_text(value).map(PropValue::ParticleEffect),
        PropType::ActorGroup => take_text(value).map(PropValue::ActorGroup),
        PropType::Image => take_text(value).map(PropValue::Image),
        PropType::Color => take_text(value).map(PropValue::Color),
        PropType::Enum => take_text(value).map(PropValue::Enum),
        PropType::NumberArray => take_integers(value).map(PropValue::NumberArray),
        PropType::StringArray => take_strings(value).map(PropValue::StringArray),
        PropType::EnumArray => take_strings(value).map(PropValue::EnumArray),
        PropType::ActorArray => take_strings(value).map(PropValue::ActorArray),
    };

    result.map_err(|found| AssignmentError::ShapeMismatch {
        property: property_name,
        expected: prop_type.wire_type(),
        found,
    })
}

fn take_integer(value: WireValue) -> Result<i32, &'static str> {
    match value {
        WireValue::Integer(v) => Ok(v),
        other => Err(other.shape_name()),
    }
}

fn take_float(value: WireValue) -> Result<f32, &'static str> {
    match value {
        WireValue::Float(v) => Ok(v),
        WireValue::Integer(v) => Ok(v as f32),
        other => Err(other.shape_name()),
    }
}

fn take_bool(value: WireValue) -> Result<bool, &'static str> {
    match value {
        WireValue::Bool(v) => Ok(v),
        other => Err(other.shape_name()),
    }
}

fn take_optional_text(value: WireValue) -> Result<Option<String>, &'static str> {
    match value {
        WireValue::String(v) => Ok(Some(v)),
        WireValue::Null => Ok(None),
        other => Err(other.shape_name()),
    }
}

fn take_text(value: WireValue) -> Result<String, &'static str> {
    take_optional_text(value).map(Option::unwrap_or_default)
}

fn take_strings(value: WireValue) -> Result<Vec<String>, &'static str> {
    match value {
        WireValue::StringArray(v) => Ok(v),
        WireValue::Null => Ok(Vec::new()),
        WireValue::IntegerArray(v) if v.is_empty() => Ok(Vec::new()),
        other => Err(other.shape_name()),
    }
}

fn take_integers(value: WireValue) -> Result<Vec<i32>, &'static str> {
    match value {
        WireValue::IntegerArray(v) => Ok(v),
        WireValue::Null => Ok(Vec::new()),
        WireValue::StringArray(v) if v.is_empty() => Ok(Vec::new()),
        other => Err(other.shape_name()),
    }
}

// =============================================================================
// EDITOR -> ASSIGNMENT
// =============================================================================

/// Converts an editor value to its wire form.
///
/// An unselected actor becomes `Null`, never "".
pub fn to_wire_value(value: &PropValue) -> WireValue {
    match value {
        PropValue::Number(v) => WireValue::Integer(*v),
        PropValue::Decimal(v) => WireValue::Float(*v),
        PropValue::Boolean(v) => WireValue::Bool(*v),
        PropValue::Actor(None) => WireValue::Null,
        PropValue::Actor(Some(v)) => WireValue::String(v.clone()),
        PropValue::String(v)
        | PropValue::Prefab(v)
        | PropValue::Sound(v)
        | PropValue::ParticleEffect(v)
        | PropValue::ActorGroup(v)
        | PropValue::Image(v)
        | PropValue::Color(v)
        | PropValue::Enum(v) => WireValue::String(v.clone()),
        PropValue::CardDeck(v)
        | PropValue::StringArray(v)
        | PropValue::EnumArray(v)
        | PropValue::ActorArray(v) => WireValue::StringArray(v.clone()),
        PropValue::NumberArray(v) => WireValue::IntegerArray(v.clone()),
    }
}

/// Builds the assignment for an edited property, keyed by its variable name.
///
/// Fails if the editor holds a value of a different kind than the property
/// declares.
pub fn value_to_assignment(editable: &Editable) -> Result<Assignment, AssignmentError> {
    let found = editable.data.prop_type();
    if found != editable.prop_type {
        return Err(AssignmentError::KindMismatch {
            property: editable.def.variable_name.clone(),
            declared: editable.prop_type,
            found,
        });
    }

    Ok(Assignment::new(
        editable.def.variable_name.clone(),
        to_wire_value(&editable.data),
    ))
}

/// Converts every edited property to an assignment, preserving order.
///
/// Duplicate variable names produce duplicate assignments.
pub fn serialize_all(editables: &[Editable]) -> Result<Vec<Assignment>, AssignmentError> {
    editables.iter().map(Editable::to_assignment).collect()
}

// =============================================================================
// SHAPES AND DEFAULTS
// =============================================================================

/// Returns the wire shape used to store values of `prop_type`.
pub fn expected_wire_type(prop_type: PropType) -> WireType {
    prop_type.wire_type()
}

/// Returns the structural default editor value for `prop_type`.
pub fn default_value(prop_type: PropType) -> PropValue {
    match prop_type {
        PropType::Number => PropValue::Number(0),
        PropType::Decimal => PropValue::Decimal(1.0),
        PropType::Boolean => PropValue::Boolean(false),
        PropType::Actor => PropValue::Actor(None),
        PropType::String => PropValue::String(String::new()),
        PropType::CardDeck => PropValue::CardDeck(Vec::new()),
        PropType::Prefab => PropValue::Prefab(String::new()),
        PropType::Sound => PropValue::Sound(String::new()),
        PropType::ParticleEffect => PropValue::ParticleEffect(String::new()),
        PropType::ActorGroup => PropValue::ActorGroup(String::new()),
        PropType::Image => PropValue::Image(String::new()),
        PropType::Color => PropValue::Color("#ffffff".to_string()),
        PropType::Enum => PropValue::Enum(String::new()),
        PropType::NumberArray => PropValue::NumberArray(Vec::new()),
        PropType::StringArray => PropValue::StringArray(Vec::new()),
        PropType::EnumArray => PropValue::EnumArray(Vec::new()),
        PropType::ActorArray => PropValue::ActorArray(Vec::new()),
    }
}
