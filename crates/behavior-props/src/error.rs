//! Error types for property schemas, literal parsing and assignments.

use thiserror::Error;

use crate::model::{PropType, WireType};

/// Error resolving a property declaration.
///
/// These indicate a corrupted or version-mismatched schema and are never
/// coerced into a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unknown property type tag {tag:?}")]
    UnknownPropType { tag: String },

    #[error("unknown requirement operator {op:?}")]
    UnknownRequireOp { op: String },
}

/// Error parsing a declared default-value literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("{prop_type} defaults cannot be parsed from a literal")]
    NotLiteralParseable { prop_type: PropType },

    #[error("malformed {prop_type} literal {literal:?}: {reason}")]
    MalformedArray {
        prop_type: PropType,
        literal: String,
        reason: String,
    },

    #[error("literal length {len} exceeds maximum {max}")]
    LiteralTooLong { len: usize, max: usize },

    #[error("array literal has {len} elements, maximum is {max}")]
    ArrayTooLong { len: usize, max: usize },
}

/// Error converting between assignments and editor values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    #[error("assignment for {property:?} holds {found}, expected {expected}")]
    ShapeMismatch {
        property: String,
        expected: WireType,
        found: &'static str,
    },

    #[error("editor value for {property:?} is {found}, but the property is declared {declared}")]
    KindMismatch {
        property: String,
        declared: PropType,
        found: PropType,
    },
}

/// Any error produced while building editor state for a behavior.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("property {property:?}: {source}")]
    Literal {
        property: String,
        #[source]
        source: LiteralError,
    },

    #[error(transparent)]
    Assignment(#[from] AssignmentError),
}
