//! Typed property schemas for scripted behaviors.
//!
//! Behaviors declare user-configurable parameters ("properties") as a list of
//! [`PropDef`]. This crate converts property values between three forms:
//!
//! - **Assignments**: the weakly-typed wire form stored per behavior
//!   instance, a property name plus a bare JSON-shaped value
//! - **Editor values**: [`PropValue`], one strongly-typed variant per kind
//! - **Default literals**: the `defaultValueString` declared in scripts
//!
//! # Quick Start
//!
//! ```rust
//! use behavior_props::{load_editables, serialize_all, PropDef, PropType, PropValue};
//!
//! let defs = vec![
//!     PropDef::new(PropType::Number, "hp").with_default("10"),
//!     PropDef::new(PropType::NumberArray, "path").with_default("1,2,3"),
//!     PropDef::new(PropType::Actor, "target"),
//! ];
//!
//! // Nothing stored yet, so every property starts at its declared default
//! let mut editables = load_editables(&defs, Vec::new()).unwrap();
//! assert_eq!(editables[1].data, PropValue::NumberArray(vec![1, 2, 3]));
//!
//! editables[0].data = PropValue::Number(25);
//! let assignments = serialize_all(&editables).unwrap();
//! let json = serde_json::to_string(&assignments[0]).unwrap();
//! assert_eq!(json, r#"{"propertyName":"hp","value":25}"#);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Property kinds, declarations, editor values and assignments
//! - [`codec`]: Conversions between the three forms
//! - [`visibility`]: Evaluation of `requires` conditions
//! - [`error`]: Error types
//! - [`limits`]: Bounds on declared literals
//!
//! # Errors
//!
//! Unknown type tags, malformed array literals and card-deck literal
//! requests are errors. Unparseable Number and Decimal literals are not:
//! they log a warning and fall back to the kind's default.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod visibility;

// Re-export commonly used types at crate root
pub use codec::{
    assignment_to_value, default_value, expected_wire_type, initial_value, load_editables,
    parse_initial_value, serialize_all, to_wire_value, value_map, value_to_assignment, Editable,
};
pub use error::{AssignmentError, LiteralError, PropError, SchemaError};
pub use model::{
    Assignment, DeckOptions, EnumAllowedValue, PropDef, PropType, PropValue, RequireOp,
    Requirement, WireType, WireValue,
};
pub use visibility::PropValues;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
