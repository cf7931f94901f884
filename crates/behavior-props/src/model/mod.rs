//! Data model for behavior properties.
//!
//! - Property kinds and wire shapes
//! - Property declarations (schema)
//! - Editor values (typed)
//! - Assignments (wire)

pub mod assignment;
pub mod def;
pub mod prop_type;
pub mod value;

pub use assignment::{Assignment, WireValue};
pub use def::{DeckOptions, EnumAllowedValue, PropDef, RequireOp, Requirement};
pub use prop_type::{PropType, WireType};
pub use value::PropValue;
