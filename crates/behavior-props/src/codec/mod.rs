//! Conversions between assignments, editor values and declared literals.

pub mod editable;
pub mod literal;
pub mod value;

pub use editable::{initial_value, load_editables, value_map, Editable};
pub use literal::parse_initial_value;
pub use value::{
    assignment_to_value, default_value, expected_wire_type, serialize_all, to_wire_value,
    value_to_assignment,
};
