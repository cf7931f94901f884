//! Editor state for a behavior's properties.
//!
//! Loading a behavior instance for editing pairs each declaration with its
//! stored assignment, or with the declared default when nothing is stored.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::codec::{assignment_to_value, parse_initial_value, value_to_assignment};
use crate::error::{AssignmentError, PropError};
use crate::model::{Assignment, PropDef, PropType, PropValue};

/// One property as held by the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Editable {
    pub def: PropDef,
    /// Resolved kind of `def`.
    pub prop_type: PropType,
    /// Current value. Must be of kind `prop_type`.
    pub data: PropValue,
}

impl Editable {
    /// Creates editor state holding the declaration's initial value.
    pub fn from_def(def: PropDef) -> Result<Self, PropError> {
        let prop_type = def.prop_type()?;
        let data = initial_value_for(&def, prop_type)?;
        Ok(Self { def, prop_type, data })
    }

    /// Creates editor state holding a stored assignment's value.
    pub fn from_assignment(def: PropDef, assignment: Assignment) -> Result<Self, PropError> {
        let prop_type = def.prop_type()?;
        let data = assignment_to_value(assignment, prop_type)?;
        Ok(Self { def, prop_type, data })
    }

    pub fn variable_name(&self) -> &str {
        &self.def.variable_name
    }

    /// Converts the current value to an assignment.
    pub fn to_assignment(&self) -> Result<Assignment, AssignmentError> {
        value_to_assignment(self)
    }
}

/// Returns the value a newly placed behavior starts with for `def`.
///
/// Card decks start with the deck options' default cards; every other kind
/// parses the declared default literal.
pub fn initial_value(def: &PropDef) -> Result<PropValue, PropError> {
    initial_value_for(def, def.prop_type()?)
}

fn initial_value_for(def: &PropDef, prop_type: PropType) -> Result<PropValue, PropError> {
    match prop_type {
        PropType::CardDeck => Ok(PropValue::CardDeck(def.deck_options.default_card_uris.clone())),
        _ => parse_initial_value(prop_type, &def.default_value_string).map_err(|source| {
            PropError::Literal {
                property: def.variable_name.clone(),
                source,
            }
        }),
    }
}

/// Builds editor state for every declaration, in declaration order.
///
/// Each declaration takes the assignment with a matching property name (the
/// last one if several match), or its initial value if none does.
/// Assignments for undeclared properties are dropped.
pub fn load_editables(
    defs: &[PropDef],
    assignments: impl IntoIterator<Item = Assignment>,
) -> Result<Vec<Editable>, PropError> {
    let mut stored: FxHashMap<String, Assignment> = FxHashMap::default();
    for assignment in assignments {
        stored.insert(assignment.property_name.clone(), assignment);
    }

    let declared: FxHashSet<&str> = defs.iter().map(|d| d.variable_name.as_str()).collect();
    for name in stored.keys().filter(|name| !declared.contains(name.as_str())) {
        log::debug!("dropping assignment for undeclared property {name:?}");
    }

    defs.iter()
        .map(|def| match stored.get(&def.variable_name) {
            Some(assignment) => Editable::from_assignment(def.clone(), assignment.clone()),
            None => {
                log::debug!("no stored value for {:?}, using its initial value", def.variable_name);
                Editable::from_def(def.clone())
            }
        })
        .collect()
}

/// Collects current values by variable name, for evaluating visibility rules.
pub fn value_map(editables: &[Editable]) -> FxHashMap<String, PropValue> {
    editables
        .iter()
        .map(|e| (e.def.variable_name.clone(), e.data.clone()))
        .collect()
}
