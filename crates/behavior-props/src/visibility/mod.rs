//! Conditional visibility of properties.
//!
//! A declaration's `requires` list names other properties of the same
//! behavior and compares their current values against literals. The
//! declaration is shown only when every condition holds.
//!
//! Comparison rules by kind of the referenced property:
//! - Number / Decimal: numeric, against the literal parsed as a number
//! - Boolean: against `true` / `false`
//! - String kinds: text order, an unselected actor compares as ""
//! - Array kinds: equality only, against a JSON array literal
//!
//! A missing property or a literal that cannot be compared satisfies only
//! `!=`.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::codec::literal::parse_array;
use crate::model::{PropDef, PropValue, RequireOp, Requirement};

/// Current property values keyed by variable name.
pub type PropValues = FxHashMap<String, PropValue>;

impl Requirement {
    /// Evaluates this condition against current property values.
    pub fn is_met(&self, values: &PropValues) -> bool {
        let ordering = values
            .get(&self.key)
            .and_then(|current| compare_to_literal(current, &self.value));

        match self.op {
            RequireOp::Equals => ordering == Some(Ordering::Equal),
            RequireOp::NotEquals => ordering != Some(Ordering::Equal),
            RequireOp::Less => ordering == Some(Ordering::Less),
            RequireOp::LessOrEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            RequireOp::Greater => ordering == Some(Ordering::Greater),
            RequireOp::GreaterOrEqual => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            }
        }
    }
}

impl PropDef {
    /// Returns true if every visibility condition holds.
    pub fn is_visible(&self, values: &PropValues) -> bool {
        self.requires.iter().all(|r| r.is_met(values))
    }
}

/// Orders a current value relative to a condition literal.
///
/// Arrays only ever compare as equal or not at all.
fn compare_to_literal(current: &PropValue, literal: &str) -> Option<Ordering> {
    match current {
        PropValue::Number(_) | PropValue::Decimal(_) => {
            let rhs: f64 = literal.trim().parse().ok()?;
            current.as_f64()?.partial_cmp(&rhs)
        }
        PropValue::Boolean(v) => match literal {
            "true" => Some(v.cmp(&true)),
            "false" => Some(v.cmp(&false)),
            _ => None,
        },
        PropValue::Actor(v) => Some(v.as_deref().unwrap_or("").cmp(literal)),
        PropValue::String(v)
        | PropValue::Prefab(v)
        | PropValue::Sound(v)
        | PropValue::ParticleEffect(v)
        | PropValue::ActorGroup(v)
        | PropValue::Image(v)
        | PropValue::Color(v)
        | PropValue::Enum(v) => Some(v.as_str().cmp(literal)),
        PropValue::NumberArray(v) => {
            let rhs: Vec<i32> = parse_array(current.prop_type(), literal).ok()?;
            (*v == rhs).then_some(Ordering::Equal)
        }
        PropValue::CardDeck(v)
        | PropValue::StringArray(v)
        | PropValue::EnumArray(v)
        | PropValue::ActorArray(v) => {
            let rhs: Vec<String> = parse_array(current.prop_type(), literal).ok()?;
            (*v == rhs).then_some(Ordering::Equal)
        }
    }
}
