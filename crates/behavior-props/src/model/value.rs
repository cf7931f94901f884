//! Editor-side property values.
//!
//! A [`PropValue`] is what property-editing widgets hold: one variant per
//! [`PropType`], carrying the native type rather than the wire shape.

use crate::model::PropType;

/// A typed property value as held by the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Number(i32),
    Decimal(f32),
    Boolean(bool),

    /// Selected actor name, or None when no actor is selected.
    ///
    /// An unselected actor is distinct from an actor named "".
    Actor(Option<String>),

    String(String),

    /// Card URIs in deck order.
    CardDeck(Vec<String>),

    Prefab(String),
    Sound(String),
    ParticleEffect(String),
    ActorGroup(String),
    Image(String),

    /// Color as written by the picker, usually `#rrggbb`. Not validated.
    Color(String),

    /// One of the property's allowed values. Not validated.
    Enum(String),

    NumberArray(Vec<i32>),
    StringArray(Vec<String>),
    EnumArray(Vec<String>),
    ActorArray(Vec<String>),
}

impl PropValue {
    /// Returns the kind of this value.
    pub fn prop_type(&self) -> PropType {
        match self {
            PropValue::Number(_) => PropType::Number,
            PropValue::Decimal(_) => PropType::Decimal,
            PropValue::Boolean(_) => PropType::Boolean,
            PropValue::Actor(_) => PropType::Actor,
            PropValue::String(_) => PropType::String,
            PropValue::CardDeck(_) => PropType::CardDeck,
            PropValue::Prefab(_) => PropType::Prefab,
            PropValue::Sound(_) => PropType::Sound,
            PropValue::ParticleEffect(_) => PropType::ParticleEffect,
            PropValue::ActorGroup(_) => PropType::ActorGroup,
            PropValue::Image(_) => PropType::Image,
            PropValue::Color(_) => PropType::Color,
            PropValue::Enum(_) => PropType::Enum,
            PropValue::NumberArray(_) => PropType::NumberArray,
            PropValue::StringArray(_) => PropType::StringArray,
            PropValue::EnumArray(_) => PropType::EnumArray,
            PropValue::ActorArray(_) => PropType::ActorArray,
        }
    }

    /// Returns the text of a string-shaped value.
    ///
    /// Returns None for non-string kinds and for an unselected actor.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Actor(v) => v.as_deref(),
            PropValue::String(v)
            | PropValue::Prefab(v)
            | PropValue::Sound(v)
            | PropValue::ParticleEffect(v)
            | PropValue::ActorGroup(v)
            | PropValue::Image(v)
            | PropValue::Color(v)
            | PropValue::Enum(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the elements of a string-array value.
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            PropValue::CardDeck(v)
            | PropValue::StringArray(v)
            | PropValue::EnumArray(v)
            | PropValue::ActorArray(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as a number if it is a Number or Decimal.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(v) => Some(f64::from(*v)),
            PropValue::Decimal(v) => Some(f64::from(*v)),
            _ => None,
        }
    }
}
