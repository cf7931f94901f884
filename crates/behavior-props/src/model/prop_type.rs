//! Property type tags and their wire shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Kinds of configurable behavior properties.
///
/// The variant names are the tag spellings used by script declarations and
/// must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropType {
    Number,
    Decimal,
    Boolean,
    Actor,
    String,
    CardDeck,
    Prefab,
    Sound,
    ParticleEffect,
    ActorGroup,
    Image,
    Color,
    Enum,
    NumberArray,
    StringArray,
    EnumArray,
    ActorArray,
}

impl PropType {
    /// Every supported kind, in declaration order.
    pub const ALL: [PropType; 17] = [
        PropType::Number,
        PropType::Decimal,
        PropType::Boolean,
        PropType::Actor,
        PropType::String,
        PropType::CardDeck,
        PropType::Prefab,
        PropType::Sound,
        PropType::ParticleEffect,
        PropType::ActorGroup,
        PropType::Image,
        PropType::Color,
        PropType::Enum,
        PropType::NumberArray,
        PropType::StringArray,
        PropType::EnumArray,
        PropType::ActorArray,
    ];

    /// Returns the tag spelling for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            PropType::Number => "Number",
            PropType::Decimal => "Decimal",
            PropType::Boolean => "Boolean",
            PropType::Actor => "Actor",
            PropType::String => "String",
            PropType::CardDeck => "CardDeck",
            PropType::Prefab => "Prefab",
            PropType::Sound => "Sound",
            PropType::ParticleEffect => "ParticleEffect",
            PropType::ActorGroup => "ActorGroup",
            PropType::Image => "Image",
            PropType::Color => "Color",
            PropType::Enum => "Enum",
            PropType::NumberArray => "NumberArray",
            PropType::StringArray => "StringArray",
            PropType::EnumArray => "EnumArray",
            PropType::ActorArray => "ActorArray",
        }
    }

    /// Looks up a kind by its exact tag spelling.
    pub fn from_tag(tag: &str) -> Option<PropType> {
        PropType::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    /// Returns the wire shape used to store values of this kind.
    pub fn wire_type(self) -> WireType {
        match self {
            PropType::Number => WireType::Integer,
            PropType::Decimal => WireType::Float,
            PropType::Boolean => WireType::Bool,
            PropType::Actor
            | PropType::String
            | PropType::Prefab
            | PropType::Sound
            | PropType::ParticleEffect
            | PropType::ActorGroup
            | PropType::Image
            | PropType::Color
            | PropType::Enum => WireType::String,
            PropType::CardDeck
            | PropType::StringArray
            | PropType::EnumArray
            | PropType::ActorArray => WireType::StringArray,
            PropType::NumberArray => WireType::IntegerArray,
        }
    }

    /// Returns true if values of this kind are arrays on the wire.
    pub fn is_array(self) -> bool {
        self.wire_type().is_array()
    }

    /// Returns true if a declared default literal can be parsed for this kind.
    ///
    /// Card deck defaults come from the deck options instead.
    pub fn is_literal_parseable(self) -> bool {
        self != PropType::CardDeck
    }
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropType::from_tag(s).ok_or_else(|| SchemaError::UnknownPropType { tag: s.to_string() })
    }
}

/// Wire shapes an assignment value can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    /// 32-bit signed integer.
    Integer,
    /// 32-bit float.
    Float,
    Bool,
    String,
    StringArray,
    IntegerArray,
}

impl WireType {
    /// Returns the shape name as written in schema documentation.
    pub fn as_str(self) -> &'static str {
        match self {
            WireType::Integer => "integer",
            WireType::Float => "float",
            WireType::Bool => "bool",
            WireType::String => "string",
            WireType::StringArray => "string[]",
            WireType::IntegerArray => "integer[]",
        }
    }

    pub fn is_array(self) -> bool {
        matches!(self, WireType::StringArray | WireType::IntegerArray)
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
