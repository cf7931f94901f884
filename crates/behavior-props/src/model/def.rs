//! Property declarations.
//!
//! A behavior declares its configurable parameters as an ordered list of
//! [`PropDef`]. Field names serialize in camelCase and are shared with the
//! scripting bridge, so they must not be renamed.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SchemaError;
use crate::model::PropType;

/// Deserializes a string field, treating `null` as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single configurable parameter of a behavior.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDef {
    /// Type tag, resolved with [`PropDef::prop_type`].
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Key of this property within the behavior's property set.
    pub variable_name: String,
    /// Default value literal, interpreted per kind. Empty means the kind's default.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub default_value_string: String,

    /// Label for the UI.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comment: String,
    #[serde(default)]
    pub deck_options: DeckOptions,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub picker_prompt: String,
    #[serde(default)]
    pub allow_offstage_actors: bool,
    /// Visibility conditions on other properties. All must hold.
    #[serde(default)]
    pub requires: Vec<Requirement>,
    /// Choices for Enum and EnumArray properties.
    #[serde(default)]
    pub allowed_values: Vec<EnumAllowedValue>,
}

impl PropDef {
    /// Creates a declaration with no default literal and no metadata.
    pub fn new(prop_type: PropType, variable_name: impl Into<String>) -> Self {
        Self {
            type_tag: prop_type.as_str().to_string(),
            variable_name: variable_name.into(),
            ..Self::default()
        }
    }

    /// Resolves the declared type tag.
    ///
    /// An unrecognized tag is a schema error; it is never mapped to a
    /// fallback kind.
    pub fn prop_type(&self) -> Result<PropType, SchemaError> {
        self.type_tag.parse()
    }

    /// Sets the default value literal.
    pub fn with_default(mut self, literal: impl Into<String>) -> Self {
        self.default_value_string = literal.into();
        self
    }

    /// Sets the UI label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the card deck options.
    pub fn with_deck_options(mut self, deck_options: DeckOptions) -> Self {
        self.deck_options = deck_options;
        self
    }

    /// Adds an allowed choice for enum properties.
    pub fn allow_value(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.allowed_values.push(EnumAllowedValue {
            value: value.into(),
            label: label.into(),
        });
        self
    }

    /// Adds a visibility condition.
    pub fn requiring(mut self, key: impl Into<String>, op: RequireOp, value: impl Into<String>) -> Self {
        self.requires.push(Requirement {
            key: key.into(),
            value: value.into(),
            op,
        });
        self
    }
}

/// Card deck specific UI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckOptions {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub card_category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub icon_res_path: String,
    /// Cards a newly placed deck starts with.
    #[serde(default, rename = "defaultCardURIs")]
    pub default_card_uris: Vec<String>,
    #[serde(default)]
    pub one_card_only: bool,
}

/// One choice of an enum property.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumAllowedValue {
    pub value: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub label: String,
}

/// Comparison operator of a visibility condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RequireOp {
    #[default]
    Equals,
    NotEquals,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl RequireOp {
    /// Returns the operator spelling used in declarations.
    pub fn as_str(self) -> &'static str {
        match self {
            RequireOp::Equals => "=",
            RequireOp::NotEquals => "!=",
            RequireOp::Less => "<",
            RequireOp::LessOrEqual => "<=",
            RequireOp::Greater => ">",
            RequireOp::GreaterOrEqual => ">=",
        }
    }

    /// Parses an operator spelling. An empty spelling means equality.
    pub fn from_op(op: &str) -> Result<RequireOp, SchemaError> {
        match op {
            "" | "=" => Ok(RequireOp::Equals),
            "!=" => Ok(RequireOp::NotEquals),
            "<" => Ok(RequireOp::Less),
            "<=" => Ok(RequireOp::LessOrEqual),
            ">" => Ok(RequireOp::Greater),
            ">=" => Ok(RequireOp::GreaterOrEqual),
            _ => Err(SchemaError::UnknownRequireOp { op: op.to_string() }),
        }
    }
}

impl fmt::Display for RequireOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for RequireOp {
    type Error = SchemaError;

    fn try_from(op: String) -> Result<Self, Self::Error> {
        RequireOp::from_op(&op)
    }
}

impl From<RequireOp> for String {
    fn from(op: RequireOp) -> Self {
        op.as_str().to_string()
    }
}

/// Visibility condition: the property named `key` compared against `value`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Requirement {
    pub key: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
    #[serde(default)]
    pub op: RequireOp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let def: PropDef = serde_json::from_str(r#"{"type":"Number","variableName":"speed"}"#).unwrap();
        assert_eq!(def.prop_type(), Ok(PropType::Number));
        assert_eq!(def.variable_name, "speed");
        assert_eq!(def.default_value_string, "");
        assert!(def.requires.is_empty());
        assert!(!def.allow_offstage_actors);
    }

    #[test]
    fn test_deserialize_full() {
        let json = r#"{
            "type": "CardDeck",
            "variableName": "onCollide",
            "defaultValueString": null,
            "label": "On collide",
            "comment": null,
            "deckOptions": {
                "cardCategory": "Action",
                "iconResPath": "icons/collide",
                "defaultCardURIs": ["builtin:Bounce"],
                "oneCardOnly": true
            },
            "pickerPrompt": "Pick a card",
            "allowOffstageActors": true,
            "requires": [{"key": "enabled", "value": "true", "op": "="}],
            "allowedValues": [{"value": "a", "label": "A"}]
        }"#;
        let def: PropDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.prop_type(), Ok(PropType::CardDeck));
        assert_eq!(def.default_value_string, "");
        assert_eq!(def.comment, "");
        assert_eq!(def.deck_options.default_card_uris, vec!["builtin:Bounce".to_string()]);
        assert!(def.deck_options.one_card_only);
        assert_eq!(def.requires[0].op, RequireOp::Equals);
        assert_eq!(def.allowed_values[0].label, "A");
    }

    #[test]
    fn test_unknown_type_tag() {
        let def: PropDef = serde_json::from_str(r#"{"type":"Vector","variableName":"v"}"#).unwrap();
        assert_eq!(
            def.prop_type(),
            Err(SchemaError::UnknownPropType { tag: "Vector".to_string() })
        );
    }

    #[test]
    fn test_require_op_spellings() {
        for op in [
            RequireOp::Equals,
            RequireOp::NotEquals,
            RequireOp::Less,
            RequireOp::LessOrEqual,
            RequireOp::Greater,
            RequireOp::GreaterOrEqual,
        ] {
            assert_eq!(RequireOp::from_op(op.as_str()), Ok(op));
        }
        assert_eq!(RequireOp::from_op(""), Ok(RequireOp::Equals));
        assert!(RequireOp::from_op("~=").is_err());

        let r: Requirement = serde_json::from_str(r#"{"key":"hp","value":"3"}"#).unwrap();
        assert_eq!(r.op, RequireOp::Equals);
        assert!(serde_json::from_str::<Requirement>(r#"{"key":"hp","value":"3","op":"=="}"#).is_err());
    }

    #[test]
    fn test_serialize_field_names() {
        let def = PropDef::new(PropType::Color, "tint")
            .with_default("#ff0000")
            .requiring("useTint", RequireOp::NotEquals, "false");
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["type"], "Color");
        assert_eq!(json["variableName"], "tint");
        assert_eq!(json["defaultValueString"], "#ff0000");
        assert_eq!(json["deckOptions"]["defaultCardURIs"], serde_json::json!([]));
        assert_eq!(json["requires"][0]["op"], "!=");
    }
}
