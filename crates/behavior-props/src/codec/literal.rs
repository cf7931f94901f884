//! Parsing of declared default-value literals.
//!
//! Literal syntax per kind:
//! - Number / Decimal: integer / float text. Unparseable text, and floats
//!   that are not finite, fall back to the kind's default with a warning.
//! - Boolean: exactly `true` is true, anything else is false.
//! - String kinds: taken verbatim.
//! - Array kinds: a JSON array body such as `1,2,3` or `"a","b"`. A fully
//!   bracketed `[1,2,3]` is accepted too. Only these are length-limited.
//! - CardDeck: never parsed from a literal.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::codec::default_value;
use crate::error::LiteralError;
use crate::limits::{MAX_ARRAY_LEN, MAX_LITERAL_LEN};
use crate::model::{PropType, PropValue};

/// Converts a declared default literal into an editor value.
///
/// An empty literal yields [`default_value`]. Malformed array literals and
/// any CardDeck request are errors.
pub fn parse_initial_value(prop_type: PropType, literal: &str) -> Result<PropValue, LiteralError> {
    if literal.is_empty() && prop_type.is_literal_parseable() {
        return Ok(default_value(prop_type));
    }

    let text = || literal.to_string();

    let value = match prop_type {
        PropType::Number => match literal.trim().parse::<i32>() {
            Ok(v) => PropValue::Number(v),
            Err(err) => fallback(prop_type, literal, err),
        },
        // Non-finite floats have no JSON form, so they could not be stored
        PropType::Decimal => match literal.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => PropValue::Decimal(v),
            Ok(v) => fallback(prop_type, literal, format_args!("{v} is not finite")),
            Err(err) => fallback(prop_type, literal, err),
        },
        PropType::Boolean => PropValue::Boolean(literal == "true"),
        PropType::Actor => PropValue::Actor(Some(text())),
        PropType::String => PropValue::String(text()),
        PropType::Prefab => PropValue::Prefab(text()),
        PropType::Sound => PropValue::Sound(text()),
        PropType::ParticleEffect => PropValue::ParticleEffect(text()),
        PropType::ActorGroup => PropValue::ActorGroup(text()),
        PropType::Image => PropValue::Image(text()),
        PropType::Color => PropValue::Color(text()),
        PropType::Enum => PropValue::Enum(text()),
        PropType::NumberArray => PropValue::NumberArray(parse_array(prop_type, literal)?),
        PropType::StringArray => PropValue::StringArray(parse_array(prop_type, literal)?),
        PropType::EnumArray => PropValue::EnumArray(parse_array(prop_type, literal)?),
        PropType::ActorArray => PropValue::ActorArray(parse_array(prop_type, literal)?),
        PropType::CardDeck => return Err(LiteralError::NotLiteralParseable { prop_type }),
    };

    Ok(value)
}

fn fallback(prop_type: PropType, literal: &str, reason: impl fmt::Display) -> PropValue {
    log::warn!("failed to parse {prop_type} literal {literal:?} ({reason}), using default");
    default_value(prop_type)
}

/// Decodes an array literal, with or without surrounding brackets.
pub(crate) fn parse_array<T: DeserializeOwned>(
    prop_type: PropType,
    literal: &str,
) -> Result<Vec<T>, LiteralError> {
    if literal.len() > MAX_LITERAL_LEN {
        return Err(LiteralError::LiteralTooLong {
            len: literal.len(),
            max: MAX_LITERAL_LEN,
        });
    }

    let body = literal.trim();
    let parsed = if body.starts_with('[') {
        serde_json::from_str::<Vec<T>>(body)
    } else {
        serde_json::from_str::<Vec<T>>(&format!("[{body}]"))
    };

    let items = parsed.map_err(|err| LiteralError::MalformedArray {
        prop_type,
        literal: literal.to_string(),
        reason: err.to_string(),
    })?;

    if items.len() > MAX_ARRAY_LEN {
        return Err(LiteralError::ArrayTooLong {
            len: items.len(),
            max: MAX_ARRAY_LEN,
        });
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records warnings logged on the current test thread.
    mod capture {
        use std::cell::RefCell;
        use std::sync::Once;

        use log::{Level, LevelFilter, Log, Metadata, Record};

        thread_local! {
            static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        }

        struct ThreadLogger;

        impl Log for ThreadLogger {
            fn enabled(&self, metadata: &Metadata) -> bool {
                metadata.level() <= Level::Warn
            }

            fn log(&self, record: &Record) {
                if self.enabled(record.metadata()) {
                    WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: ThreadLogger = ThreadLogger;
        static INIT: Once = Once::new();

        pub fn warnings(f: impl FnOnce()) -> Vec<String> {
            INIT.call_once(|| {
                if log::set_logger(&LOGGER).is_ok() {
                    log::set_max_level(LevelFilter::Warn);
                }
            });
            WARNINGS.with(|w| w.borrow_mut().clear());
            f();
            WARNINGS.with(|w| w.borrow_mut().drain(..).collect())
        }
    }

    #[test]
    fn test_empty_literal_is_default() {
        for t in PropType::ALL.into_iter().filter(|t| t.is_literal_parseable()) {
            assert_eq!(parse_initial_value(t, ""), Ok(default_value(t)), "{t}");
        }
    }

    #[test]
    fn test_boolean_is_lenient() {
        assert_eq!(parse_initial_value(PropType::Boolean, "true"), Ok(PropValue::Boolean(true)));
        assert_eq!(parse_initial_value(PropType::Boolean, "false"), Ok(PropValue::Boolean(false)));
        assert_eq!(parse_initial_value(PropType::Boolean, "maybe"), Ok(PropValue::Boolean(false)));
        // Case-sensitive
        assert_eq!(parse_initial_value(PropType::Boolean, "True"), Ok(PropValue::Boolean(false)));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_initial_value(PropType::Number, "42"), Ok(PropValue::Number(42)));
        assert_eq!(parse_initial_value(PropType::Number, " -7 "), Ok(PropValue::Number(-7)));
        assert_eq!(parse_initial_value(PropType::Decimal, "2.5"), Ok(PropValue::Decimal(2.5)));
        assert_eq!(parse_initial_value(PropType::Decimal, "3"), Ok(PropValue::Decimal(3.0)));
    }

    #[test]
    fn test_number_fallback() {
        let warnings = capture::warnings(|| {
            assert_eq!(parse_initial_value(PropType::Number, "abc"), Ok(PropValue::Number(0)));
            assert_eq!(parse_initial_value(PropType::Number, "1.5"), Ok(PropValue::Number(0)));
            assert_eq!(parse_initial_value(PropType::Number, "99999999999"), Ok(PropValue::Number(0)));
            assert_eq!(parse_initial_value(PropType::Decimal, "fast"), Ok(PropValue::Decimal(1.0)));
        });
        assert_eq!(warnings.len(), 4);
        assert!(warnings[0].contains("Number literal \"abc\""), "{}", warnings[0]);
        assert!(warnings[3].contains("Decimal literal \"fast\""), "{}", warnings[3]);

        // Parsed values log nothing
        let warnings = capture::warnings(|| {
            assert_eq!(parse_initial_value(PropType::Number, "7"), Ok(PropValue::Number(7)));
        });
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_non_finite_decimal_falls_back() {
        let warnings = capture::warnings(|| {
            for literal in ["NaN", "inf", "-inf", "1e40"] {
                assert_eq!(
                    parse_initial_value(PropType::Decimal, literal),
                    Ok(PropValue::Decimal(1.0)),
                    "{literal}"
                );
            }
        });
        assert_eq!(warnings.len(), 4);
        assert!(warnings[3].contains("not finite"), "{}", warnings[3]);
    }

    #[test]
    fn test_decimal_default_survives_storage() {
        use crate::codec::load_editables;
        use crate::model::{Assignment, PropDef};

        let defs = vec![PropDef::new(PropType::Decimal, "speed").with_default("NaN")];
        let editables = load_editables(&defs, Vec::new()).unwrap();
        let stored = crate::codec::serialize_all(&editables).unwrap();
        let json = serde_json::to_string(&stored).unwrap();
        assert_eq!(json, r#"[{"propertyName":"speed","value":1.0}]"#);

        let reloaded: Vec<Assignment> = serde_json::from_str(&json).unwrap();
        assert_eq!(load_editables(&defs, reloaded).unwrap(), editables);
    }

    #[test]
    fn test_long_scalar_literals_are_not_limited() {
        let long_text = "x".repeat(MAX_LITERAL_LEN + 10);
        assert_eq!(
            parse_initial_value(PropType::String, &long_text),
            Ok(PropValue::String(long_text.clone()))
        );
        assert_eq!(
            parse_initial_value(PropType::Color, &long_text),
            Ok(PropValue::Color(long_text.clone()))
        );
        assert_eq!(
            parse_initial_value(PropType::Actor, &long_text),
            Ok(PropValue::Actor(Some(long_text)))
        );

        let long_garbage = "a".repeat(MAX_LITERAL_LEN + 10);
        assert_eq!(parse_initial_value(PropType::Number, &long_garbage), Ok(PropValue::Number(0)));
        assert_eq!(parse_initial_value(PropType::Decimal, &long_garbage), Ok(PropValue::Decimal(1.0)));
    }

    #[test]
    fn test_strings_verbatim() {
        assert_eq!(
            parse_initial_value(PropType::Color, "not a color"),
            Ok(PropValue::Color("not a color".to_string()))
        );
        assert_eq!(
            parse_initial_value(PropType::Actor, "Player"),
            Ok(PropValue::Actor(Some("Player".to_string())))
        );
        assert_eq!(
            parse_initial_value(PropType::Enum, " spaced "),
            Ok(PropValue::Enum(" spaced ".to_string()))
        );
        assert_eq!(
            parse_initial_value(PropType::Prefab, "prefabs/door"),
            Ok(PropValue::Prefab("prefabs/door".to_string()))
        );
    }

    #[test]
    fn test_array_literals() {
        assert_eq!(
            parse_initial_value(PropType::NumberArray, "1,2,3"),
            Ok(PropValue::NumberArray(vec![1, 2, 3]))
        );
        assert_eq!(
            parse_initial_value(PropType::StringArray, "\"x\",\"y\""),
            Ok(PropValue::StringArray(vec!["x".to_string(), "y".to_string()]))
        );
        assert_eq!(
            parse_initial_value(PropType::EnumArray, "[\"a\"]"),
            Ok(PropValue::EnumArray(vec!["a".to_string()]))
        );
        assert_eq!(
            parse_initial_value(PropType::ActorArray, " [ ] "),
            Ok(PropValue::ActorArray(vec![]))
        );
    }

    #[test]
    fn test_malformed_array_is_error() {
        let err = parse_initial_value(PropType::NumberArray, "1,,2").unwrap_err();
        assert!(matches!(err, LiteralError::MalformedArray { prop_type: PropType::NumberArray, .. }));

        // Unquoted strings are not JSON
        assert!(parse_initial_value(PropType::StringArray, "a,b").is_err());
        // Element type must match
        assert!(parse_initial_value(PropType::NumberArray, "\"1\"").is_err());
    }

    #[test]
    fn test_card_deck_is_never_parsed() {
        for literal in ["", "a", "\"a\",\"b\""] {
            assert_eq!(
                parse_initial_value(PropType::CardDeck, literal),
                Err(LiteralError::NotLiteralParseable { prop_type: PropType::CardDeck })
            );
        }
    }

    #[test]
    fn test_limits() {
        let long = "1,".repeat(MAX_ARRAY_LEN) + "1";
        assert!(matches!(
            parse_initial_value(PropType::NumberArray, &long),
            Err(LiteralError::ArrayTooLong { .. })
        ));

        let huge = " ".repeat(MAX_LITERAL_LEN) + "1";
        assert!(matches!(
            parse_initial_value(PropType::NumberArray, &huge),
            Err(LiteralError::LiteralTooLong { .. })
        ));
    }
}
