//! JSON encoding, and decoding onto a typed prototype.
//!
//! `deserialize` works like copying parsed properties onto a template object:
//! the prototype supplies the type and any value the text leaves out, the text
//! supplies everything it names. Copying is shallow; a nested object in the
//! text replaces the prototype's nested object as a whole.

use kata_common::warning::warn_once;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors from the JSON helpers.
#[derive(Error, Debug)]
pub enum SerialError {
    /// The input text is not well-formed JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// The merged value does not fit the target type.
    #[error("JSON does not fit the target type: {0}")]
    Shape(#[source] serde_json::Error),

    /// The value cannot be represented as JSON (e.g. a map with non-string keys).
    #[error("value cannot be encoded as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// Strict decoding met a property the prototype does not carry.
    #[error("unknown field {0:?}")]
    UnknownField(String),
}

/// What to do with parsed properties the prototype does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnknownFields {
    /// Copy them and warn; the target type's own rules decide what survives.
    Warn,
    /// Fail with [`SerialError::UnknownField`].
    Reject,
}

/// Encode `value` as compact JSON text.
///
/// Struct fields appear in declaration order and map keys in insertion order.
///
/// # Errors
///
/// Returns [`SerialError::Encode`] if `value` has no JSON representation.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, SerialError> {
    serde_json::to_string(value).map_err(SerialError::Encode)
}

/// Parse `text` and copy its properties onto a copy of `prototype`.
///
/// Properties missing from `text` keep the prototype's values. Properties the
/// prototype does not carry are reported once via [`warn_once`] and left to
/// the target type (structs drop them, maps keep them). A document that is not
/// a JSON object replaces the prototype entirely.
///
/// # Example
///
/// ```
/// use kata_data::{Rectangle, deserialize};
///
/// let rect = deserialize(&Rectangle::new(1.0, 2.0), r#"{"width": 4.0}"#)?;
/// assert_eq!(rect, Rectangle::new(4.0, 2.0));
/// # Ok::<(), kata_data::SerialError>(())
/// ```
///
/// # Errors
///
/// Returns [`SerialError::Parse`] if `text` is not well-formed JSON,
/// [`SerialError::Encode`] if the prototype cannot be encoded, and
/// [`SerialError::Shape`] if the merged value does not fit `T`.
pub fn deserialize<T>(prototype: &T, text: &str) -> Result<T, SerialError>
where
    T: Serialize + DeserializeOwned,
{
    decode(prototype, text, UnknownFields::Warn)
}

/// Like [`deserialize`], but refuses properties the prototype does not carry.
///
/// # Errors
///
/// Returns [`SerialError::UnknownField`] for the first such property, plus
/// every error [`deserialize`] can return.
pub fn deserialize_strict<T>(prototype: &T, text: &str) -> Result<T, SerialError>
where
    T: Serialize + DeserializeOwned,
{
    decode(prototype, text, UnknownFields::Reject)
}

fn decode<T>(prototype: &T, text: &str, unknown: UnknownFields) -> Result<T, SerialError>
where
    T: Serialize + DeserializeOwned,
{
    let parsed: Value = serde_json::from_str(text).map_err(SerialError::Parse)?;
    let base = serde_json::to_value(prototype).map_err(SerialError::Encode)?;
    let merged = merge(base, parsed, unknown)?;
    serde_json::from_value(merged).map_err(SerialError::Shape)
}

fn merge(base: Value, parsed: Value, unknown: UnknownFields) -> Result<Value, SerialError> {
    let (mut target, source) = match (base, parsed) {
        (Value::Object(target), Value::Object(source)) => (target, source),
        (_, parsed) => return Ok(parsed),
    };

    for (key, value) in source {
        if !target.contains_key(&key) {
            match unknown {
                UnknownFields::Reject => return Err(SerialError::UnknownField(key)),
                UnknownFields::Warn => {
                    warn_once("Serial", &format!("field {key:?} not present on prototype"));
                }
            }
        }
        let _ = target.insert(key, value);
    }
    Ok(Value::Object(target))
}
