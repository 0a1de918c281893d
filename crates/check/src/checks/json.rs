//! Checks on `serde_json::Value`.
//!
//! These are the catalog's misuse-aware checks: applying them to a JSON
//! value of the wrong kind is a [`CorruptCheck`], not a failed check.

use serde_json::Value;

use crate::error::CorruptCheck;
use crate::foundation::{Builtin, CheckKey};

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn object_has_key<K>(value: &Value, key: &K) -> Result<bool, CorruptCheck>
where
    K: AsRef<str> + ?Sized,
{
    match value {
        Value::Object(map) => Ok(map.contains_key(key.as_ref())),
        other => Err(CorruptCheck::new(
            "json_has_key()",
            format_args!("expected a JSON object, found {}", kind(other)),
        )),
    }
}

fn is_json_index(index: &i32, value: &Value) -> Result<bool, CorruptCheck> {
    let len = match value {
        Value::Array(items) => items.len(),
        Value::String(text) => text.chars().count(),
        other => {
            return Err(CorruptCheck::new(
                "json_index()",
                format_args!("expected a JSON array or string, found {}", kind(other)),
            ));
        }
    };
    Ok(usize::try_from(*index).is_ok_and(|i| i < len))
}

/// The JSON object has the object key.
///
/// Misused when the subject is not a JSON object.
#[must_use]
pub fn json_has_key<K>() -> Builtin<fn(&Value, &K) -> Result<bool, CorruptCheck>>
where
    K: AsRef<str> + ?Sized,
{
    Builtin::fallible(CheckKey::JSON_HAS_KEY, object_has_key::<K>)
}

/// The value is a valid index into the object JSON array or string.
///
/// Misused when the object is neither an array nor a string.
#[must_use]
pub fn json_index() -> Builtin<fn(&i32, &Value) -> Result<bool, CorruptCheck>> {
    Builtin::fallible(CheckKey::JSON_INDEX, is_json_index)
}
