//! Low-level readers and writers over JSON wire objects
//!
//! Every decoder in the crate goes through these helpers so that the
//! presence rules are applied the same way everywhere:
//! - an explicit `null` is treated exactly like an absent key
//! - a present key with the wrong JSON type is a [`DecodeError::TypeMismatch`]
//! - optional values are written back only when they are `Some`

use serde_json::{Map, Value};

use super::error::{DecodeError, DecodeResult};

/// A JSON object as it appears on the wire
pub type WireObject = Map<String, Value>;

/// Human readable name of a JSON value's type, for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch(
    entity: &'static str,
    field: &str,
    expected: &'static str,
    found: &Value,
) -> DecodeError {
    DecodeError::TypeMismatch {
        entity,
        field: field.to_string(),
        expected,
        found: json_type_name(found),
    }
}

pub(crate) fn expect_object<'a>(
    value: &'a Value,
    entity: &'static str,
) -> DecodeResult<&'a WireObject> {
    value.as_object().ok_or(DecodeError::NotAnObject {
        entity,
        found: json_type_name(value),
    })
}

/// Look up a key, treating an explicit null as absent
pub(crate) fn field<'a>(obj: &'a WireObject, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

pub(crate) fn required<'a>(
    obj: &'a WireObject,
    key: &str,
    entity: &'static str,
) -> DecodeResult<&'a Value> {
    field(obj, key).ok_or_else(|| DecodeError::MissingField {
        entity,
        field: key.to_string(),
    })
}

pub(crate) fn required_str(
    obj: &WireObject,
    key: &str,
    entity: &'static str,
) -> DecodeResult<String> {
    let value = required(obj, key, entity)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| mismatch(entity, key, "string", value))
}

/// Read the mandatory, non-empty `name` of a named element
pub(crate) fn required_name(obj: &WireObject, entity: &'static str) -> DecodeResult<String> {
    let name = required_str(obj, "name", entity)?;
    if name.is_empty() {
        return Err(DecodeError::InvalidValue {
            entity,
            field: "name".to_string(),
            reason: "name must not be empty".to_string(),
        });
    }
    Ok(name)
}

pub(crate) fn optional_str(
    obj: &WireObject,
    key: &str,
    entity: &'static str,
) -> DecodeResult<Option<String>> {
    match field(obj, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(mismatch(entity, key, "string", other)),
    }
}

pub(crate) fn optional_bool(
    obj: &WireObject,
    key: &str,
    entity: &'static str,
) -> DecodeResult<Option<bool>> {
    match field(obj, key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(mismatch(entity, key, "boolean", other)),
    }
}

pub(crate) fn optional_u64(
    obj: &WireObject,
    key: &str,
    entity: &'static str,
) -> DecodeResult<Option<u64>> {
    match field(obj, key) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| mismatch(entity, key, "non-negative integer", value)),
    }
}

pub(crate) fn optional_object(
    obj: &WireObject,
    key: &str,
    entity: &'static str,
) -> DecodeResult<Option<WireObject>> {
    match field(obj, key) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map.clone())),
        Some(other) => Err(mismatch(entity, key, "object", other)),
    }
}

/// Read an optional array whose entries are decoded one by one
///
/// A decoding failure for entry `i` is reported against `key[i]`.
pub(crate) fn optional_list<T>(
    obj: &WireObject,
    key: &str,
    entity: &'static str,
    decode: impl Fn(&Value) -> DecodeResult<T>,
) -> DecodeResult<Option<Vec<T>>> {
    match field(obj, key) {
        None => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode(item).map_err(|e| e.within(&format!("{}[{}]", key, i))))
            .collect::<DecodeResult<Vec<T>>>()
            .map(Some),
        Some(other) => Err(mismatch(entity, key, "array", other)),
    }
}

/// Write `value` under `key` only when it is present
pub(crate) fn insert_opt<T: Into<Value>>(obj: &mut WireObject, key: &str, value: Option<T>) {
    if let Some(value) = value {
        obj.insert(key.to_string(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::DecodeErrorKind;
    use serde_json::json;

    fn object(value: Value) -> WireObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let obj = object(json!({"comment": null}));
        assert_eq!(optional_str(&obj, "comment", "Test").unwrap(), None);

        let err = required_str(&obj, "comment", "Test").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::MissingField);
    }

    #[test]
    fn test_optional_str_rejects_wrong_type() {
        let obj = object(json!({"comment": 42}));
        let err = optional_str(&obj, "comment", "Test").unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                entity: "Test",
                field: "comment".to_string(),
                expected: "string",
                found: "integer",
            }
        );
    }

    #[test]
    fn test_required_name_rejects_empty() {
        let obj = object(json!({"name": ""}));
        let err = required_name(&obj, "Property").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::InvalidValue);
    }

    #[test]
    fn test_optional_u64_rejects_negative() {
        let obj = object(json!({"maxMultiplicity": -1}));
        let err = optional_u64(&obj, "maxMultiplicity", "Relationship").unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::TypeMismatch);
    }

    #[test]
    fn test_optional_list_reports_entry_index() {
        let obj = object(json!({"items": ["a", 1]}));
        let err = optional_list(&obj, "items", "Test", |v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| mismatch("Item", "value", "string", v))
        })
        .unwrap_err();
        assert!(err.to_string().contains("items[1].value"));
    }

    #[test]
    fn test_insert_opt_skips_none() {
        let mut obj = WireObject::new();
        insert_opt::<String>(&mut obj, "comment", None);
        insert_opt(&mut obj, "unit", Some("percent"));
        assert_eq!(Value::Object(obj), json!({"unit": "percent"}));
    }
}
