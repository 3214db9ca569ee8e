//! Record representation and argument validation.
//!
//! A record is a flat-or-nested string-keyed mapping to arbitrary JSON values.
//! Records carry no schema and no implicit identity: two records in the same
//! collection may have disjoint field sets, and identity for query purposes is
//! purely structural.
//!
//! Records are represented as [`serde_json::Map`] values, so any
//! JSON-representable shape (null, boolean, number, string, array, nested
//! object) is a valid field value.

use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// One stored document: a string-keyed mapping to JSON values.
pub type Record = Map<String, Value>;

/// Consumes a JSON value, returning the underlying record mapping.
///
/// This is the structural precondition gate for write arguments: anything that
/// is not a JSON object is rejected before it can reach storage.
///
/// # Errors
///
/// Returns [`StoreError::InvalidArgument`] if `value` is not a JSON object.
pub(crate) fn into_record(value: Value, what: &str) -> StoreResult<Record> {
    match value {
        Value::Object(record) => Ok(record),
        other => Err(StoreError::InvalidArgument(format!(
            "{what} must be a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

/// Borrows the record mapping behind a JSON value.
///
/// Used to validate query and patch arguments without taking ownership.
///
/// # Errors
///
/// Returns [`StoreError::InvalidArgument`] if `value` is not a JSON object.
pub(crate) fn as_record<'a>(value: &'a Value, what: &str) -> StoreResult<&'a Record> {
    match value {
        Value::Object(record) => Ok(record),
        other => Err(StoreError::InvalidArgument(format!(
            "{what} must be a JSON object, got {}",
            type_name(other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_record_accepts_objects() {
        let record = into_record(json!({"name": "Alice"}), "record").unwrap();
        assert_eq!(record.get("name"), Some(&json!("Alice")));
    }

    #[test]
    fn test_into_record_rejects_non_objects() {
        for value in [json!(null), json!(true), json!(42), json!("x"), json!([1, 2])] {
            let err = into_record(value, "record").unwrap_err();
            assert!(matches!(err, StoreError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_as_record_rejects_arrays() {
        let value = json!([{"name": "Alice"}]);
        let err = as_record(&value, "query").unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
    }
}
