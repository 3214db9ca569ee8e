//! Exact-match query evaluation over records.
//!
//! This module implements the single matching contract shared by `find`,
//! `update`, and `delete`: a record matches a query iff every field named in
//! the query exists on the record with a deep-equal value. There are no
//! comparison, prefix, regex, or logical operators; equality is the entire
//! query language.

use serde_json::{Number, Value};

use crate::record::Record;

/// Returns true if `record` matches `query`.
///
/// Every `(field, value)` pair in the query must have a deep-equal entry in
/// the record; a missing field never matches. An empty query matches every
/// record.
pub(crate) fn matches(record: &Record, query: &Record) -> bool {
    query
        .iter()
        .all(|(field, expected)| {
            record
                .get(field)
                .is_some_and(|actual| value_eq(actual, expected))
        })
}

/// Deep structural equality over JSON values.
///
/// Numbers compare by value across representations, so `17` and `17.0` are
/// equal without integers losing precision (see [`number_eq`]). Arrays
/// compare element-wise in order, objects compare by key set and per-key
/// value irrespective of key order.
pub(crate) fn value_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => number_eq(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| value_eq(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, x)| {
                    b.get(key).is_some_and(|y| value_eq(x, y))
                })
        }
        _ => left == right,
    }
}

/// Exact equality over JSON numbers.
///
/// Integers compare exactly regardless of magnitude. An integer compares
/// equal to a float only when its value survives conversion to f64, so
/// `17 == 17.0` but `9007199254740993 != 9007199254740992.0`.
fn number_eq(left: &Number, right: &Number) -> bool {
    if let (Some(a), Some(b)) = (left.as_i64(), right.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (left.as_u64(), right.as_u64()) {
        return a == b;
    }
    if !left.is_f64() && !right.is_f64() {
        // Integers in disjoint ranges: one negative, one above i64::MAX.
        return false;
    }

    match (left.as_f64(), right.as_f64()) {
        (Some(x), Some(y)) => x == y && round_trips_f64(left) && round_trips_f64(right),
        _ => false,
    }
}

/// True when the number's value is exactly representable as f64.
///
/// Floats trivially qualify. The MAX guards cover the saturating casts at the
/// top of each integer range, where the round trip would lie.
fn round_trips_f64(number: &Number) -> bool {
    if let Some(i) = number.as_i64() {
        i != i64::MAX && (i as f64) as i64 == i
    } else if let Some(u) = number.as_u64() {
        u != u64::MAX && (u as f64) as u64 == u
    } else {
        true
    }
}
