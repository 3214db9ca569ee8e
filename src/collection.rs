//! Named collections of records.
//!
//! A collection owns an ordered sequence of records and implements all
//! per-record operations: insert, exact-match find, merge update, and delete.
//! Insertion order is preserved and observable through `find_all`.
//!
//! Collections enforce value semantics at every boundary: inserted records are
//! taken by value, and every read returns independent deep copies, so callers
//! can never alias or retroactively mutate stored state.

use serde_json::Value;

use crate::{
    error::StoreResult,
    matcher::matches,
    record::{as_record, into_record, Record},
};

/// A named, ordered set of records.
///
/// Collections are created through and owned by a [`Store`](crate::store::Store);
/// callers obtain a handle from the store and operate on it directly. The name
/// is immutable after creation.
///
/// # Example
///
/// ```ignore
/// use docstash::Store;
/// use serde_json::json;
///
/// let mut store = Store::new();
/// let users = store.create_collection("users")?;
///
/// users.insert(json!({"name": "Vibhakar", "age": 17}))?;
/// users.insert(json!({"name": "Jasmine", "age": 16}))?;
///
/// let teens = users.find(&json!({"age": 16}))?;
/// assert_eq!(teens.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    records: Vec<Record>,
}

impl Collection {
    /// Creates a new empty collection (internal use; go through the store).
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Replaces the record sequence wholesale (snapshot load path).
    pub(crate) fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts a new record at the end of the collection.
    ///
    /// The record is taken by value, so stored state is independent of the
    /// caller by construction. There is no deduplication and no uniqueness
    /// constraint; inserting the same record twice stores it twice.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to insert; must be a JSON object
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidArgument`](crate::error::StoreError::InvalidArgument)
    /// if `record` is not a JSON object.
    pub fn insert(&mut self, record: Value) -> StoreResult<()> {
        let record = into_record(record, "record")?;
        self.records.push(record);

        Ok(())
    }

    /// Returns a deep copy of every record, in insertion order.
    pub fn find_all(&self) -> Vec<Value> {
        self.records
            .iter()
            .cloned()
            .map(Value::Object)
            .collect()
    }

    /// Finds records matching an exact-match query.
    ///
    /// A record matches if every field in the query exists on the record with
    /// a deep-equal value; a missing field never matches. An empty query
    /// matches every record. Results are deep copies in insertion order;
    /// stored state is never mutated or exposed by reference.
    ///
    /// # Arguments
    ///
    /// * `query` - Field-to-expected-value pairs; must be a JSON object
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidArgument`](crate::error::StoreError::InvalidArgument)
    /// if `query` is not a JSON object.
    pub fn find(&self, query: &Value) -> StoreResult<Vec<Value>> {
        let query = as_record(query, "query")?;

        Ok(self
            .records
            .iter()
            .filter(|record| matches(record, query))
            .cloned()
            .map(Value::Object)
            .collect())
    }

    /// Updates records matching a query by merging a patch into them.
    ///
    /// Records are visited in sequence order; each record is matched against
    /// its pre-update state, then fields present in the patch are set or
    /// overwritten on it. Fields absent from the patch are untouched. Patch
    /// values are cloned in, so mutating the patch afterwards never affects
    /// stored data.
    ///
    /// # Arguments
    ///
    /// * `query` - Field-to-expected-value pairs selecting records to update
    /// * `patch` - Fields to merge into every matching record
    ///
    /// # Returns
    ///
    /// The number of records updated (0 if none matched).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidArgument`](crate::error::StoreError::InvalidArgument)
    /// if `query` or `patch` is not a JSON object.
    pub fn update(&mut self, query: &Value, patch: &Value) -> StoreResult<usize> {
        let query = as_record(query, "query")?;
        let patch = as_record(patch, "patch")?;

        let mut updated = 0;

        for record in &mut self.records {
            if !matches(record, query) {
                continue;
            }

            for (field, value) in patch {
                record.insert(field.clone(), value.clone());
            }

            updated += 1;
        }

        Ok(updated)
    }

    /// Deletes every record matching a query.
    ///
    /// The relative order of the remaining records is preserved. An empty
    /// query matches every record and therefore clears the collection.
    ///
    /// # Arguments
    ///
    /// * `query` - Field-to-expected-value pairs selecting records to delete
    ///
    /// # Returns
    ///
    /// The number of records removed (0 if none matched).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidArgument`](crate::error::StoreError::InvalidArgument)
    /// if `query` is not a JSON object.
    pub fn delete(&mut self, query: &Value) -> StoreResult<usize> {
        let query = as_record(query, "query")?;

        let before = self.records.len();
        self.records.retain(|record| !matches(record, query));

        Ok(before - self.records.len())
    }

    /// Returns the full record sequence as a single JSON array value.
    ///
    /// This is the collection's serializable form, consumed by the store's
    /// snapshot path; array order is insertion order.
    pub fn to_value(&self) -> Value {
        Value::Array(
            self.records
                .iter()
                .cloned()
                .map(Value::Object)
                .collect(),
        )
    }

    /// Renders the full record sequence as a pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`](crate::error::StoreError::Parse) if
    /// serialization fails.
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use serde_json::json;

    fn sample() -> Collection {
        let mut collection = Collection::new("users");
        collection
            .insert(json!({"name": "Vibhakar", "age": 17}))
            .unwrap();
        collection
            .insert(json!({"name": "Jasmine", "age": 16}))
            .unwrap();
        collection
    }

    #[test]
    fn test_insert_then_find_all_round_trips() {
        let mut collection = Collection::new("users");
        collection.insert(json!({"name": "A", "age": 1})).unwrap();

        assert_eq!(collection.find_all(), vec![json!({"name": "A", "age": 1})]);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_insert_rejects_non_object() {
        let mut collection = Collection::new("users");
        let err = collection.insert(json!(["not", "a", "record"])).unwrap_err();

        assert!(matches!(err, StoreError::InvalidArgument(_)));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_insert_allows_duplicates() {
        let mut collection = Collection::new("users");
        collection.insert(json!({"name": "A"})).unwrap();
        collection.insert(json!({"name": "A"})).unwrap();

        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_find_matches_exactly() {
        let collection = sample();

        let found = collection.find(&json!({"age": 17})).unwrap();
        assert_eq!(found, vec![json!({"name": "Vibhakar", "age": 17})]);

        assert!(collection.find(&json!({"age": 99})).unwrap().is_empty());
    }

    #[test]
    fn test_find_empty_query_returns_all_in_insertion_order() {
        let collection = sample();

        let all = collection.find(&json!({})).unwrap();
        assert_eq!(
            all,
            vec![
                json!({"name": "Vibhakar", "age": 17}),
                json!({"name": "Jasmine", "age": 16}),
            ]
        );
    }

    #[test]
    fn test_find_is_idempotent() {
        let collection = sample();

        let first = collection.find(&json!({})).unwrap();
        let second = collection.find(&json!({})).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_results_are_deep_copies() {
        let collection = sample();

        let mut found = collection.find(&json!({"name": "Jasmine"})).unwrap();
        found[0]["age"] = json!(99);

        // Mutating the returned value must not touch stored state.
        let again = collection.find(&json!({"name": "Jasmine"})).unwrap();
        assert_eq!(again[0]["age"], json!(16));
    }

    #[test]
    fn test_update_merges_patch_into_matches_only() {
        let mut collection = sample();

        let updated = collection
            .update(&json!({"name": "Jasmine"}), &json!({"age": 17}))
            .unwrap();
        assert_eq!(updated, 1);

        let all = collection.find_all();
        assert_eq!(all[0], json!({"name": "Vibhakar", "age": 17}));
        assert_eq!(all[1], json!({"name": "Jasmine", "age": 17}));
    }

    #[test]
    fn test_update_leaves_unpatched_fields_untouched() {
        let mut collection = Collection::new("users");
        collection
            .insert(json!({"name": "A", "age": 1, "city": "Pune"}))
            .unwrap();

        collection
            .update(&json!({"name": "A"}), &json!({"age": 2}))
            .unwrap();

        assert_eq!(
            collection.find_all(),
            vec![json!({"name": "A", "age": 2, "city": "Pune"})]
        );
    }

    #[test]
    fn test_update_can_add_new_fields() {
        let mut collection = sample();

        collection
            .update(&json!({"name": "Vibhakar"}), &json!({"grade": 12}))
            .unwrap();

        let found = collection.find(&json!({"name": "Vibhakar"})).unwrap();
        assert_eq!(found[0]["grade"], json!(12));
    }

    #[test]
    fn test_update_clones_patch_values_in() {
        let mut collection = sample();
        let mut patch = json!({"age": 17});

        collection.update(&json!({"name": "Jasmine"}), &patch).unwrap();

        // Mutating the patch after the call must not reach stored data.
        patch["age"] = json!(99);
        let found = collection.find(&json!({"name": "Jasmine"})).unwrap();
        assert_eq!(found[0]["age"], json!(17));
    }

    #[test]
    fn test_update_returns_zero_when_nothing_matches() {
        let mut collection = sample();

        let updated = collection
            .update(&json!({"name": "Nobody"}), &json!({"age": 1}))
            .unwrap();
        assert_eq!(updated, 0);
    }

    #[test]
    fn test_update_matches_pre_update_state_only() {
        let mut collection = Collection::new("users");
        collection.insert(json!({"age": 16})).unwrap();
        collection.insert(json!({"age": 17})).unwrap();

        // Patching 16 -> 17 must not cause the first record to be counted
        // twice or the second record's match to change mid-call.
        let updated = collection
            .update(&json!({"age": 16}), &json!({"age": 17}))
            .unwrap();
        assert_eq!(updated, 1);

        let seventeens = collection.find(&json!({"age": 17})).unwrap();
        assert_eq!(seventeens.len(), 2);
    }

    #[test]
    fn test_update_rejects_non_object_arguments() {
        let mut collection = sample();

        assert!(matches!(
            collection.update(&json!("bad"), &json!({})).unwrap_err(),
            StoreError::InvalidArgument(_)
        ));
        assert!(matches!(
            collection.update(&json!({}), &json!(42)).unwrap_err(),
            StoreError::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_delete_removes_matches_and_counts() {
        let mut collection = sample();

        assert_eq!(collection.delete(&json!({"name": "Vibhakar"})).unwrap(), 1);
        assert_eq!(
            collection.find_all(),
            vec![json!({"name": "Jasmine", "age": 16})]
        );

        // Deleting again finds nothing.
        assert_eq!(collection.delete(&json!({"name": "Vibhakar"})).unwrap(), 0);
    }

    #[test]
    fn test_delete_empty_query_clears_collection() {
        let mut collection = sample();

        assert_eq!(collection.delete(&json!({})).unwrap(), 2);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_delete_preserves_order_of_remaining_records() {
        let mut collection = Collection::new("nums");
        for n in 0..5 {
            collection.insert(json!({"n": n, "even": n % 2 == 0})).unwrap();
        }

        collection.delete(&json!({"even": true})).unwrap();

        let remaining = collection.find_all();
        assert_eq!(remaining[0]["n"], json!(1));
        assert_eq!(remaining[1]["n"], json!(3));
    }

    #[test]
    fn test_to_value_preserves_insertion_order() {
        let collection = sample();

        assert_eq!(
            collection.to_value(),
            json!([
                {"name": "Vibhakar", "age": 17},
                {"name": "Jasmine", "age": 16},
            ])
        );
    }

    #[test]
    fn test_to_json_is_parseable() {
        let collection = sample();

        let text = collection.to_json().unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, collection.to_value());
    }
}
