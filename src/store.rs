//! The top-level store owning all collections.
//!
//! A [`Store`] maps unique collection names to [`Collection`] values and
//! provides lifecycle operations (create, get, drop) plus whole-store snapshot
//! persistence to a single JSON file. The store performs no per-record logic;
//! callers obtain a collection handle and operate on it directly.
//!
//! There is no process-wide singleton: a store is an explicit owned value, and
//! its collections live exactly as long as it does. The store is
//! single-threaded and synchronous; embedders in concurrent hosts must add
//! their own external synchronization.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    collection::Collection,
    error::{StoreError, StoreResult},
    record::Record,
};

/// On-disk snapshot shape: collection name -> ordered record array.
///
/// A `BTreeMap` keeps both the written key order and the additive load order
/// deterministic; the file contract itself leaves key order unspecified.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct Snapshot(BTreeMap<String, Vec<Record>>);

/// An in-process document store owning a set of named collections.
///
/// # Example
///
/// ```ignore
/// use docstash::Store;
/// use serde_json::json;
///
/// let mut store = Store::new();
///
/// let users = store.create_collection("users")?;
/// users.insert(json!({"name": "Vibhakar", "age": 17}))?;
///
/// store.save("db.json")?;
///
/// let mut restored = Store::new();
/// restored.load("db.json")?;
/// assert_eq!(restored.collection("users")?.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Store {
    collections: HashMap<String, Collection>,
}

impl Store {
    /// Creates a new empty store with no collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of collections in the store.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns true if the store holds no collections.
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Creates a new empty collection with the given name.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the collection to create; must be unique
    ///
    /// # Returns
    ///
    /// A mutable handle to the newly created collection, which the caller
    /// uses for all subsequent record operations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CollectionAlreadyExists`] if a collection with
    /// this name is already present.
    pub fn create_collection(&mut self, name: &str) -> StoreResult<&mut Collection> {
        if self.collections.contains_key(name) {
            return Err(StoreError::CollectionAlreadyExists(name.to_string()));
        }

        let collection = self
            .collections
            .entry(name.to_string())
            .or_insert_with(|| Collection::new(name));

        trace!("created collection {name}");

        Ok(collection)
    }

    /// Gets a shared handle to an existing collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CollectionNotFound`] if no collection with this
    /// name exists.
    pub fn collection(&self, name: &str) -> StoreResult<&Collection> {
        self.collections
            .get(name)
            .ok_or_else(|| StoreError::CollectionNotFound(name.to_string()))
    }

    /// Gets a mutable handle to an existing collection.
    ///
    /// The handle refers to the same underlying state that `create_collection`
    /// returned; it is not a copy.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CollectionNotFound`] if no collection with this
    /// name exists.
    pub fn collection_mut(&mut self, name: &str) -> StoreResult<&mut Collection> {
        self.collections
            .get_mut(name)
            .ok_or_else(|| StoreError::CollectionNotFound(name.to_string()))
    }

    /// Drops a collection and all its records.
    ///
    /// # Returns
    ///
    /// True if the collection existed, false otherwise. Never fails.
    pub fn drop_collection(&mut self, name: &str) -> bool {
        let existed = self.collections.remove(name).is_some();

        if existed {
            debug!("dropped collection {name}");
        }

        existed
    }

    /// Lists the names of all collections in the store.
    pub fn list_collections(&self) -> Vec<String> {
        self.collections.keys().cloned().collect()
    }

    /// Saves the entire store to a single JSON document at `path`.
    ///
    /// Every collection's full record sequence is written under its name,
    /// overwriting any existing file content. Record order within each
    /// collection's array is preserved; top-level key order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let snapshot: BTreeMap<&str, serde_json::Value> = self
            .collections
            .iter()
            .map(|(name, collection)| (name.as_str(), collection.to_value()))
            .collect();

        let text = serde_json::to_string_pretty(&snapshot)?;
        fs::write(path, text)?;

        debug!(
            "saved {} collection(s) to {}",
            self.collections.len(),
            path.display()
        );

        Ok(())
    }

    /// Loads collections from a JSON snapshot at `path`, additively.
    ///
    /// For each top-level key in the document, a new collection is created
    /// with that name and populated with the associated record array in array
    /// order. Load never merges into an existing collection: a name collision
    /// propagates from collection creation, leaving collections created
    /// earlier in the same call in place.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Io`] if the file is missing or unreadable
    /// - [`StoreError::Parse`] if the content is not a JSON object of
    ///   collection name to array of record objects
    /// - [`StoreError::CollectionAlreadyExists`] if a loaded collection name
    ///   is already present in this store
    pub fn load(&mut self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let Snapshot(snapshot) = serde_json::from_str::<Snapshot>(&text)?;

        let loaded = snapshot.len();

        for (name, records) in snapshot {
            trace!("loading collection {name} with {} record(s)", records.len());
            let collection = self.create_collection(&name)?;
            collection.set_records(records);
        }

        debug!("loaded {loaded} collection(s) from {}", path.display());

        Ok(())
    }
}
