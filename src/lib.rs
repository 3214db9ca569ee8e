//! A minimal in-process JSON document store with whole-store snapshot persistence.
//!
//! docstash keeps named collections of freeform records entirely in memory and
//! can dump or restore the whole database as a single JSON document. There is
//! deliberately no indexing, no query planner, no concurrency control, and no
//! durability beyond a full snapshot: the entire surface is a small CRUD layer.
//!
//! # Features
//!
//! - **Schemaless records** ([`record`]) - Records are plain JSON objects; two
//!   records in the same collection may have disjoint field sets
//! - **Exact-match queries** ([`collection`]) - Find, update, and delete select
//!   records by deep value equality on the queried fields, nothing more
//! - **Ordered collections** ([`collection`]) - Insertion order is preserved
//!   and observable; every read returns independent deep copies
//! - **Owned store** ([`store`]) - The store is an explicit value with no
//!   process-wide registry; collections live exactly as long as it does
//! - **Snapshot persistence** ([`store`]) - One JSON object per store, one
//!   record array per collection, written and read whole-file
//! - **Error handling** ([`error`]) - A single error enum and result alias
//!
//! # Quick Start
//!
//! ```ignore
//! use docstash::{Store, StoreResult};
//! use serde_json::json;
//!
//! fn main() -> StoreResult<()> {
//!     let mut store = Store::new();
//!
//!     let users = store.create_collection("users")?;
//!     users.insert(json!({"name": "Vibhakar", "age": 17}))?;
//!     users.insert(json!({"name": "Jasmine", "age": 16}))?;
//!
//!     // Exact-match query: every queried field must be deep-equal.
//!     let sixteen = users.find(&json!({"age": 16}))?;
//!     assert_eq!(sixteen.len(), 1);
//!
//!     // Merge a patch into every matching record.
//!     let updated = users.update(&json!({"name": "Jasmine"}), &json!({"age": 17}))?;
//!     assert_eq!(updated, 1);
//!
//!     // Persist the whole store and restore it elsewhere.
//!     store.save("db.json")?;
//!
//!     let mut restored = Store::new();
//!     restored.load("db.json")?;
//!     assert_eq!(restored.collection("users")?.len(), 2);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Concurrency
//!
//! All operations are synchronous and the store defines no concurrent-access
//! contract; one logical owner operates on a store at a time. Embedders in
//! concurrent hosts must wrap the store in their own exclusive lock.

pub mod collection;
pub mod error;
mod matcher;
pub mod record;
pub mod store;

pub use collection::Collection;
pub use error::{StoreError, StoreResult};
pub use record::Record;
pub use store::Store;
