//! Error types and result types for store operations.
//!
//! This module provides error handling for all collection and store operations.
//! Use [`StoreResult<T>`] as the return type for fallible operations.

use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a store.
///
/// This enum covers argument validation, collection lifecycle collisions,
/// and the snapshot persistence path.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A structural precondition failed: a record, query, or patch argument
    /// was not a JSON object.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A collection with the given name already exists in the store.
    /// Raised by explicit creation and by additive snapshot load.
    #[error("Collection {0} already exists")]
    CollectionAlreadyExists(String),
    /// The requested collection does not exist in the store.
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),
    /// A filesystem error occurred while reading or writing a snapshot.
    #[error("IO error: {0}")]
    Io(String),
    /// A snapshot file was not valid JSON of the expected shape
    /// (object of collection name to array of record objects).
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A specialized `Result` type for store operations.
///
/// This type alias is used throughout the crate to indicate operations that may fail
/// with a [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Parse(err.to_string())
    }
}
