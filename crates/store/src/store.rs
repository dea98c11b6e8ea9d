//! Store adapter boundary for the item collection.

use std::sync::Arc;

use thiserror::Error;

use itemgate_core::{Item, NewItem, UpdatedItem};

/// Failure inside the storage backend.
///
/// Absence of a record is not an error: operations return `Ok(None)` for "no
/// such id" so callers can tell "not found" apart from "broken".
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation.
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// CRUD operations over the item collection.
///
/// Every call is synchronous and single-shot; the gateway never retries a
/// failed operation.
pub trait ItemStore: Send + Sync {
    fn list(&self) -> Result<Vec<Item>, StoreError>;
    fn get(&self, id: &str) -> Result<Option<Item>, StoreError>;
    fn insert(&self, payload: NewItem) -> Result<Item, StoreError>;
    fn update(&self, id: &str, payload: UpdatedItem) -> Result<Option<Item>, StoreError>;
    fn delete(&self, id: &str) -> Result<Option<Item>, StoreError>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn list(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list()
    }

    fn get(&self, id: &str) -> Result<Option<Item>, StoreError> {
        (**self).get(id)
    }

    fn insert(&self, payload: NewItem) -> Result<Item, StoreError> {
        (**self).insert(payload)
    }

    fn update(&self, id: &str, payload: UpdatedItem) -> Result<Option<Item>, StoreError> {
        (**self).update(id, payload)
    }

    fn delete(&self, id: &str) -> Result<Option<Item>, StoreError> {
        (**self).delete(id)
    }
}
