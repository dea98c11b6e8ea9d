//! In-memory item store for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use itemgate_core::{Item, NewItem, UpdatedItem};

use crate::store::{ItemStore, StoreError};

/// In-memory store keyed by item id.
///
/// Insert assigns a UUIDv7 id (time-ordered) and the creation timestamp, so
/// listings come back in insertion order when sorted by id.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<HashMap<String, Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// A poisoned lock means a writer panicked mid-operation; surface it as a
// backend failure instead of propagating the panic.
fn poisoned() -> StoreError {
    StoreError::backend("item store lock poisoned")
}

impl ItemStore for InMemoryItemStore {
    fn list(&self) -> Result<Vec<Item>, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut items: Vec<Item> = map.values().cloned().collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(items)
    }

    fn get(&self, id: &str) -> Result<Option<Item>, StoreError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(id).cloned())
    }

    fn insert(&self, payload: NewItem) -> Result<Item, StoreError> {
        let item = Item {
            id: Uuid::now_v7().to_string(),
            name: payload.name,
            description: payload.description,
            created_at: Utc::now(),
        };

        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    fn update(&self, id: &str, payload: UpdatedItem) -> Result<Option<Item>, StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        match map.get_mut(id) {
            Some(existing) => {
                existing.name = payload.name;
                existing.description = payload.description;
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: &str) -> Result<Option<Item>, StoreError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        Ok(map.remove(id))
    }
}
