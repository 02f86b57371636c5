//! Repository layer over the key-value store
//!
//! Each sub-repository owns one collection and follows the same cycle for
//! every mutation: load the whole collection (seeding it on first read),
//! apply the change, write the whole collection back.

pub mod equipment;
pub mod maintenance;
pub mod notifications;
pub mod rentals;
pub mod users;

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{AppResult, StoreError},
    storage::{CollectionKey, KeyValueStore},
};

/// Shared access to the store, with optional key namespacing.
#[derive(Clone)]
pub struct Collections {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl Collections {
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    fn full_key(&self, key: CollectionKey) -> String {
        format!("{}{}", self.namespace, key.as_str())
    }

    /// Load a collection, falling back to `seed` when the key has never
    /// been written.
    pub fn load<T>(&self, key: CollectionKey, seed: &[T]) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned + Clone,
    {
        let full_key = self.full_key(key);
        match self.store.get(&full_key)? {
            Some(raw) => {
                let items = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                    key: full_key,
                    reason: e.to_string(),
                })?;
                Ok(items)
            }
            None => Ok(seed.to_vec()),
        }
    }

    /// Overwrite a collection.
    pub fn save<T: Serialize>(&self, key: CollectionKey, items: &[T]) -> AppResult<()> {
        let full_key = self.full_key(key);
        let raw = serde_json::to_string(items).map_err(|e| StoreError::Write {
            key: full_key.clone(),
            reason: e.to_string(),
        })?;
        self.store.set(&full_key, &raw)?;
        Ok(())
    }

    /// Load a single record stored directly under a key (`current_user`).
    pub fn load_value<T: DeserializeOwned>(&self, key: CollectionKey) -> AppResult<Option<T>> {
        let full_key = self.full_key(key);
        match self.store.get(&full_key)? {
            Some(raw) => {
                let value = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                    key: full_key,
                    reason: e.to_string(),
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Store a single record directly under a key.
    pub fn save_value<T: Serialize>(&self, key: CollectionKey, value: &T) -> AppResult<()> {
        let full_key = self.full_key(key);
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Write {
            key: full_key.clone(),
            reason: e.to_string(),
        })?;
        self.store.set(&full_key, &raw)?;
        Ok(())
    }

    /// Remove a key outright.
    pub fn remove(&self, key: CollectionKey) -> AppResult<()> {
        self.store.remove(&self.full_key(key))?;
        Ok(())
    }
}

/// Main repository struct holding one sub-repository per collection
#[derive(Clone)]
pub struct Repository {
    pub equipment: equipment::EquipmentRepository,
    pub rentals: rentals::RentalsRepository,
    pub maintenance: maintenance::MaintenanceRepository,
    pub users: users::UsersRepository,
    pub notifications: notifications::NotificationsRepository,
}

impl Repository {
    /// Create a new repository over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>, namespace: impl Into<String>) -> Self {
        let collections = Collections::new(store, namespace);
        Self {
            equipment: equipment::EquipmentRepository::new(collections.clone()),
            rentals: rentals::RentalsRepository::new(collections.clone()),
            maintenance: maintenance::MaintenanceRepository::new(collections.clone()),
            users: users::UsersRepository::new(collections.clone()),
            notifications: notifications::NotificationsRepository::new(collections),
        }
    }
}
