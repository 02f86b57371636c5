//! Equipment collection repository

use super::Collections;
use crate::{
    error::{AppError, AppResult},
    models::Equipment,
    storage::{seed, CollectionKey},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    collections: Collections,
}

impl EquipmentRepository {
    pub fn new(collections: Collections) -> Self {
        Self { collections }
    }

    /// List all equipment
    pub fn list(&self) -> AppResult<Vec<Equipment>> {
        self.collections.load(CollectionKey::Equipment, &seed::EQUIPMENT)
    }

    /// Find equipment by id, if present
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Equipment>> {
        Ok(self.list()?.into_iter().find(|eq| eq.id == id))
    }

    /// Get equipment by id
    pub fn get_by_id(&self, id: &str) -> AppResult<Equipment> {
        self.find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Insert a new record and persist the collection
    pub fn insert(&self, equipment: Equipment) -> AppResult<Equipment> {
        let mut items = self.list()?;
        items.push(equipment.clone());
        self.collections.save(CollectionKey::Equipment, &items)?;
        Ok(equipment)
    }

    /// Apply a mutation to the record with the given id and persist
    pub fn update<F>(&self, id: &str, mutate: F) -> AppResult<Equipment>
    where
        F: FnOnce(&mut Equipment),
    {
        let mut items = self.list()?;
        let item = items
            .iter_mut()
            .find(|eq| eq.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;
        mutate(item);
        let updated = item.clone();
        self.collections.save(CollectionKey::Equipment, &items)?;
        Ok(updated)
    }

    /// Delete by id and persist
    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|eq| eq.id != id);
        if items.len() == before {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        self.collections.save(CollectionKey::Equipment, &items)
    }
}
