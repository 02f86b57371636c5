//! Maintenance collection repository

use super::Collections;
use crate::{
    error::{AppError, AppResult},
    models::MaintenanceRecord,
    storage::{seed, CollectionKey},
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    collections: Collections,
}

impl MaintenanceRepository {
    pub fn new(collections: Collections) -> Self {
        Self { collections }
    }

    /// List all maintenance records
    pub fn list(&self) -> AppResult<Vec<MaintenanceRecord>> {
        self.collections.load(CollectionKey::Maintenance, &seed::MAINTENANCE)
    }

    /// Find a record by id, if present
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<MaintenanceRecord>> {
        Ok(self.list()?.into_iter().find(|m| m.id == id))
    }

    /// Get a record by id
    pub fn get_by_id(&self, id: &str) -> AppResult<MaintenanceRecord> {
        self.find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance record {} not found", id)))
    }

    /// Insert a new record and persist the collection
    pub fn insert(&self, record: MaintenanceRecord) -> AppResult<MaintenanceRecord> {
        let mut items = self.list()?;
        items.push(record.clone());
        self.collections.save(CollectionKey::Maintenance, &items)?;
        Ok(record)
    }

    /// Apply a mutation to the record with the given id and persist
    pub fn update<F>(&self, id: &str, mutate: F) -> AppResult<MaintenanceRecord>
    where
        F: FnOnce(&mut MaintenanceRecord),
    {
        let mut items = self.list()?;
        let item = items
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Maintenance record {} not found", id)))?;
        mutate(item);
        let updated = item.clone();
        self.collections.save(CollectionKey::Maintenance, &items)?;
        Ok(updated)
    }

    /// Delete by id and persist
    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|m| m.id != id);
        if items.len() == before {
            return Err(AppError::NotFound(format!("Maintenance record {} not found", id)));
        }
        self.collections.save(CollectionKey::Maintenance, &items)
    }

    /// Delete every record referencing the given equipment id and persist.
    pub fn delete_by_equipment(&self, equipment_id: &str) -> AppResult<usize> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|m| m.equipment_id != equipment_id);
        let removed = before - items.len();
        if removed > 0 {
            self.collections.save(CollectionKey::Maintenance, &items)?;
        }
        Ok(removed)
    }
}
