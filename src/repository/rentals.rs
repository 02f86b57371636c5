//! Rentals collection repository

use super::Collections;
use crate::{
    error::{AppError, AppResult},
    models::Rental,
    storage::{seed, CollectionKey},
};

#[derive(Clone)]
pub struct RentalsRepository {
    collections: Collections,
}

impl RentalsRepository {
    pub fn new(collections: Collections) -> Self {
        Self { collections }
    }

    /// List all rentals
    pub fn list(&self) -> AppResult<Vec<Rental>> {
        self.collections.load(CollectionKey::Rentals, &seed::RENTALS)
    }

    /// Find a rental by id, if present
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Rental>> {
        Ok(self.list()?.into_iter().find(|r| r.id == id))
    }

    /// Get a rental by id
    pub fn get_by_id(&self, id: &str) -> AppResult<Rental> {
        self.find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("Rental {} not found", id)))
    }

    /// Insert a new record and persist the collection
    pub fn insert(&self, rental: Rental) -> AppResult<Rental> {
        let mut items = self.list()?;
        items.push(rental.clone());
        self.collections.save(CollectionKey::Rentals, &items)?;
        Ok(rental)
    }

    /// Apply a mutation to the record with the given id and persist
    pub fn update<F>(&self, id: &str, mutate: F) -> AppResult<Rental>
    where
        F: FnOnce(&mut Rental),
    {
        let mut items = self.list()?;
        let item = items
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Rental {} not found", id)))?;
        mutate(item);
        let updated = item.clone();
        self.collections.save(CollectionKey::Rentals, &items)?;
        Ok(updated)
    }

    /// Delete by id and persist
    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|r| r.id != id);
        if items.len() == before {
            return Err(AppError::NotFound(format!("Rental {} not found", id)));
        }
        self.collections.save(CollectionKey::Rentals, &items)
    }

    /// Delete every rental referencing the given equipment id and persist.
    /// Used by the optional cascade on equipment removal.
    pub fn delete_by_equipment(&self, equipment_id: &str) -> AppResult<usize> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|r| r.equipment_id != equipment_id);
        let removed = before - items.len();
        if removed > 0 {
            self.collections.save(CollectionKey::Rentals, &items)?;
        }
        Ok(removed)
    }
}
