//! Equipment registry service
//!
//! Single source of truth for the equipment inventory and its status field.
//! Status is only ever advanced through `set_status`; the rental and
//! maintenance flows call it explicitly rather than flipping status as a
//! side effect of their own mutations.

use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    config::RulesConfig,
    error::AppResult,
    identity::{IdGenerator, EQUIPMENT_PREFIX},
    models::{
        enums::{EquipmentStatus, NotificationKind},
        CreateEquipment, Equipment, UpdateEquipment,
    },
    repository::Repository,
    services::notifications::NotificationSink,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    rules: RulesConfig,
    sink: Arc<dyn NotificationSink>,
    ids: IdGenerator,
}

impl EquipmentService {
    pub fn new(repository: Repository, rules: RulesConfig, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            repository,
            rules,
            sink,
            ids: IdGenerator::new(),
        }
    }

    /// List the whole inventory
    pub fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list()
    }

    /// Equipment by id, if present
    pub fn by_id(&self, id: &str) -> AppResult<Option<Equipment>> {
        self.repository.equipment.find_by_id(id)
    }

    /// Equipment currently available for rental. Recomputed from the
    /// collection on every call, never cached.
    pub fn find_available(&self) -> AppResult<Vec<Equipment>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|eq| eq.status == EquipmentStatus::Available)
            .collect())
    }

    /// Equipment in the given category
    pub fn by_category(&self, category: &str) -> AppResult<Vec<Equipment>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|eq| eq.category == category)
            .collect())
    }

    /// Add a new piece of equipment.
    ///
    /// Validation runs before anything is persisted, so a rejected request
    /// leaves the collection untouched.
    pub fn add(&self, data: CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;

        let equipment = Equipment {
            id: self.ids.generate(EQUIPMENT_PREFIX),
            name: data.name,
            category: data.category,
            condition: data.condition,
            status: data.status.unwrap_or(EquipmentStatus::Available),
            description: data.description,
            daily_rate: data.daily_rate,
            date_added: Utc::now().date_naive(),
        };
        let equipment = self.repository.equipment.insert(equipment)?;

        tracing::info!(id = %equipment.id, name = %equipment.name, "equipment added");
        self.sink.notify(
            NotificationKind::EquipmentAdded,
            "Equipment Added",
            &format!("{} has been added to the inventory", equipment.name),
        );
        Ok(equipment)
    }

    /// Merge a patch into an existing record. The patch is not deeply
    /// validated, matching the registry's historically permissive update.
    pub fn update(&self, id: &str, patch: UpdateEquipment) -> AppResult<Equipment> {
        let equipment = self.repository.equipment.update(id, |eq| patch.apply_to(eq))?;

        tracing::info!(id = %equipment.id, "equipment updated");
        self.sink.notify(
            NotificationKind::EquipmentUpdated,
            "Equipment Updated",
            &format!("{} has been updated", equipment.name),
        );
        Ok(equipment)
    }

    /// Narrow status mutation used by the rental and maintenance flows.
    pub fn set_status(&self, id: &str, status: EquipmentStatus) -> AppResult<Equipment> {
        let equipment = self.repository.equipment.update(id, |eq| eq.status = status)?;
        tracing::info!(id = %equipment.id, %status, "equipment status changed");
        Ok(equipment)
    }

    /// Remove equipment by id.
    ///
    /// By default historical rentals and maintenance records keep their
    /// dangling reference; with `rules.cascade_delete` they are removed in
    /// the same operation.
    pub fn remove(&self, id: &str) -> AppResult<()> {
        self.repository.equipment.delete(id)?;

        if self.rules.cascade_delete {
            let rentals = self.repository.rentals.delete_by_equipment(id)?;
            let maintenance = self.repository.maintenance.delete_by_equipment(id)?;
            tracing::info!(id, rentals, maintenance, "equipment removed with cascade");
        } else {
            tracing::info!(id, "equipment removed");
        }
        Ok(())
    }
}
