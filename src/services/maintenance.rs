//! Maintenance schedule service
//!
//! Independent lifecycle, coupled to the rest of the engine only through
//! the shared equipment registry. Scheduling does not reserve the
//! equipment by itself; callers flip status through the registry when the
//! workflow requires it.

use std::sync::Arc;

use chrono::Utc;

use crate::{
    error::AppResult,
    identity::{IdGenerator, MAINTENANCE_PREFIX},
    models::{
        enums::{MaintenanceStatus, NotificationKind},
        CreateMaintenance, MaintenanceRecord, UpdateMaintenance,
    },
    repository::Repository,
    services::notifications::NotificationSink,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
    sink: Arc<dyn NotificationSink>,
    ids: IdGenerator,
}

impl MaintenanceService {
    pub fn new(repository: Repository, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            repository,
            sink,
            ids: IdGenerator::new(),
        }
    }

    /// List all maintenance records
    pub fn list(&self) -> AppResult<Vec<MaintenanceRecord>> {
        self.repository.maintenance.list()
    }

    /// Record by id, if present
    pub fn by_id(&self, id: &str) -> AppResult<Option<MaintenanceRecord>> {
        self.repository.maintenance.find_by_id(id)
    }

    /// Records referencing the given equipment; empty for unknown ids
    pub fn by_equipment(&self, equipment_id: &str) -> AppResult<Vec<MaintenanceRecord>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|m| m.equipment_id == equipment_id)
            .collect())
    }

    /// Records dated within `[today, today + window_days]`, ascending by
    /// date. Recomputed per call.
    pub fn upcoming(&self, window_days: i64) -> AppResult<Vec<MaintenanceRecord>> {
        let mut records: Vec<MaintenanceRecord> = self
            .list()?
            .into_iter()
            .filter(|m| crate::dates::is_within_next_days(m.date, window_days))
            .collect();
        records.sort_by_key(|m| m.date);
        Ok(records)
    }

    /// Schedule maintenance for a piece of equipment.
    ///
    /// The equipment must resolve; its name is snapshotted onto the record.
    pub fn add(&self, data: CreateMaintenance) -> AppResult<MaintenanceRecord> {
        let equipment = self.repository.equipment.get_by_id(&data.equipment_id)?;

        let record = MaintenanceRecord {
            id: self.ids.generate(MAINTENANCE_PREFIX),
            equipment_id: equipment.id.clone(),
            equipment_name: equipment.name.clone(),
            date: data.date,
            kind: data.kind,
            technician: data.technician,
            status: data.status.unwrap_or(MaintenanceStatus::Scheduled),
            cost: data.cost,
            notes: data.notes,
            created_date: Utc::now(),
        };
        let record = self.repository.maintenance.insert(record)?;

        tracing::info!(id = %record.id, equipment = %record.equipment_name, "maintenance scheduled");
        self.sink.notify(
            NotificationKind::MaintenanceScheduled,
            "Maintenance Scheduled",
            &format!("Maintenance for {} has been scheduled", record.equipment_name),
        );
        Ok(record)
    }

    /// Merge a patch into a record. Completing a record emits a
    /// MaintenanceCompleted event.
    pub fn update(&self, id: &str, patch: UpdateMaintenance) -> AppResult<MaintenanceRecord> {
        let existing = self.repository.maintenance.get_by_id(id)?;
        let completed = patch.status == Some(MaintenanceStatus::Completed)
            && existing.status != MaintenanceStatus::Completed;

        let record = self.repository.maintenance.update(id, |m| patch.apply_to(m))?;

        if completed {
            tracing::info!(id = %record.id, "maintenance completed");
            self.sink.notify(
                NotificationKind::MaintenanceCompleted,
                "Maintenance Completed",
                &format!("Maintenance for {} has been completed", record.equipment_name),
            );
        }
        Ok(record)
    }

    /// Delete a record by id
    pub fn remove(&self, id: &str) -> AppResult<()> {
        self.repository.maintenance.delete(id)?;
        tracing::info!(id, "maintenance record removed");
        Ok(())
    }
}
