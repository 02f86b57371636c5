//! Maintenance record model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{MaintenanceKind, MaintenanceStatus};

/// Maintenance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String,
    pub equipment_id: String,
    /// Snapshot of the equipment name at scheduling time.
    pub equipment_name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: MaintenanceKind,
    pub technician: String,
    pub status: MaintenanceStatus,
    pub cost: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_date: DateTime<Utc>,
}

/// Create maintenance request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenance {
    pub equipment_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: MaintenanceKind,
    pub technician: String,
    pub cost: Decimal,
    pub notes: Option<String>,
    /// Explicit initial status; defaults to Scheduled.
    pub status: Option<MaintenanceStatus>,
}

/// Update maintenance request (partial merge)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenance {
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: Option<MaintenanceKind>,
    pub technician: Option<String>,
    pub status: Option<MaintenanceStatus>,
    pub cost: Option<Decimal>,
    pub notes: Option<String>,
}

impl UpdateMaintenance {
    /// Merge the patch into an existing record. Absent fields are kept.
    pub fn apply_to(&self, record: &mut MaintenanceRecord) {
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(kind) = self.kind {
            record.kind = kind;
        }
        if let Some(ref technician) = self.technician {
            record.technician = technician.clone();
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(cost) = self.cost {
            record.cost = cost;
        }
        if let Some(ref notes) = self.notes {
            record.notes = Some(notes.clone());
        }
    }
}
