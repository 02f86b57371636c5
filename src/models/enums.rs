//! Shared domain enums
//!
//! Serialized forms match the strings the dashboard has always persisted
//! ("Available", "Reserved", ...). Where earlier versions of the dashboard
//! wrote an alternate vocabulary, serde aliases accept it on load and the
//! canonical spelling is written back.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Availability status of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentStatus {
    Available,
    Rented,
    Maintenance,
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::Available => "Available",
            EquipmentStatus::Rented => "Rented",
            EquipmentStatus::Maintenance => "Maintenance",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentCondition
// ---------------------------------------------------------------------------

/// Physical condition of a piece of equipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl std::fmt::Display for EquipmentCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentCondition::Excellent => "Excellent",
            EquipmentCondition::Good => "Good",
            EquipmentCondition::Fair => "Fair",
            EquipmentCondition::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// RentalStatus
// ---------------------------------------------------------------------------

/// Stored rental lifecycle states.
///
/// `Overdue` is deliberately absent: it is a derived view (Rented with an
/// end date in the past) computed at query time, never written to storage.
/// Earlier dashboard data used "Ongoing"/"Completed"; both load as their
/// canonical equivalents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentalStatus {
    Reserved,
    #[serde(alias = "Ongoing")]
    Rented,
    #[serde(alias = "Completed")]
    Returned,
    Cancelled,
}

impl RentalStatus {
    /// Whether `self -> to` is a legal lifecycle edge.
    ///
    /// Allowed: Reserved -> Rented | Cancelled, Rented -> Returned | Cancelled.
    pub fn can_transition_to(self, to: RentalStatus) -> bool {
        use RentalStatus::*;
        matches!(
            (self, to),
            (Reserved, Rented) | (Reserved, Cancelled) | (Rented, Returned) | (Rented, Cancelled)
        )
    }

    /// Whether the rental still occupies the equipment.
    pub fn is_active(self) -> bool {
        matches!(self, RentalStatus::Reserved | RentalStatus::Rented)
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RentalStatus::Reserved => "Reserved",
            RentalStatus::Rented => "Rented",
            RentalStatus::Returned => "Returned",
            RentalStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}

/// Rental status as seen by queries: stored states plus the derived one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EffectiveRentalStatus {
    Reserved,
    Rented,
    Returned,
    Cancelled,
    Overdue,
}

impl From<RentalStatus> for EffectiveRentalStatus {
    fn from(s: RentalStatus) -> Self {
        match s {
            RentalStatus::Reserved => EffectiveRentalStatus::Reserved,
            RentalStatus::Rented => EffectiveRentalStatus::Rented,
            RentalStatus::Returned => EffectiveRentalStatus::Returned,
            RentalStatus::Cancelled => EffectiveRentalStatus::Cancelled,
        }
    }
}

// ---------------------------------------------------------------------------
// MaintenanceKind
// ---------------------------------------------------------------------------

/// Kind of maintenance intervention.
///
/// Canonical vocabulary; the alternate one seen in older records maps
/// Preventive -> Routine, Corrective -> Repair, Emergency -> Repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceKind {
    #[serde(rename = "Routine Check", alias = "Routine", alias = "Preventive")]
    Routine,
    #[serde(alias = "Corrective", alias = "Emergency")]
    Repair,
    Inspection,
    #[serde(rename = "Full Service")]
    FullService,
}

impl std::fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceKind::Routine => "Routine Check",
            MaintenanceKind::Repair => "Repair",
            MaintenanceKind::Inspection => "Inspection",
            MaintenanceKind::FullService => "Full Service",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceStatus
// ---------------------------------------------------------------------------

/// Lifecycle state of a maintenance record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceStatus::Scheduled => "Scheduled",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Completed => "Completed",
            MaintenanceStatus::Cancelled => "Cancelled",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User roles as stored on user records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
            Role::Customer => "Customer",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// NotificationKind
// ---------------------------------------------------------------------------

/// Lifecycle events emitted to the notification sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    RentalCreated,
    RentalUpdated,
    RentalReturned,
    EquipmentAdded,
    EquipmentUpdated,
    MaintenanceScheduled,
    MaintenanceCompleted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rental_status_transition_table() {
        use RentalStatus::*;
        assert!(Reserved.can_transition_to(Rented));
        assert!(Reserved.can_transition_to(Cancelled));
        assert!(Rented.can_transition_to(Returned));
        assert!(Rented.can_transition_to(Cancelled));

        assert!(!Returned.can_transition_to(Reserved));
        assert!(!Cancelled.can_transition_to(Rented));
        assert!(!Reserved.can_transition_to(Returned));
        assert!(!Returned.can_transition_to(Rented));
    }

    #[test]
    fn test_rental_status_legacy_aliases() {
        let s: RentalStatus = serde_json::from_str("\"Ongoing\"").unwrap();
        assert_eq!(s, RentalStatus::Rented);
        let s: RentalStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(s, RentalStatus::Returned);
        // Canonical spelling is what gets written back.
        assert_eq!(serde_json::to_string(&RentalStatus::Rented).unwrap(), "\"Rented\"");
    }

    #[test]
    fn test_maintenance_kind_vocabulary_mapping() {
        let k: MaintenanceKind = serde_json::from_str("\"Preventive\"").unwrap();
        assert_eq!(k, MaintenanceKind::Routine);
        let k: MaintenanceKind = serde_json::from_str("\"Corrective\"").unwrap();
        assert_eq!(k, MaintenanceKind::Repair);
        let k: MaintenanceKind = serde_json::from_str("\"Emergency\"").unwrap();
        assert_eq!(k, MaintenanceKind::Repair);
        let k: MaintenanceKind = serde_json::from_str("\"Routine Check\"").unwrap();
        assert_eq!(k, MaintenanceKind::Routine);
        assert_eq!(
            serde_json::to_string(&MaintenanceKind::FullService).unwrap(),
            "\"Full Service\""
        );
    }

    #[test]
    fn test_notification_kind_serialized_form() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::RentalReturned).unwrap(),
            "\"RENTAL_RETURNED\""
        );
    }
}
