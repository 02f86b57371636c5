//! Data models for the Rentora engine

pub mod enums;
pub mod equipment;
pub mod maintenance;
pub mod notification;
pub mod rental;
pub mod user;

// Re-export commonly used types
pub use enums::{
    EffectiveRentalStatus, EquipmentCondition, EquipmentStatus, MaintenanceKind,
    MaintenanceStatus, NotificationKind, RentalStatus, Role,
};
pub use equipment::{CreateEquipment, Equipment, UpdateEquipment};
pub use maintenance::{CreateMaintenance, MaintenanceRecord, UpdateMaintenance};
pub use notification::Notification;
pub use rental::{CreateRental, Rental, UpdateRental};
pub use user::{CurrentUser, User};
