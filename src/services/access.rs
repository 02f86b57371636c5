//! Role capability policy
//!
//! A pure role-to-operation map consulted by callers before invoking the
//! services; the services themselves do not enforce it, matching the
//! dashboard's role gating at the UI boundary.

use crate::models::enums::Role;

/// Operations a caller may want to gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ManageEquipment,
    ManageRentals,
    ManageMaintenance,
    ViewAllRentals,
    CreateRental,
}

/// Maps roles to permitted operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Whether the role may perform the operation.
    pub fn is_permitted(&self, role: Role, operation: Operation) -> bool {
        match operation {
            Operation::ManageEquipment
            | Operation::ManageRentals
            | Operation::ManageMaintenance
            | Operation::ViewAllRentals => matches!(role, Role::Admin | Role::Staff),
            Operation::CreateRental => true,
        }
    }
}
