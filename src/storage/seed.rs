//! Default seed collections
//!
//! Returned by the repositories when a collection key has never been
//! written, so a fresh installation starts with a usable inventory instead
//! of empty screens.

use chrono::{NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::models::{
    enums::{
        EquipmentCondition::{Excellent, Fair, Good},
        EquipmentStatus, MaintenanceKind, MaintenanceStatus, RentalStatus, Role,
    },
    Equipment, MaintenanceRecord, Rental, User,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn equipment(
    id: &str,
    name: &str,
    category: &str,
    condition: crate::models::EquipmentCondition,
    status: EquipmentStatus,
    description: &str,
    daily_rate: i64,
    added: NaiveDate,
) -> Equipment {
    Equipment {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        condition,
        status,
        description: Some(description.into()),
        daily_rate: Decimal::from(daily_rate),
        date_added: added,
    }
}

pub static EQUIPMENT: Lazy<Vec<Equipment>> = Lazy::new(|| {
    vec![
        equipment(
            "eq1",
            "Excavator",
            "Heavy Machinery",
            Good,
            EquipmentStatus::Available,
            "CAT 320 Excavator - 20 ton capacity",
            250,
            date(2025, 1, 15),
        ),
        equipment(
            "eq2",
            "Concrete Mixer",
            "Construction",
            Excellent,
            EquipmentStatus::Rented,
            "Portable concrete mixer - 6 cubic foot capacity",
            75,
            date(2025, 1, 20),
        ),
        equipment(
            "eq3",
            "Bulldozer",
            "Heavy Machinery",
            Fair,
            EquipmentStatus::Maintenance,
            "CAT D6 Bulldozer",
            300,
            date(2025, 2, 1),
        ),
        equipment(
            "eq4",
            "Forklift",
            "Warehouse Equipment",
            Good,
            EquipmentStatus::Available,
            "Electric forklift - 5000 lb capacity",
            150,
            date(2025, 2, 10),
        ),
        equipment(
            "eq5",
            "Scissor Lift",
            "Construction",
            Excellent,
            EquipmentStatus::Available,
            "Electric scissor lift - 20ft height",
            120,
            date(2025, 2, 15),
        ),
        equipment(
            "eq6",
            "Dump Truck",
            "Heavy Machinery",
            Good,
            EquipmentStatus::Available,
            "10-wheel dump truck",
            280,
            date(2025, 2, 20),
        ),
    ]
});

fn rental(
    id: &str,
    equipment_id: &str,
    equipment_name: &str,
    customer_id: &str,
    customer_name: &str,
    start: NaiveDate,
    end: NaiveDate,
    status: RentalStatus,
    daily_rate: i64,
    notes: &str,
) -> Rental {
    let rate = Decimal::from(daily_rate);
    Rental {
        id: id.into(),
        equipment_id: equipment_id.into(),
        customer_id: customer_id.into(),
        equipment_name: equipment_name.into(),
        customer_name: customer_name.into(),
        start_date: start,
        end_date: end,
        status,
        daily_rate: rate,
        total_cost: rate * Decimal::from(crate::dates::days_between(start, end)),
        notes: Some(notes.into()),
        created_date: Utc
            .with_ymd_and_hms(2025, 5, 30, 12, 0, 0)
            .single()
            .expect("valid seed timestamp"),
    }
}

pub static RENTALS: Lazy<Vec<Rental>> = Lazy::new(|| {
    vec![
        rental(
            "r1",
            "eq2",
            "Concrete Mixer",
            "3",
            "Customer User",
            date(2025, 6, 1),
            date(2025, 6, 5),
            RentalStatus::Reserved,
            75,
            "First rental",
        ),
        rental(
            "r2",
            "eq4",
            "Forklift",
            "4",
            "Jane Doe",
            date(2025, 6, 2),
            date(2025, 6, 10),
            RentalStatus::Rented,
            150,
            "Extended rental period",
        ),
        rental(
            "r3",
            "eq5",
            "Scissor Lift",
            "3",
            "Customer User",
            date(2025, 6, 3),
            date(2025, 6, 7),
            RentalStatus::Returned,
            120,
            "Project completed early",
        ),
        rental(
            "r4",
            "eq6",
            "Dump Truck",
            "6",
            "Bob Smith",
            date(2025, 6, 5),
            date(2025, 6, 12),
            RentalStatus::Reserved,
            280,
            "Construction project",
        ),
    ]
});

fn maintenance(
    id: &str,
    equipment_id: &str,
    equipment_name: &str,
    on: NaiveDate,
    kind: MaintenanceKind,
    technician: &str,
    status: MaintenanceStatus,
    cost: i64,
    notes: &str,
) -> MaintenanceRecord {
    MaintenanceRecord {
        id: id.into(),
        equipment_id: equipment_id.into(),
        equipment_name: equipment_name.into(),
        date: on,
        kind,
        technician: technician.into(),
        status,
        cost: Decimal::from(cost),
        notes: Some(notes.into()),
        created_date: Utc
            .with_ymd_and_hms(2025, 5, 15, 9, 0, 0)
            .single()
            .expect("valid seed timestamp"),
    }
}

pub static MAINTENANCE: Lazy<Vec<MaintenanceRecord>> = Lazy::new(|| {
    vec![
        maintenance(
            "m1",
            "eq1",
            "Excavator",
            date(2025, 5, 20),
            MaintenanceKind::Routine,
            "John Doe",
            MaintenanceStatus::Completed,
            150,
            "No issues found",
        ),
        maintenance(
            "m2",
            "eq3",
            "Bulldozer",
            date(2025, 5, 28),
            MaintenanceKind::Repair,
            "Mike Tech",
            MaintenanceStatus::InProgress,
            2500,
            "Replaced hydraulic pump",
        ),
        maintenance(
            "m3",
            "eq4",
            "Forklift",
            date(2025, 5, 25),
            MaintenanceKind::Inspection,
            "Sarah Smith",
            MaintenanceStatus::Scheduled,
            400,
            "Battery replacement due",
        ),
    ]
});

fn user(id: &str, email: &str, password: &str, role: Role, name: &str) -> User {
    User {
        id: id.into(),
        email: email.into(),
        password: password.into(),
        role,
        name: Some(name.into()),
    }
}

pub static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        user("1", "admin@rentora.dev", "admin123", Role::Admin, "Admin User"),
        user("2", "staff@rentora.dev", "staff123", Role::Staff, "Staff User"),
        user("3", "customer@rentora.dev", "cust123", Role::Customer, "Customer User"),
        user("4", "jane@rentora.dev", "jane123", Role::Customer, "Jane Doe"),
        user("6", "bob@rentora.dev", "bobpass", Role::Customer, "Bob Smith"),
    ]
});
