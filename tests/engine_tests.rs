//! End-to-end tests for the rental engine over an in-memory store

use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use rentora_engine::{
    config::{AppConfig, RulesConfig},
    error::AppError,
    models::{
        enums::{
            EquipmentCondition, EquipmentStatus, MaintenanceKind, MaintenanceStatus,
            NotificationKind, RentalStatus,
        },
        CreateEquipment, CreateMaintenance, CreateRental, UpdateEquipment, UpdateMaintenance,
        UpdateRental,
    },
    repository::Repository,
    services::{NotificationSink, Services},
    storage::{KeyValueStore, MemoryStore},
    AppState,
};

/// Sink that records every emitted event for assertions.
#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<(NotificationKind, String, String)>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<(NotificationKind, String, String)> {
        self.events.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((kind, title.to_string(), message.to_string()));
    }
}

/// Engine over a store with blank collections (seed users kept so customer
/// references resolve), plus the recording sink.
fn engine() -> (Services, Arc<RecordingSink>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    for key in ["equipment", "rentals", "maintenance", "notifications"] {
        store.set(key, "[]").unwrap();
    }
    let repository = Repository::new(store.clone(), "");
    let sink = Arc::new(RecordingSink::default());
    let services = Services::with_sink(repository, RulesConfig::default(), sink.clone());
    (services, sink, store)
}

fn drill() -> CreateEquipment {
    CreateEquipment {
        name: "Drill".into(),
        category: "Tools".into(),
        condition: EquipmentCondition::Good,
        description: None,
        daily_rate: Decimal::from(20),
        status: None,
    }
}

#[test]
fn test_scenario_a_created_equipment_defaults_to_available() {
    let (services, _, _) = engine();

    let equipment = services.equipment.add(drill()).unwrap();
    assert_eq!(equipment.status, EquipmentStatus::Available);
    assert_eq!(equipment.daily_rate, Decimal::from(20));
    assert_eq!(equipment.name, "Drill");
    assert!(equipment.id.starts_with("eq_"));

    let available = services.equipment.find_available().unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, equipment.id);
}

#[test]
fn test_scenario_b_four_day_rental_costs_four_days() {
    let (services, _, _) = engine();
    let equipment = services.equipment.add(drill()).unwrap();

    // Dates are relative so the not-in-the-past rule holds whenever the
    // test runs; the span mirrors June 1 to June 5.
    let start = Utc::now().date_naive() + Duration::days(1);
    let rental = services
        .rentals
        .create(CreateRental {
            equipment_id: equipment.id.clone(),
            customer_id: "3".into(),
            start_date: start,
            end_date: start + Duration::days(4),
            notes: None,
            status: None,
        })
        .unwrap();

    assert_eq!(rental.total_cost, Decimal::from(80));
    assert_eq!(rental.daily_rate, Decimal::from(20));
    assert_eq!(rental.equipment_name, "Drill");
    assert_eq!(rental.customer_name, "Customer User");
}

#[test]
fn test_scenario_c_return_notifies_with_equipment_name() {
    let (services, sink, _) = engine();
    let equipment = services.equipment.add(drill()).unwrap();

    let start = Utc::now().date_naive();
    let rental = services
        .rentals
        .create(CreateRental {
            equipment_id: equipment.id,
            customer_id: "3".into(),
            start_date: start,
            end_date: start + Duration::days(2),
            notes: None,
            status: Some(RentalStatus::Rented),
        })
        .unwrap();

    services
        .rentals
        .update(
            &rental.id,
            UpdateRental {
                status: Some(RentalStatus::Returned),
                ..Default::default()
            },
        )
        .unwrap();

    let returned: Vec<_> = sink
        .events()
        .into_iter()
        .filter(|(kind, _, _)| *kind == NotificationKind::RentalReturned)
        .collect();
    assert_eq!(returned.len(), 1);
    assert!(returned[0].2.contains("Drill"));
}

#[test]
fn test_scenario_d_upcoming_window_filters_and_sorts() {
    let (services, _, _) = engine();
    let equipment = services.equipment.add(drill()).unwrap();
    let today = Utc::now().date_naive();

    let soon = services
        .maintenance
        .add(CreateMaintenance {
            equipment_id: equipment.id.clone(),
            date: today + Duration::days(3),
            kind: MaintenanceKind::Inspection,
            technician: "Sarah Smith".into(),
            cost: Decimal::from(100),
            notes: None,
            status: None,
        })
        .unwrap();
    services
        .maintenance
        .add(CreateMaintenance {
            equipment_id: equipment.id,
            date: today + Duration::days(10),
            kind: MaintenanceKind::Routine,
            technician: "John Doe".into(),
            cost: Decimal::from(50),
            notes: None,
            status: None,
        })
        .unwrap();

    let upcoming = services.maintenance.upcoming(7).unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, soon.id);
    assert_eq!(upcoming[0].status, MaintenanceStatus::Scheduled);
}

#[test]
fn test_rejected_rental_persists_nothing() {
    let (services, sink, _) = engine();
    let equipment = services.equipment.add(drill()).unwrap();

    let start = Utc::now().date_naive() + Duration::days(1);
    let err = services
        .rentals
        .create(CreateRental {
            equipment_id: equipment.id,
            customer_id: "3".into(),
            start_date: start,
            end_date: start,
            notes: None,
            status: None,
        })
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(services.rentals.list().unwrap().is_empty());
    assert!(sink
        .events()
        .iter()
        .all(|(kind, _, _)| *kind != NotificationKind::RentalCreated));
}

#[test]
fn test_equipment_removal_orphans_history_by_default() {
    let (services, _, _) = engine();
    let equipment = services.equipment.add(drill()).unwrap();

    let start = Utc::now().date_naive();
    services
        .rentals
        .create(CreateRental {
            equipment_id: equipment.id.clone(),
            customer_id: "3".into(),
            start_date: start,
            end_date: start + Duration::days(2),
            notes: None,
            status: None,
        })
        .unwrap();

    services.equipment.remove(&equipment.id).unwrap();
    assert!(services.equipment.by_id(&equipment.id).unwrap().is_none());

    // The historical rental keeps its dangling reference and queries on it
    // still answer.
    let history = services.rentals.by_equipment(&equipment.id).unwrap();
    assert_eq!(history.len(), 1);

    // Removing again reports the missing id.
    assert!(matches!(
        services.equipment.remove(&equipment.id),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_equipment_removal_cascades_when_configured() {
    let store = Arc::new(MemoryStore::new());
    for key in ["equipment", "rentals", "maintenance", "notifications"] {
        store.set(key, "[]").unwrap();
    }
    let repository = Repository::new(store, "");
    let rules = RulesConfig {
        enforce_transitions: true,
        cascade_delete: true,
    };
    let services = Services::with_sink(repository, rules, Arc::new(RecordingSink::default()));

    let equipment = services.equipment.add(drill()).unwrap();
    let start = Utc::now().date_naive();
    services
        .rentals
        .create(CreateRental {
            equipment_id: equipment.id.clone(),
            customer_id: "3".into(),
            start_date: start,
            end_date: start + Duration::days(2),
            notes: None,
            status: None,
        })
        .unwrap();
    services
        .maintenance
        .add(CreateMaintenance {
            equipment_id: equipment.id.clone(),
            date: start + Duration::days(5),
            kind: MaintenanceKind::Repair,
            technician: "Mike Tech".into(),
            cost: Decimal::from(75),
            notes: None,
            status: None,
        })
        .unwrap();

    services.equipment.remove(&equipment.id).unwrap();
    assert!(services.rentals.by_equipment(&equipment.id).unwrap().is_empty());
    assert!(services.maintenance.by_equipment(&equipment.id).unwrap().is_empty());
}

#[test]
fn test_status_flow_through_registry_keeps_collections_consistent() {
    let (services, _, _) = engine();
    let equipment = services.equipment.add(drill()).unwrap();

    let start = Utc::now().date_naive();
    let rental = services
        .rentals
        .create(CreateRental {
            equipment_id: equipment.id.clone(),
            customer_id: "3".into(),
            start_date: start,
            end_date: start + Duration::days(3),
            notes: None,
            status: Some(RentalStatus::Rented),
        })
        .unwrap();

    // Creating a rental never flips equipment status by itself.
    assert_eq!(
        services.equipment.by_id(&equipment.id).unwrap().unwrap().status,
        EquipmentStatus::Available
    );

    // The caller advances the registry explicitly.
    services
        .equipment
        .set_status(&equipment.id, EquipmentStatus::Rented)
        .unwrap();
    assert!(services.equipment.find_available().unwrap().is_empty());

    services
        .rentals
        .update(
            &rental.id,
            UpdateRental {
                status: Some(RentalStatus::Returned),
                ..Default::default()
            },
        )
        .unwrap();
    services
        .equipment
        .set_status(&equipment.id, EquipmentStatus::Available)
        .unwrap();
    assert_eq!(services.equipment.find_available().unwrap().len(), 1);
    assert!(services.rentals.active_rentals().unwrap().is_empty());
}

#[test]
fn test_equipment_empty_patch_is_idempotent() {
    let (services, _, _) = engine();
    let equipment = services.equipment.add(drill()).unwrap();

    let updated = services
        .equipment
        .update(&equipment.id, UpdateEquipment::default())
        .unwrap();
    assert_eq!(
        serde_json::to_value(&equipment).unwrap(),
        serde_json::to_value(&updated).unwrap()
    );
}

#[test]
fn test_store_round_trip_preserves_collections() {
    let (services, _, store) = engine();
    services.equipment.add(drill()).unwrap();
    let before = services.equipment.list().unwrap();

    // save(key, load(key)) leaves the collection equal to itself.
    let raw = store.get("equipment").unwrap().unwrap();
    store.set("equipment", &raw).unwrap();
    assert_eq!(services.equipment.list().unwrap(), before);
}

#[test]
fn test_maintenance_completion_notifies_once() {
    let (services, sink, _) = engine();
    let equipment = services.equipment.add(drill()).unwrap();

    let record = services
        .maintenance
        .add(CreateMaintenance {
            equipment_id: equipment.id,
            date: Utc::now().date_naive() + Duration::days(1),
            kind: MaintenanceKind::FullService,
            technician: "John Doe".into(),
            cost: Decimal::from(300),
            notes: None,
            status: None,
        })
        .unwrap();

    let complete = UpdateMaintenance {
        status: Some(MaintenanceStatus::Completed),
        ..Default::default()
    };
    services.maintenance.update(&record.id, complete.clone()).unwrap();
    // A second completion patch is a no-op for notifications.
    services.maintenance.update(&record.id, complete).unwrap();

    let completed = sink
        .events()
        .into_iter()
        .filter(|(kind, _, _)| *kind == NotificationKind::MaintenanceCompleted)
        .count();
    assert_eq!(completed, 1);
}

#[test]
fn test_notification_center_retains_newest_first_with_read_flags() {
    // Default wiring: the persisted center is the sink.
    let store = Arc::new(MemoryStore::new());
    for key in ["equipment", "rentals", "maintenance", "notifications"] {
        store.set(key, "[]").unwrap();
    }
    let state = AppState::with_store(AppConfig::default(), store);
    let services = &state.services;

    services.equipment.add(drill()).unwrap();
    let mut second = drill();
    second.name = "Sander".into();
    services.equipment.add(second).unwrap();

    let notifications = services.notifications.list().unwrap();
    assert_eq!(notifications.len(), 2);
    assert!(notifications[0].message.contains("Sander"));
    assert!(notifications[1].message.contains("Drill"));
    assert_eq!(services.notifications.unread_count().unwrap(), 2);

    services.notifications.mark_read(&notifications[0].id).unwrap();
    assert_eq!(services.notifications.unread_count().unwrap(), 1);

    services.notifications.clear().unwrap();
    assert!(services.notifications.list().unwrap().is_empty());
}

#[test]
fn test_login_round_trip_strips_password() {
    let (services, _, store) = engine();

    assert!(services.auth.current_user().unwrap().is_none());
    let err = services.auth.login("admin@rentora.dev", "wrong").unwrap_err();
    assert!(matches!(err, AppError::Authentication(_)));

    let user = services.auth.login("admin@rentora.dev", "admin123").unwrap();
    assert_eq!(user.email, "admin@rentora.dev");

    let raw = store.get("current_user").unwrap().unwrap();
    assert!(!raw.contains("admin123"));
    assert_eq!(
        services.auth.current_user().unwrap().unwrap().id,
        user.id
    );

    services.auth.logout().unwrap();
    assert!(services.auth.current_user().unwrap().is_none());
}

#[test]
fn test_legacy_collection_shapes_load() {
    // Records written by the original dashboard: camelCase fields, the
    // Ongoing/Completed vocabulary, and a maintenance "type" field.
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            "rentals",
            r#"[{
                "id": "r2",
                "equipmentId": "eq4",
                "customerId": "4",
                "customerName": "Jane Doe",
                "equipmentName": "Forklift",
                "startDate": "2025-06-02",
                "endDate": "2025-06-10",
                "status": "Ongoing",
                "dailyRate": "150",
                "totalCost": "1200",
                "notes": "Extended rental period",
                "createdDate": "2025-05-30T12:00:00Z"
            }]"#,
        )
        .unwrap();
    let repository = Repository::new(store, "");
    let services = Services::with_sink(
        repository,
        RulesConfig::default(),
        Arc::new(RecordingSink::default()),
    );

    let rentals = services.rentals.list().unwrap();
    assert_eq!(rentals.len(), 1);
    assert_eq!(rentals[0].status, RentalStatus::Rented);
    assert_eq!(rentals[0].total_cost, Decimal::from(1200));
}
