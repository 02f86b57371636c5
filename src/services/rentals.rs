//! Rental ledger service, the core state machine
//!
//! Stored states move Reserved -> Rented -> Returned, with Cancelled as an
//! alternate terminal from either active state. Overdue is never stored:
//! it is computed against the current instant whenever a rental is read,
//! so the computed and persisted views cannot drift.
//!
//! Creating a rental does not flip the equipment's status; equipment state
//! advances only through an explicit `EquipmentService::set_status` call,
//! driven by the caller.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    config::RulesConfig,
    dates,
    error::{AppError, AppResult},
    identity::{IdGenerator, RENTAL_PREFIX},
    models::{
        enums::{EffectiveRentalStatus, NotificationKind, RentalStatus},
        CreateRental, Rental, UpdateRental,
    },
    repository::Repository,
    services::notifications::NotificationSink,
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
    rules: RulesConfig,
    sink: Arc<dyn NotificationSink>,
    ids: IdGenerator,
}

impl RentalsService {
    pub fn new(repository: Repository, rules: RulesConfig, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            repository,
            rules,
            sink,
            ids: IdGenerator::new(),
        }
    }

    /// List the whole ledger
    pub fn list(&self) -> AppResult<Vec<Rental>> {
        self.repository.rentals.list()
    }

    /// Rental by id, if present
    pub fn by_id(&self, id: &str) -> AppResult<Option<Rental>> {
        self.repository.rentals.find_by_id(id)
    }

    /// Create a rental.
    ///
    /// The equipment and customer must resolve; dates must satisfy
    /// start < end with start no earlier than today. Cost is computed from
    /// the equipment's current rate and snapshotted together with the
    /// display names, so later edits to the source records leave the
    /// ledger entry stable.
    pub fn create(&self, request: CreateRental) -> AppResult<Rental> {
        let equipment = self.repository.equipment.get_by_id(&request.equipment_id)?;
        let customer = self.repository.users.get_by_id(&request.customer_id)?;

        if request.end_date <= request.start_date {
            return Err(AppError::validation(
                "endDate",
                "must be after the start date",
            ));
        }
        if request.start_date < Utc::now().date_naive() {
            return Err(AppError::validation(
                "startDate",
                "must not be in the past",
            ));
        }

        let status = request.status.unwrap_or(RentalStatus::Reserved);
        if !status.is_active() {
            return Err(AppError::validation(
                "status",
                "a new rental must start as Reserved or Rented",
            ));
        }

        let days = dates::days_between(request.start_date, request.end_date);
        let total_cost = equipment.daily_rate * Decimal::from(days);

        let rental = Rental {
            id: self.ids.generate(RENTAL_PREFIX),
            equipment_id: equipment.id.clone(),
            customer_id: customer.id.clone(),
            equipment_name: equipment.name.clone(),
            customer_name: customer.display_name().to_string(),
            start_date: request.start_date,
            end_date: request.end_date,
            status,
            daily_rate: equipment.daily_rate,
            total_cost,
            notes: request.notes,
            created_date: Utc::now(),
        };
        let rental = self.repository.rentals.insert(rental)?;

        tracing::info!(
            id = %rental.id,
            equipment = %rental.equipment_name,
            days,
            cost = %rental.total_cost,
            "rental created"
        );
        self.sink.notify(
            NotificationKind::RentalCreated,
            "New Rental Created",
            &format!("Rental for {} has been created", rental.equipment_name),
        );
        Ok(rental)
    }

    /// Merge a patch into a rental, commonly a status transition.
    ///
    /// With `rules.enforce_transitions` (the default) a status change must
    /// follow the lifecycle table; disabling the rule restores the
    /// historically permissive merge where any edge is accepted. When the
    /// date range changes, the total cost is recomputed from the
    /// snapshotted daily rate.
    pub fn update(&self, id: &str, patch: UpdateRental) -> AppResult<Rental> {
        let existing = self.repository.rentals.get_by_id(id)?;

        let status_change = patch
            .status
            .filter(|&new_status| new_status != existing.status);
        if let Some(new_status) = status_change {
            if self.rules.enforce_transitions
                && !existing.status.can_transition_to(new_status)
            {
                return Err(AppError::InvalidTransition {
                    from: existing.status,
                    to: new_status,
                });
            }
        }

        let dates_changed = patch.start_date.is_some() || patch.end_date.is_some();
        let rental = self.repository.rentals.update(id, |r| {
            patch.apply_to(r);
            if dates_changed {
                let days = dates::days_between(r.start_date, r.end_date);
                r.total_cost = r.daily_rate * Decimal::from(days);
            }
        })?;

        match status_change {
            Some(RentalStatus::Returned) => {
                tracing::info!(id = %rental.id, "rental returned");
                self.sink.notify(
                    NotificationKind::RentalReturned,
                    "Rental Returned",
                    &format!("{} has been returned", rental.equipment_name),
                );
            }
            Some(new_status) => {
                tracing::info!(id = %rental.id, status = %new_status, "rental status changed");
                self.sink.notify(
                    NotificationKind::RentalUpdated,
                    "Rental Updated",
                    &format!("Rental for {} is now {}", rental.equipment_name, new_status),
                );
            }
            None => {}
        }
        Ok(rental)
    }

    /// Delete a rental by id. Equipment status is left untouched; releasing
    /// the equipment remains the caller's decision.
    pub fn remove(&self, id: &str) -> AppResult<()> {
        self.repository.rentals.delete(id)?;
        tracing::info!(id, "rental removed");
        Ok(())
    }

    /// Status as seen by queries: the stored state, or Overdue for a
    /// Rented rental whose end date has passed.
    pub fn effective_status(&self, rental: &Rental) -> EffectiveRentalStatus {
        if rental.status == RentalStatus::Rented && dates::is_past(rental.end_date) {
            EffectiveRentalStatus::Overdue
        } else {
            rental.status.into()
        }
    }

    /// Rentals that are Rented with an end date strictly in the past.
    /// Recomputed per call; an expired Reserved rental is not overdue.
    pub fn overdue_rentals(&self) -> AppResult<Vec<Rental>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.status == RentalStatus::Rented && dates::is_past(r.end_date))
            .collect())
    }

    /// Rentals still occupying equipment (Reserved or Rented)
    pub fn active_rentals(&self) -> AppResult<Vec<Rental>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.status.is_active())
            .collect())
    }

    /// Rentals referencing the given equipment; empty for unknown ids
    pub fn by_equipment(&self, equipment_id: &str) -> AppResult<Vec<Rental>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.equipment_id == equipment_id)
            .collect())
    }

    /// Rentals belonging to the given customer; empty for unknown ids
    pub fn by_customer(&self, customer_id: &str) -> AppResult<Vec<Rental>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.customer_id == customer_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::MockNotificationSink;
    use crate::storage::{KeyValueStore, MemoryStore};
    use chrono::Duration;

    fn service_with(sink: MockNotificationSink, enforce: bool) -> RentalsService {
        let store = Arc::new(MemoryStore::new());
        let repository = Repository::new(store, "");
        let rules = RulesConfig {
            enforce_transitions: enforce,
            cascade_delete: false,
        };
        RentalsService::new(repository, rules, Arc::new(sink))
    }

    fn request(days_from_now: i64, duration: i64) -> CreateRental {
        let start = Utc::now().date_naive() + Duration::days(days_from_now);
        CreateRental {
            equipment_id: "eq1".into(),
            customer_id: "3".into(),
            start_date: start,
            end_date: start + Duration::days(duration),
            notes: None,
            status: None,
        }
    }

    fn created_sink() -> MockNotificationSink {
        let mut sink = MockNotificationSink::new();
        sink.expect_notify()
            .withf(|kind, _, _| *kind == NotificationKind::RentalCreated)
            .return_const(());
        sink
    }

    #[test]
    fn test_create_computes_cost_from_equipment_rate() {
        let service = service_with(created_sink(), true);
        // Seed equipment eq1 (Excavator) rents at 250/day.
        let rental = service.create(request(1, 4)).unwrap();
        assert_eq!(rental.total_cost, Decimal::from(1000));
        assert_eq!(rental.daily_rate, Decimal::from(250));
        assert_eq!(rental.status, RentalStatus::Reserved);
        assert_eq!(rental.equipment_name, "Excavator");
    }

    #[test]
    fn test_create_rejects_inverted_and_empty_ranges() {
        let service = service_with(MockNotificationSink::new(), true);

        let err = service.create(request(1, 0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
        let err = service.create(request(1, -3)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
        // Nothing was persisted.
        assert_eq!(service.list().unwrap().len(), crate::storage::seed::RENTALS.len());
    }

    #[test]
    fn test_create_rejects_past_start() {
        let service = service_with(MockNotificationSink::new(), true);
        let err = service.create(request(-2, 4)).unwrap_err();
        assert_eq!(err.fields(), vec!["startDate"]);
    }

    #[test]
    fn test_create_rejects_unknown_equipment() {
        let service = service_with(MockNotificationSink::new(), true);
        let mut req = request(1, 4);
        req.equipment_id = "eq999".into();
        assert!(matches!(service.create(req), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_return_emits_notification_with_equipment_name() {
        let mut sink = created_sink();
        sink.expect_notify()
            .withf(|kind, title, message| {
                *kind == NotificationKind::RentalReturned
                    && title == "Rental Returned"
                    && message.contains("Excavator")
            })
            .times(1)
            .return_const(());

        let service = service_with(sink, true);
        let mut req = request(1, 4);
        req.status = Some(RentalStatus::Rented);
        let rental = service.create(req).unwrap();

        let updated = service
            .update(
                &rental.id,
                UpdateRental {
                    status: Some(RentalStatus::Returned),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, RentalStatus::Returned);
    }

    #[test]
    fn test_illegal_transition_rejected_when_enforced() {
        let service = service_with(created_sink(), true);
        let rental = service.create(request(1, 4)).unwrap();

        // Reserved -> Returned skips the Rented state.
        let err = service
            .update(
                &rental.id,
                UpdateRental {
                    status: Some(RentalStatus::Returned),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidTransition {
                from: RentalStatus::Reserved,
                to: RentalStatus::Returned,
            }
        ));
    }

    #[test]
    fn test_illegal_transition_accepted_when_permissive() {
        let mut sink = created_sink();
        sink.expect_notify()
            .withf(|kind, _, _| *kind == NotificationKind::RentalReturned)
            .return_const(());

        let service = service_with(sink, false);
        let rental = service.create(request(1, 4)).unwrap();

        let updated = service
            .update(
                &rental.id,
                UpdateRental {
                    status: Some(RentalStatus::Returned),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, RentalStatus::Returned);
    }

    #[test]
    fn test_empty_patch_is_idempotent() {
        let service = service_with(created_sink(), true);
        let rental = service.create(request(1, 4)).unwrap();

        let updated = service.update(&rental.id, UpdateRental::default()).unwrap();
        assert_eq!(
            serde_json::to_value(&rental).unwrap(),
            serde_json::to_value(&updated).unwrap()
        );
    }

    #[test]
    fn test_date_patch_recomputes_cost() {
        let service = service_with(created_sink(), true);
        let rental = service.create(request(1, 4)).unwrap();

        let updated = service
            .update(
                &rental.id,
                UpdateRental {
                    end_date: Some(rental.start_date + Duration::days(6)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.total_cost, Decimal::from(1500));
    }

    #[test]
    fn test_overdue_excludes_expired_reservations() {
        let store = Arc::new(MemoryStore::new());
        let repository = Repository::new(store.clone(), "");
        let service = RentalsService::new(
            repository,
            RulesConfig {
                enforce_transitions: true,
                cascade_delete: false,
            },
            Arc::new(MockNotificationSink::new()),
        );

        let past = Utc::now().date_naive() - Duration::days(3);
        let make = |id: &str, status: RentalStatus| Rental {
            id: id.into(),
            equipment_id: "eq1".into(),
            customer_id: "3".into(),
            equipment_name: "Excavator".into(),
            customer_name: "Customer User".into(),
            start_date: past - Duration::days(4),
            end_date: past,
            status,
            daily_rate: Decimal::from(250),
            total_cost: Decimal::from(1000),
            notes: None,
            created_date: Utc::now(),
        };
        let rentals = vec![
            make("r_expired_rented", RentalStatus::Rented),
            make("r_expired_reserved", RentalStatus::Reserved),
            make("r_expired_returned", RentalStatus::Returned),
        ];
        store
            .set("rentals", &serde_json::to_string(&rentals).unwrap())
            .unwrap();

        let overdue = service.overdue_rentals().unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, "r_expired_rented");

        let rented = &rentals[0];
        assert_eq!(
            service.effective_status(rented),
            EffectiveRentalStatus::Overdue
        );
        assert_eq!(
            service.effective_status(&rentals[1]),
            EffectiveRentalStatus::Reserved
        );
    }
}
