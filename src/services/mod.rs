//! Business logic services

pub mod access;
pub mod auth;
pub mod equipment;
pub mod maintenance;
pub mod notifications;
pub mod rentals;

use std::sync::Arc;

use crate::{config::RulesConfig, repository::Repository};

pub use access::{AccessPolicy, Operation};
pub use notifications::{NotificationService, NotificationSink, NullSink};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub rentals: rentals::RentalsService,
    pub maintenance: maintenance::MaintenanceService,
    pub notifications: Arc<NotificationService>,
    pub auth: auth::AuthService,
    pub access: AccessPolicy,
}

impl Services {
    /// Create all services, wiring the persisted notification center in as
    /// the lifecycle event sink.
    pub fn new(repository: Repository, rules: RulesConfig) -> Self {
        let notifications = Arc::new(NotificationService::new(repository.clone()));
        let sink: Arc<dyn NotificationSink> = notifications.clone();
        Self::with_sink_and_center(repository, rules, sink, notifications)
    }

    /// Create all services with a custom event sink. The persisted center
    /// still exists for direct use, but lifecycle events go to `sink`.
    pub fn with_sink(
        repository: Repository,
        rules: RulesConfig,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let notifications = Arc::new(NotificationService::new(repository.clone()));
        Self::with_sink_and_center(repository, rules, sink, notifications)
    }

    fn with_sink_and_center(
        repository: Repository,
        rules: RulesConfig,
        sink: Arc<dyn NotificationSink>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(
                repository.clone(),
                rules.clone(),
                sink.clone(),
            ),
            rentals: rentals::RentalsService::new(repository.clone(), rules, sink.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone(), sink),
            notifications,
            auth: auth::AuthService::new(repository),
            access: AccessPolicy::new(),
        }
    }
}
