//! Notification sink and the persisted notification center

use chrono::Utc;

use crate::{
    error::AppResult,
    identity::{IdGenerator, NOTIFICATION_PREFIX},
    models::{enums::NotificationKind, Notification},
    repository::Repository,
};

/// Retention cap on the persisted notification list.
const MAX_RETAINED: usize = 50;

/// Receives lifecycle events for user-facing display.
///
/// Fire-and-forget: implementations must not fail the emitting operation,
/// and the core never branches on delivery.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str);
}

/// Sink that drops every event. Useful when embedding the engine without a
/// notification center.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _kind: NotificationKind, _title: &str, _message: &str) {}
}

/// Persisted notification center: retains the newest events (cap 50,
/// newest first) with per-notification read flags.
#[derive(Clone)]
pub struct NotificationService {
    repository: Repository,
    ids: IdGenerator,
}

impl NotificationService {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository,
            ids: IdGenerator::new(),
        }
    }

    /// All retained notifications, newest first
    pub fn list(&self) -> AppResult<Vec<Notification>> {
        self.repository.notifications.list()
    }

    /// Number of retained notifications not yet marked read
    pub fn unread_count(&self) -> AppResult<usize> {
        Ok(self.list()?.iter().filter(|n| !n.read).count())
    }

    /// Mark one notification as read; unknown ids are ignored
    pub fn mark_read(&self, id: &str) -> AppResult<()> {
        let mut notifications = self.list()?;
        if let Some(notification) = notifications.iter_mut().find(|n| n.id == id) {
            notification.read = true;
            self.repository.notifications.save_all(&notifications)?;
        }
        Ok(())
    }

    /// Remove one notification; unknown ids are ignored
    pub fn remove(&self, id: &str) -> AppResult<()> {
        let mut notifications = self.list()?;
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        if notifications.len() != before {
            self.repository.notifications.save_all(&notifications)?;
        }
        Ok(())
    }

    /// Drop all retained notifications
    pub fn clear(&self) -> AppResult<()> {
        self.repository.notifications.save_all(&[])
    }

    fn record(&self, kind: NotificationKind, title: &str, message: &str) -> AppResult<()> {
        let mut notifications = self.list()?;
        notifications.insert(
            0,
            Notification {
                id: self.ids.generate(NOTIFICATION_PREFIX),
                kind,
                title: title.to_string(),
                message: message.to_string(),
                timestamp: Utc::now(),
                read: false,
            },
        );
        notifications.truncate(MAX_RETAINED);
        self.repository.notifications.save_all(&notifications)
    }
}

impl NotificationSink for NotificationService {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        // Delivery failures must not fail the emitting operation.
        if let Err(e) = self.record(kind, title, message) {
            tracing::error!(?kind, error = %e, "failed to persist notification");
        }
    }
}
