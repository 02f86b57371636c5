//! Notifications collection repository

use super::Collections;
use crate::{error::AppResult, models::Notification, storage::CollectionKey};

/// Notifications start empty; there is no seed set for this collection.
const NO_SEED: &[Notification] = &[];

#[derive(Clone)]
pub struct NotificationsRepository {
    collections: Collections,
}

impl NotificationsRepository {
    pub fn new(collections: Collections) -> Self {
        Self { collections }
    }

    /// List all retained notifications, newest first
    pub fn list(&self) -> AppResult<Vec<Notification>> {
        self.collections.load(CollectionKey::Notifications, NO_SEED)
    }

    /// Overwrite the retained set
    pub fn save_all(&self, notifications: &[Notification]) -> AppResult<()> {
        self.collections.save(CollectionKey::Notifications, notifications)
    }
}
