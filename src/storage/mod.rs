//! Key-value persistence contract and backends
//!
//! Each collection is persisted as one JSON document under a well-known
//! key, overwritten whole on every mutation. The engine treats the store as
//! an already-existing collaborator: get/set/remove strings, nothing more.

pub mod file;
pub mod memory;
pub mod seed;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Well-known collection keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKey {
    Equipment,
    Rentals,
    Maintenance,
    Users,
    Notifications,
    CurrentUser,
}

impl CollectionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKey::Equipment => "equipment",
            CollectionKey::Rentals => "rentals",
            CollectionKey::Maintenance => "maintenance",
            CollectionKey::Users => "users",
            CollectionKey::Notifications => "notifications",
            CollectionKey::CurrentUser => "current_user",
        }
    }
}

impl std::fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable get/set/remove for named collections.
///
/// Implementations must make each `set` atomic from the caller's
/// perspective; the engine performs read-mutate-write cycles with no
/// concurrent writer (single-threaded cooperative model).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
