//! Users collection repository and the current-user session key

use super::Collections;
use crate::{
    error::{AppError, AppResult},
    models::{CurrentUser, User},
    storage::{seed, CollectionKey},
};

#[derive(Clone)]
pub struct UsersRepository {
    collections: Collections,
}

impl UsersRepository {
    pub fn new(collections: Collections) -> Self {
        Self { collections }
    }

    /// List all users
    pub fn list(&self) -> AppResult<Vec<User>> {
        self.collections.load(CollectionKey::Users, &seed::USERS)
    }

    /// Find a user by id, if present
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.list()?.into_iter().find(|u| u.id == id))
    }

    /// Get a user by id
    pub fn get_by_id(&self, id: &str) -> AppResult<User> {
        self.find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Find a user with matching credentials, if any
    pub fn find_by_credentials(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|u| u.email == email && u.password == password))
    }

    /// Read the persisted session, if any
    pub fn current_user(&self) -> AppResult<Option<CurrentUser>> {
        self.collections.load_value(CollectionKey::CurrentUser)
    }

    /// Persist the session
    pub fn set_current_user(&self, user: &CurrentUser) -> AppResult<()> {
        self.collections.save_value(CollectionKey::CurrentUser, user)
    }

    /// Drop the session
    pub fn clear_current_user(&self) -> AppResult<()> {
        self.collections.remove(CollectionKey::CurrentUser)
    }
}
