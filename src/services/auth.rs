//! Session service
//!
//! Authentication here is a credential lookup against the seeded users
//! collection, not a security boundary: the dashboard is a single-user,
//! client-side application and the persisted session is the
//! password-stripped user record.

use crate::{
    error::{AppError, AppResult},
    models::CurrentUser,
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check credentials and persist the session on success.
    pub fn login(&self, email: &str, password: &str) -> AppResult<CurrentUser> {
        let user = self
            .repository
            .users
            .find_by_credentials(email, password)?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        let current = CurrentUser::from(&user);
        self.repository.users.set_current_user(&current)?;
        tracing::info!(user = %current.email, role = %current.role, "login");
        Ok(current)
    }

    /// Drop the persisted session.
    pub fn logout(&self) -> AppResult<()> {
        self.repository.users.clear_current_user()?;
        tracing::info!("logout");
        Ok(())
    }

    /// The persisted session, if one is active.
    pub fn current_user(&self) -> AppResult<Option<CurrentUser>> {
        self.repository.users.current_user()
    }
}
