//! Session service: the logged-in user slot

use tracing::info;

use crate::{error::AppResult, models::Usuario, repository::Repository};

#[derive(Clone)]
pub struct SessionService {
    repository: Repository,
}

impl SessionService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn current_user(&self) -> AppResult<Option<Usuario>> {
        self.repository.current_user()
    }

    pub fn set_current_user(&self, user: &Usuario) -> AppResult<()> {
        self.repository.set_current_user(user)?;
        info!("Session opened for {}", user.usuario);
        Ok(())
    }

    /// Forget the current user. A no-op when nobody is logged in.
    pub fn logout(&self) -> AppResult<()> {
        if let Some(user) = self.repository.current_user()? {
            info!("Session closed for {}", user.usuario);
        }
        self.repository.clear_current_user()
    }
}
