//! Current-user slot

use tracing::debug;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::Usuario,
    storage::CURRENT_USER_SLOT,
};

impl Repository {
    /// User stored by the last successful login, if any
    pub fn current_user(&self) -> AppResult<Option<Usuario>> {
        let Some(blob) = self.storage().get(CURRENT_USER_SLOT)? else {
            return Ok(None);
        };
        serde_json::from_str(&blob)
            .map(Some)
            .map_err(|e| AppError::corrupt(CURRENT_USER_SLOT, e))
    }

    pub fn set_current_user(&self, user: &Usuario) -> AppResult<()> {
        let blob = serde_json::to_string(user)?;
        self.storage().set(CURRENT_USER_SLOT, &blob)?;
        debug!("Current user set to {}", user.usuario);
        Ok(())
    }

    pub fn clear_current_user(&self) -> AppResult<()> {
        self.storage().remove(CURRENT_USER_SLOT)?;
        Ok(())
    }
}
