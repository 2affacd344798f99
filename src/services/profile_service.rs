//! Profile service - partial updates of the authenticated user's profile.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Password, ProfileChanges, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Requested profile changes. Empty strings count as "not provided".
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// New plaintext password
    pub password: Option<String>,
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Apply `update` to the user with `user_id` and return the stored result
    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> AppResult<User>;
}

pub struct ProfileManager {
    users: Arc<dyn UserRepository>,
}

impl ProfileManager {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Turn a request into the store's update set. Only non-empty names are
    /// kept, and a supplied password is replaced by its salted hash.
    fn build_changes(update: ProfileUpdate) -> AppResult<ProfileChanges> {
        let password_hash = match update.password.filter(|p| !p.is_empty()) {
            Some(plain) => Some(Password::new(&plain)?.into_string()),
            None => None,
        };

        Ok(ProfileChanges {
            first_name: update.first_name.filter(|s| !s.is_empty()),
            last_name: update.last_name.filter(|s| !s.is_empty()),
            password_hash,
        })
    }
}

#[async_trait]
impl ProfileService for ProfileManager {
    async fn update_profile(&self, user_id: Uuid, update: ProfileUpdate) -> AppResult<User> {
        let changes = Self::build_changes(update)?;
        let rehashed = changes.changes_password();

        let user = self
            .users
            .update_profile(user_id, changes)
            .await?
            .ok_or_not_found()?;

        tracing::info!(user_id = %user_id, password_changed = rehashed, "Profile updated");
        Ok(user)
    }
}
