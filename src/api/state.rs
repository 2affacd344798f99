//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::UserRepository;
use crate::services::{AuthService, Authenticator, ProfileManager, ProfileService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Authentication gate and token issuance
    pub auth_service: Arc<dyn AuthService>,
    /// Profile use cases
    pub profile_service: Arc<dyn ProfileService>,
    /// Credential store, used directly by the health check
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Wire the concrete services around a credential store.
    pub fn from_store(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(users.clone(), config)),
            profile_service: Arc::new(ProfileManager::new(users.clone())),
            users,
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        profile_service: Arc<dyn ProfileService>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            auth_service,
            profile_service,
            users,
        }
    }
}
