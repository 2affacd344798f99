//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on the `UserRepository` abstraction,
//! never on a concrete store.

mod auth_service;
mod profile_service;

pub use auth_service::{AuthService, Authenticator, Claims, Registration, TokenResponse};
pub use profile_service::{ProfileManager, ProfileService, ProfileUpdate};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use profile_service::MockProfileService;
