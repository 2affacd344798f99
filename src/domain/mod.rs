//! Domain layer - Core business entities and logic
//!
//! Entities and value objects for the account/profile area, free of
//! transport and persistence concerns.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{NewUser, ProfileChanges, User, UserResponse};
