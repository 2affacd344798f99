//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User domain entity, as held by the credential store
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a user from registration data
    pub fn new(id: Uuid, new_user: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: new_user.email,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place
    pub fn apply(&mut self, changes: ProfileChanges) {
        if let Some(first_name) = changes.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = Some(last_name);
        }
        if let Some(password_hash) = changes.password_hash {
            self.password_hash = password_hash;
        }
        self.updated_at = Utc::now();
    }
}

/// Data required to persist a freshly registered user.
/// The password is already hashed at this point.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Partial update set for a profile.
///
/// `None` means "leave the stored value alone". `password_hash` only ever
/// holds a hash, never plaintext.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.password_hash.is_none()
    }

    pub fn changes_password(&self) -> bool {
        self.password_hash.is_some()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last profile change
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            Uuid::new_v4(),
            NewUser {
                email: "jane@example.com".to_string(),
                password_hash: "$argon2id$stub".to_string(),
                first_name: Some("Jane".to_string()),
                last_name: None,
            },
        )
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut user = sample_user();
        user.apply(ProfileChanges {
            last_name: Some("Doe".to_string()),
            ..Default::default()
        });

        assert_eq!(user.first_name.as_deref(), Some("Jane"));
        assert_eq!(user.last_name.as_deref(), Some("Doe"));
        assert_eq!(user.password_hash, "$argon2id$stub");
    }

    #[test]
    fn test_profile_changes_empty() {
        assert!(ProfileChanges::default().is_empty());
        let changes = ProfileChanges {
            password_hash: Some("hash".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
        assert!(changes.changes_password());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());

        let response = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(response.get("passwordHash").is_none());
        assert_eq!(response["firstName"], "Jane");
    }
}
