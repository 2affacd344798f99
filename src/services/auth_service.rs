//! Authentication service - token issuance and the authentication gate.
//!
//! Constructed explicitly and handed to request handlers through
//! `AppState`; there is no process-wide strategy registry.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult, MessageCode};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Registration input, password still in plaintext
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, registration: Registration) -> AppResult<User>;

    /// Check credentials and issue a token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Sign a token for a known user
    fn issue_token(&self, user: &User) -> AppResult<TokenResponse>;

    /// Verify JWT signature and expiry, returning the payload
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Resolve a bearer token to the stored user.
    ///
    /// Every failure, including store errors, is reported as
    /// `AppError::Unauthorized`.
    async fn authenticate(&self, token: &str) -> AppResult<User>;
}

/// Hash checked against when the email is unknown, so that login
/// takes the same time whether or not the account exists.
fn timing_dummy() -> Option<&'static Password> {
    static DUMMY: OnceLock<Option<Password>> = OnceLock::new();
    DUMMY
        .get_or_init(|| Password::new("timing-equalisation-dummy").ok())
        .as_ref()
}

/// Concrete AuthService over the credential store
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, registration: Registration) -> AppResult<User> {
        if self.users.find_by_email(&registration.email).await?.is_some() {
            return Err(AppError::conflict(MessageCode::UserAlreadyExists));
        }

        let password_hash = Password::new(&registration.password)?.into_string();
        let user = self
            .users
            .create(NewUser {
                email: registration.email,
                password_hash,
                first_name: registration.first_name,
                last_name: registration.last_name,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user = self.users.find_by_email(&email).await?;

        let password_valid = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()).verify(&password),
            None => {
                if let Some(dummy) = timing_dummy() {
                    dummy.verify(&password);
                }
                false
            }
        };

        match user {
            Some(user) if password_valid => self.issue_token(&user),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn issue_token(&self, user: &User) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.jwt_expiration_hours * SECONDS_PER_HOUR,
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    async fn authenticate(&self, token: &str) -> AppResult<User> {
        let claims = self.verify_token(token).map_err(|e| {
            tracing::debug!("Rejected bearer token: {}", e);
            AppError::Unauthorized
        })?;

        match self.users.find_by_id(claims.sub).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                tracing::debug!(user_id = %claims.sub, "Token subject no longer exists");
                Err(AppError::Unauthorized)
            }
            Err(e) => {
                tracing::warn!(user_id = %claims.sub, "User lookup failed during authentication: {}", e);
                Err(AppError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn stored_user(password: &str) -> User {
        User::new(
            Uuid::new_v4(),
            NewUser {
                email: "jane@example.com".to_string(),
                password_hash: Password::new(password).unwrap().into_string(),
                first_name: Some("Jane".to_string()),
                last_name: None,
            },
        )
    }

    fn authenticator(repo: MockUserRepository) -> Authenticator {
        Authenticator::new(Arc::new(repo), Config::with_jwt_secret(SECRET))
    }

    #[tokio::test]
    async fn test_issue_and_verify_token() {
        let user = stored_user("SecurePass123!");
        let auth = authenticator(MockUserRepository::new());

        let token = auth.issue_token(&user).unwrap();
        assert_eq!(token.token_type, "Bearer");

        let claims = auth.verify_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_rejected() {
        let user = stored_user("SecurePass123!");
        let other = Authenticator::new(
            Arc::new(MockUserRepository::new()),
            Config::with_jwt_secret("another-secret-key-that-is-32-chars-long"),
        );
        let token = other.issue_token(&user).unwrap();

        let auth = authenticator(MockUserRepository::new());
        assert!(matches!(
            auth.verify_token(&token.access_token),
            Err(AppError::Jwt(_))
        ));
        assert!(matches!(
            auth.authenticate(&token.access_token).await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_authenticate_resolves_user() {
        let user = stored_user("SecurePass123!");
        let id = user.id;
        let returned = user.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let auth = authenticator(repo);
        let token = auth.issue_token(&user).unwrap();

        let resolved = auth.authenticate(&token.access_token).await.unwrap();
        assert_eq!(resolved.id, id);
    }

    #[tokio::test]
    async fn test_authenticate_lookup_error_is_unauthorized() {
        let user = stored_user("SecurePass123!");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Err(AppError::internal("store unreachable")));

        let auth = authenticator(repo);
        let token = auth.issue_token(&user).unwrap();

        assert!(matches!(
            auth.authenticate(&token.access_token).await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_authenticate_missing_user_is_unauthorized() {
        let user = stored_user("SecurePass123!");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let auth = authenticator(repo);
        let token = auth.issue_token(&user).unwrap();

        assert!(matches!(
            auth.authenticate(&token.access_token).await,
            Err(AppError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_register_rejects_existing_email() {
        let existing = stored_user("SecurePass123!");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create().never();

        let auth = authenticator(repo);
        let result = auth
            .register(Registration {
                email: "jane@example.com".to_string(),
                password: "SecurePass123!".to_string(),
                first_name: None,
                last_name: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Conflict(MessageCode::UserAlreadyExists))
        ));
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|new_user| {
                new_user.password_hash != "SecurePass123!"
                    && Password::from_hash(new_user.password_hash.as_str()).verify("SecurePass123!")
            })
            .times(1)
            .returning(|new_user| Ok(User::new(Uuid::new_v4(), new_user)));

        let auth = authenticator(repo);
        let user = auth
            .register(Registration {
                email: "new@example.com".to_string(),
                password: "SecurePass123!".to_string(),
                first_name: Some("New".to_string()),
                last_name: None,
            })
            .await
            .unwrap();

        assert_eq!(user.email, "new@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let user = stored_user("SecurePass123!");

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let auth = authenticator(repo);
        let result = auth
            .login("jane@example.com".to_string(), "WrongPass123!".to_string())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let auth = authenticator(repo);
        let result = auth
            .login("ghost@example.com".to_string(), "SecurePass123!".to_string())
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = stored_user("SecurePass123!");
        let id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let auth = authenticator(repo);
        let token = auth
            .login("jane@example.com".to_string(), "SecurePass123!".to_string())
            .await
            .unwrap();

        assert_eq!(auth.verify_token(&token.access_token).unwrap().sub, id);
    }
}
