//! Account handlers: registration and login.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::normalize_name;
use crate::api::extractors::{validation_messages, Schema, ValidatedJson, ValidationResult};
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::{Registration, TokenResponse};
use crate::types::{Created, ErrorResponse, UserResult};

/// User registration request
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    #[validate(length(max = 50, message = "First name must be at most 50 characters"))]
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[validate(length(max = 50, message = "Last name must be at most 50 characters"))]
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
}

impl Schema for RegisterRequest {
    fn check(self) -> ValidationResult<Self> {
        let sanitized = Self {
            email: self.email.trim().to_lowercase(),
            password: self.password,
            first_name: normalize_name(self.first_name),
            last_name: normalize_name(self.last_name),
        };
        validation_messages(&sanitized)?;
        Ok(sanitized)
    }
}

/// User login request
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

impl Schema for LoginRequest {
    fn check(self) -> ValidationResult<Self> {
        let sanitized = Self {
            email: self.email.trim().to_lowercase(),
            password: self.password,
        };
        validation_messages(&sanitized)?;
        Ok(sanitized)
    }
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResult),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 409, description = "User already exists", body = ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<UserResult>> {
    let user = state
        .auth_service
        .register(Registration {
            email: payload.email,
            password: payload.password,
            first_name: payload.first_name,
            last_name: payload.last_name,
        })
        .await?;

    Ok(Created(UserResult::ok(user)))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(token))
}
