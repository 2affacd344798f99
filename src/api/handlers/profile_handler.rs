//! Profile handlers: read and partially update the authenticated user.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::normalize_name;
use crate::api::extractors::{validation_messages, Schema, ValidatedJson, ValidationResult};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::errors::{AppError, AppResult, MessageCode};
use crate::services::ProfileUpdate;
use crate::types::{ErrorResponse, UserEnvelope, UserResult};

/// Profile update request. Every field is optional; absent or blank
/// fields leave the stored value untouched.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(max = 50, message = "First name must be at most 50 characters"))]
    #[schema(example = "Jane")]
    pub first_name: Option<String>,
    #[validate(length(max = 50, message = "Last name must be at most 50 characters"))]
    #[schema(example = "Doe")]
    pub last_name: Option<String>,
    /// New password; the current one is replaced without re-authentication
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "NewSecurePass123!", min_length = 8)]
    pub password: Option<String>,
}

impl Schema for UpdateProfileRequest {
    fn check(self) -> ValidationResult<Self> {
        let sanitized = Self {
            first_name: normalize_name(self.first_name),
            last_name: normalize_name(self.last_name),
            password: self.password.filter(|p| !p.is_empty()),
        };
        validation_messages(&sanitized)?;
        Ok(sanitized)
    }
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            password: request.password,
        }
    }
}

/// Create profile routes (mounted behind the authentication gate)
pub fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile",
        get(get_profile).put(update_profile).patch(update_profile),
    )
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/profile",
    tag = "Profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserEnvelope),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_profile(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<UserEnvelope> {
    Json(UserEnvelope { user: user.into() })
}

/// Update the authenticated user's profile
#[utoipa::path(
    put,
    path = "/profile",
    tag = "Profile",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResult),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Failed to update profile", body = ErrorResponse)
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<UserResult>> {
    let updated = state
        .profile_service
        .update_profile(user.id, payload.into())
        .await
        .map_err(|e| {
            tracing::error!(user_id = %user.id, "Profile update failed: {:?}", e);
            AppError::Failed(MessageCode::ProfileUpdateFailed)
        })?;

    Ok(Json(UserResult::ok(updated)))
}
