use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserResponse;

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    /// Stable machine-readable code
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,
    #[schema(example = "Validation error")]
    pub message: String,
    /// Individual field errors, in schema order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// `{user}` body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
}

/// `{success, user}` body returned by mutating endpoints
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResult {
    pub success: bool,
    pub user: UserResponse,
}

impl UserResult {
    pub fn ok(user: impl Into<UserResponse>) -> Self {
        Self {
            success: true,
            user: user.into(),
        }
    }
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
