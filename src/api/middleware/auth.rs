//! Authentication gate.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::TOKEN_TYPE_BEARER;
use crate::domain::User;
use crate::errors::AppError;

/// Authenticated user resolved from the credential store
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// JWT authentication middleware.
///
/// Extracts the bearer token, resolves it to a stored user through the
/// `AuthService` and inserts [`CurrentUser`] into the request extensions.
/// Anything short of a resolved user halts the request with 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::Unauthorized)?;
    let user = state.auth_service.authenticate(token).await?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Token from an `Authorization: Bearer <token>` header. The scheme is
/// matched case-insensitively.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let (scheme, token) = headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split_once(' ')?;

    let token = token.trim();
    (scheme.eq_ignore_ascii_case(TOKEN_TYPE_BEARER) && !token.is_empty()).then_some(token)
}
