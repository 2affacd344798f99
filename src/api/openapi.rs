//! OpenAPI documentation configuration.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, profile_handler};
use crate::domain::UserResponse;
use crate::services::TokenResponse;
use crate::types::{ErrorResponse, UserEnvelope, UserResult};

/// OpenAPI documentation for the Expense Tracker API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Expense Tracker API",
        version = "0.1.0",
        description = "Account and profile endpoints of the expense tracker",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        profile_handler::get_profile,
        profile_handler::update_profile,
    ),
    components(
        schemas(
            UserResponse,
            UserEnvelope,
            UserResult,
            ErrorResponse,
            TokenResponse,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            profile_handler::UpdateProfileRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Profile", description = "Authenticated user's profile")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
