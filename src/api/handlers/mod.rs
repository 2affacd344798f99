//! HTTP request handlers.

pub mod auth_handler;
pub mod profile_handler;

pub use auth_handler::auth_routes;
pub use profile_handler::profile_routes;

/// Trim a display string; blank input counts as absent.
pub(crate) fn normalize_name(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
