//! Logging sink used by the client interceptors.

use reqwest::StatusCode;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Coarse classification of a failed response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Unauthorized,
    Forbidden,
    ServerError,
}

impl ErrorClass {
    /// Classify a status; only 401, 403 and 500 are classified.
    pub fn classify(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::UNAUTHORIZED => Some(ErrorClass::Unauthorized),
            StatusCode::FORBIDDEN => Some(ErrorClass::Forbidden),
            StatusCode::INTERNAL_SERVER_ERROR => Some(ErrorClass::ServerError),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ErrorClass::Unauthorized => "unauthorized",
            ErrorClass::Forbidden => "forbidden",
            ErrorClass::ServerError => "server error",
        }
    }
}

impl std::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where interceptors send their output.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ClientLog: Send + Sync {
    /// Development-only trace of a response or error
    fn debug(&self, message: &str);

    /// Classified warning (unauthorized / forbidden)
    fn warn(&self, class: ErrorClass, message: &str);

    /// Classified error (server error)
    fn error(&self, class: ErrorClass, message: &str);
}

/// [`ClientLog`] backed by `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ClientLog for TracingLog {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "api_client", "{}", message);
    }

    fn warn(&self, class: ErrorClass, message: &str) {
        tracing::warn!(target: "api_client", class = %class, "{}", message);
    }

    fn error(&self, class: ErrorClass, message: &str) {
        tracing::error!(target: "api_client", class = %class, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            ErrorClass::classify(StatusCode::UNAUTHORIZED),
            Some(ErrorClass::Unauthorized)
        );
        assert_eq!(
            ErrorClass::classify(StatusCode::FORBIDDEN),
            Some(ErrorClass::Forbidden)
        );
        assert_eq!(
            ErrorClass::classify(StatusCode::INTERNAL_SERVER_ERROR),
            Some(ErrorClass::ServerError)
        );
        assert_eq!(ErrorClass::classify(StatusCode::NOT_FOUND), None);
        assert_eq!(ErrorClass::classify(StatusCode::BAD_GATEWAY), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ErrorClass::ServerError.to_string(), "server error");
        assert_eq!(ErrorClass::Forbidden.label(), "forbidden");
    }
}
