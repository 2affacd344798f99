//! Request / response / error hooks.

use std::sync::Arc;

use reqwest::Method;

use super::api_client::{ClientResponse, RequestConfig};
use super::error::ClientError;
use super::log::{ClientLog, ErrorClass, TracingLog};
use crate::config::CACHE_BUST_PARAM;

/// A stage in the client pipeline.
///
/// Hooks are pass-through by default. `on_error` must hand the error back
/// so the caller still observes the failure.
pub trait Interceptor: Send + Sync {
    fn on_request(&self, config: RequestConfig) -> RequestConfig {
        config
    }

    fn on_response(&self, response: ClientResponse) -> ClientResponse {
        response
    }

    fn on_error(&self, error: ClientError) -> ClientError {
        error
    }
}

/// Cache-busting, development logging and error classification.
pub struct DefaultInterceptor {
    debug: bool,
    log: Arc<dyn ClientLog>,
}

impl DefaultInterceptor {
    /// `debug` enables logging of every response and error.
    pub fn new(debug: bool, log: Arc<dyn ClientLog>) -> Self {
        Self { debug, log }
    }
}

impl Default for DefaultInterceptor {
    fn default() -> Self {
        Self::new(cfg!(debug_assertions), Arc::new(TracingLog))
    }
}

impl Interceptor for DefaultInterceptor {
    fn on_request(&self, mut config: RequestConfig) -> RequestConfig {
        if config.method == Method::GET {
            let stamp = chrono::Utc::now().timestamp_millis().to_string();
            let kept: Vec<(String, String)> = config
                .url
                .query_pairs()
                .into_owned()
                .filter(|(key, _)| key != CACHE_BUST_PARAM)
                .collect();

            config
                .url
                .query_pairs_mut()
                .clear()
                .extend_pairs(kept)
                .append_pair(CACHE_BUST_PARAM, &stamp);
        }
        config
    }

    fn on_response(&self, response: ClientResponse) -> ClientResponse {
        if self.debug {
            self.log.debug(&format!(
                "{} {} -> {}: {}",
                response.method, response.url, response.status, response.body
            ));
        }
        response
    }

    fn on_error(&self, error: ClientError) -> ClientError {
        if self.debug {
            self.log.debug(&format!("request failed: {}", error));
        }

        if let Some(class) = error.status().and_then(ErrorClass::classify) {
            let message = format!("{} request: {}", class, error);
            match class {
                ErrorClass::Unauthorized | ErrorClass::Forbidden => self.log.warn(class, &message),
                ErrorClass::ServerError => self.log.error(class, &message),
            }
        }

        error
    }
}
