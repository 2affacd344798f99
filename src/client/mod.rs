//! Typed API client with a request / response / error interceptor pipeline.
//!
//! Every request passes through each [`Interceptor`] before it is sent;
//! every response or failure passes back through them in the same order.
//! [`DefaultInterceptor`] provides cache-busting for GET requests,
//! development logging and status-based error classification.

mod api_client;
mod error;
mod interceptor;
mod log;

pub use api_client::{ApiClient, ClientResponse, RequestConfig};
pub use error::{ClientError, ClientResult};
pub use interceptor::{DefaultInterceptor, Interceptor};
pub use log::{ClientLog, ErrorClass, TracingLog};

#[cfg(any(test, feature = "test-utils"))]
pub use log::MockClientLog;
