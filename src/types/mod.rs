//! Shared response types.

mod response;

pub use response::{Created, ErrorResponse, UserEnvelope, UserResult};
