//! Expense Tracker - account and profile API
//!
//! JWT-authenticated profile management over a Postgres credential store,
//! plus a typed client with an interceptor pipeline.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases
//! - **infra**: Database and credential store
//! - **api**: HTTP handlers, authentication gate, validation, routes
//! - **client**: HTTP client and interceptors
//! - **types**: Shared response bodies
//! - **errors**: Centralized error handling and the message catalog
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use client::ApiClient;
pub use config::Config;
pub use domain::{Password, User};
pub use errors::{AppError, AppResult, MessageCode};
