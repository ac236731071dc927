//! repo-binder - Users & repositories over typed request binding
//!
//! A small REST API that binds request body, query, headers and path into
//! typed inputs, then serves two in-memory collections.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users and repositories
//! - **services**: Use cases over the store
//! - **infra**: In-memory store
//! - **api**: Extractors, access checks, handlers and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server on 0.0.0.0:8080
//! cargo run -- serve
//!
//! # Print the OpenAPI document
//! cargo run -- openapi
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{NewUser, Repository, User};
pub use errors::{AppError, AppResult};
pub use infra::MemoryStore;
