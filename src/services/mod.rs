//! Application services layer - Use cases and business logic.
//!
//! Services depend on store traits rather than the concrete in-memory
//! store, so handlers and tests can swap implementations.

mod repository_service;
mod user_service;

pub use repository_service::{RepositoryManager, RepositoryService};
pub use user_service::{UserManager, UserService};
