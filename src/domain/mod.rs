//! Domain layer - Core business entities
//!
//! Plain data types for the two collections the service manages.
//! No infrastructure dependencies beyond serialization.

pub mod repository;
pub mod user;

pub use repository::Repository;
pub use user::{NewUser, User};
