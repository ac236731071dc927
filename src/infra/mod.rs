//! Infrastructure layer - Storage backing the services
//!
//! The only backend is an in-memory store that lives as long as the process.

pub mod store;

pub use store::{MemoryStore, RepoStore, UserStore};

#[cfg(test)]
pub use store::{MockRepoStore, MockUserStore};
