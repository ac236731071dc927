//! API middleware.

mod access;

pub use access::{require_known_login, require_valid_token};
