//! HTTP request handlers.

pub mod repository_handler;
pub mod user_handler;

pub use repository_handler::repository_routes;
pub use user_handler::user_routes;
