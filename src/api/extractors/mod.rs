//! Request input binders.
//!
//! Each extractor turns one part of the request (body, query, headers) into
//! a typed value or rejects the request with a binding error.

mod access_token;
mod bound_json;
mod bound_query;

pub use access_token::AccessToken;
pub use bound_json::BoundJson;
pub use bound_query::{first_present, parse_bool, BoundQuery};
