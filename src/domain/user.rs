//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
///
/// `login` is not unique; the same login may be registered any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Account login
    #[schema(example = "ggicci")]
    pub login: String,
    /// Server-assigned creation time
    pub created_at: DateTime<Utc>,
    /// Whether the user is a member
    pub is_member: bool,
    /// Age in years
    #[schema(example = 18)]
    pub age: i64,
}

/// Body of a create-user request.
///
/// Missing fields take their zero value. A `created_at` supplied by the
/// caller must be a valid timestamp but is never read; the server assigns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewUser {
    #[schema(example = "ggicci")]
    pub login: String,
    pub is_member: bool,
    #[schema(example = 18)]
    pub age: i64,
    /// Ignored; replaced by the server time
    pub created_at: Option<DateTime<Utc>>,
}

impl NewUser {
    /// Stamp the new user with its creation time
    pub fn into_user(self, created_at: DateTime<Utc>) -> User {
        User {
            login: self.login,
            created_at,
            is_member: self.is_member,
            age: self.age,
        }
    }
}
