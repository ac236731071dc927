//! Repository domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A source code repository record.
///
/// Not tied to an owning user; every record lives in one global collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Repository {
    /// Repository name
    #[schema(example = "httpin")]
    pub name: String,
    /// Primary language
    #[schema(example = "Go")]
    pub language: String,
}

impl Repository {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
        }
    }
}
