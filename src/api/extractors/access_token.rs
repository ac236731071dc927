//! Access token extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::Deserialize;

use super::bound_query::{first_present, BoundQuery};
use crate::config::{HEADER_API_TOKEN, HEADER_AUTHORIZATION, QUERY_ACCESS_TOKEN, QUERY_TOKEN};
use crate::errors::AppError;

/// Token query parameters; a repeated key binds its first value
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TokenQuery {
    token: Vec<String>,
    access_token: Vec<String>,
}

/// Access token bound from the request.
///
/// Sources in precedence order: `X-Api-Token` header, `Authorization`
/// header (taken verbatim), `token` query parameter, `access_token` query
/// parameter. The first non-empty one wins. The token is required: when
/// every source is absent or empty the request is rejected with
/// [`AppError::Binding`].
///
/// Extraction only binds the token. Comparing it with the shared secret is
/// up to the handler, after any other checks that must run first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_headers(parts: &Parts) -> Option<Self> {
        let headers = [
            header_value(parts, HEADER_API_TOKEN),
            header_value(parts, HEADER_AUTHORIZATION),
        ];
        first_present(&headers).map(|token| Self(token.to_string()))
    }

    fn from_query(query: &TokenQuery) -> Result<Self, AppError> {
        let candidates = [
            query.token.first().map(String::as_str),
            query.access_token.first().map(String::as_str),
        ];
        first_present(&candidates)
            .map(|token| Self(token.to_string()))
            .ok_or_else(|| {
                tracing::debug!("No access token in headers or query");
                AppError::binding(format!(
                    "missing access token: set the {} or {} header, or the {} or {} query parameter",
                    HEADER_API_TOKEN,
                    HEADER_AUTHORIZATION,
                    QUERY_TOKEN,
                    QUERY_ACCESS_TOKEN
                ))
            })
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|value| value.to_str().ok())
}

#[async_trait]
impl<S> FromRequestParts<S> for AccessToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(token) = Self::from_headers(parts) {
            return Ok(token);
        }

        let BoundQuery(query) = BoundQuery::<TokenQuery>::from_request_parts(parts, state).await?;
        Self::from_query(&query)
    }
}
