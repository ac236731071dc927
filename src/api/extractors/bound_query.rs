//! Query string extractor and scalar parsing helpers.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

/// Query string extractor.
///
/// Backed by `axum_extra::extract::Query`, so repeated keys such as
/// `sort_by[]=age&sort_by[]=login` collect into a `Vec`. Decoding failures
/// reject the request with [`AppError::Binding`].
pub struct BoundQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for BoundQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum_extra::extract::Query(value) =
            axum_extra::extract::Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    tracing::debug!(error = %e, "Rejected query string");
                    AppError::binding(e.to_string())
                })?;

        Ok(BoundQuery(value))
    }
}

/// Parse a boolean query value.
///
/// Accepts `1, t, T, TRUE, true, True` and `0, f, F, FALSE, false, False`.
pub fn parse_bool(name: &str, raw: &str) -> AppResult<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(AppError::binding(format!(
            "invalid value {:?} for {}: expected a boolean",
            raw, name
        ))),
    }
}

/// First value that is present and non-empty, in the order given.
pub fn first_present<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| !value.is_empty())
}
