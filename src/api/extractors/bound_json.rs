//! JSON body extractor that reports failures as binding errors.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON body extractor.
///
/// Unlike `axum::Json` it does not insist on a `Content-Type` header; the
/// body is decoded as JSON whatever the client declared. Any failure to read
/// or decode the body rejects the request with [`AppError::Binding`] before
/// the handler runs.
///
/// # Example
///
/// ```rust,ignore
/// use repo_binder::api::extractors::BoundJson;
/// use repo_binder::domain::Repository;
///
/// async fn create(BoundJson(repo): BoundJson<Repository>) {
///     // repo is fully decoded
/// }
/// ```
pub struct BoundJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BoundJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::binding(e.body_text()))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::binding(format!("invalid JSON body: {}", e))
        })?;

        Ok(BoundJson(value))
    }
}
