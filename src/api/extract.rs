//! Request extractors.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// JSON body extractor that rejects with [`ApiError::Validation`].
///
/// A body without `Content-Type` is still parsed as JSON; any other
/// non-JSON content type is rejected. The body is decoded into a
/// [`Value`] first, so a repeated key keeps its last value, then into `T`.
/// Every rejection becomes a 422 before the handler runs.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = if req.headers().contains_key(header::CONTENT_TYPE) {
            Json::<Value>::from_request(req, state).await?
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
            Json::<Value>::from_bytes(&bytes)?
        };

        serde_json::from_value(value).map(ValidatedJson).map_err(|e| {
            ApiError::Validation(format!(
                "Failed to deserialize the JSON body into the target type: {e}"
            ))
        })
    }
}
