//! Request extractors that turn every malformed input into a 422 before any
//! handler code (and therefore any database access) runs.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Strict JSON body: unknown enum tags, missing fields, syntax errors and a
/// missing `Content-Type` all reject with 422.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::Unprocessable(rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}

/// Integer user id taken from the `{id}` path segment
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub i32);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| ApiError::Unprocessable(rejection.body_text()))?;

        Ok(UserId(id))
    }
}
