//! Request extractors that report rejections through [`AppError`].
//!
//! Malformed bodies and ids come back as the standard `{ "error", "code" }`
//! JSON with a 422 status instead of axum's plain-text rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use starwars_core::error::CoreError;
use starwars_core::types::DbId;

use crate::error::AppError;

/// JSON request body, rejected as `VALIDATION_ERROR` when it does not match `T`.
///
/// The body is parsed as JSON whatever its `Content-Type`. Keys `T` does not
/// know (such as the read-only `id` echoed from a GET) are ignored.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(ValidJson)
            .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))
    }
}

/// The `{id}` path segment of a single-record route.
#[derive(Debug, Deserialize, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct IdPath(pub DbId);
