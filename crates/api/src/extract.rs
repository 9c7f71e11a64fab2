//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::AppError;
use crate::models::ValidationError;

/// JSON body extractor whose rejection uses the API error shape.
///
/// Wraps [`axum::Json`]. A field of the wrong type becomes
/// [`AppError::Validation`]; a missing content type or unparseable body
/// becomes [`AppError::BadRequest`] instead of axum's plain-text rejection.
///
/// # Example
///
/// ```rust,ignore
/// async fn create(ApiJson(request): ApiJson<CreateProductRequest>) -> Result<Json<ProductCreated>> {
///     let product = request.validate()?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(e) => {
                    ValidationError::Malformed(e.body_text()).into()
                }
                other => AppError::BadRequest(other.body_text()),
            })?;
        Ok(Self(value))
    }
}
