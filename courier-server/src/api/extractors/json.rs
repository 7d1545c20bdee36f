//! JSON body extraction with the standard error envelope.

use crate::api::error::ApiError;
use crate::service::FieldViolation;

use std::future::Future;
use std::panic::Location;

use axum::extract::{FromRequest, Request};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

/// `axum::Json` with rejections folded into `ApiError`.
///
/// A missing field or malformed body is a client mistake like any other
/// field violation, so it comes back as a `VALIDATION_ERROR` envelope
/// instead of axum's plain-text 422. The rejection text names the
/// offending field (serde's "missing field" message).
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match axum::Json::<T>::from_request(req, state).await {
                Ok(axum::Json(value)) => Ok(Json(value)),
                Err(rejection) => Err(ApiError::Validation {
                    details: vec![FieldViolation {
                        field: "body",
                        message: rejection.body_text(),
                    }],
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}

impl<T> axum::response::IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}
