use axum::response::{IntoResponse, Response};
use trailhead_core::error::ApiError;
use trailhead_core::response::ApiResponse;

use super::JsonResponse;

/// Failure of a handler, rendered as the JSON error envelope.
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self.0 {
            ApiError::Validation(error) => {
                tracing::warn!(message = %error, "Rejected invalid request");
            }
            ApiError::Store(error) => {
                tracing::error!(error = %error, "Store operation failed");
            }
        }

        JsonResponse(ApiResponse::from(self.0)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<ApiError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
