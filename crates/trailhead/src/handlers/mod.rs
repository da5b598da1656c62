use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use trailhead_core::response::ApiResponse;

pub mod articles;
pub mod body;
pub mod campsites;
pub mod error;
pub mod fallback;
pub mod favorites;
pub mod featured;
pub mod parks;

pub use body::RequestBody;
pub use error::AppError;

/// A formatted status code and JSON body.
#[derive(Debug)]
pub struct JsonResponse(pub ApiResponse);

impl JsonResponse {
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        Self(ApiResponse::ok(payload))
    }

    pub fn success() -> Self {
        Self(ApiResponse::success())
    }
}

impl IntoResponse for JsonResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.0.body,
        )
            .into_response()
    }
}
