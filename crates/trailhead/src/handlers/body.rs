use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use trailhead_core::response::ApiResponse;
use trailhead_core::validation::body_text;

use super::{AppError, JsonResponse};

/// Raw request body decoded as text.
///
/// Unreadable and oversized bodies are rejected with the JSON error envelope
/// rather than axum's plaintext rejection.
#[derive(Debug, Clone)]
pub struct RequestBody(pub String);

impl<S> FromRequest<S> for RequestBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!(status = %rejection.status(), "Rejected request body");
            JsonResponse(ApiResponse::error(
                &rejection.body_text(),
                rejection.status().as_u16(),
            ))
            .into_response()
        })?;

        let text = body_text(&bytes).map_err(|e| AppError::from(e).into_response())?;

        Ok(Self(text.to_owned()))
    }
}
