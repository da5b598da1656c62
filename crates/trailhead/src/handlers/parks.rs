use axum::extract::State;
use trailhead_core::catalog::CreateParkRequest;
use trailhead_core::response::Items;

use crate::{
    handlers::{AppError, JsonResponse, RequestBody},
    state::AppState,
};

/// List all parks ordered by name (GET /parks).
pub async fn list_parks(State(state): State<AppState>) -> Result<JsonResponse, AppError> {
    tracing::debug!("Listing parks");

    let items = state.catalog.list_parks().await?;

    Ok(JsonResponse::ok(&Items::from(items)))
}

/// Create or replace a park (POST /parks).
pub async fn create_park(
    State(state): State<AppState>,
    RequestBody(body): RequestBody,
) -> Result<JsonResponse, AppError> {
    let request = CreateParkRequest::from_body(Some(&body))?;

    state.catalog.create_park(&request).await?;

    tracing::info!(park_code = %request.park_code, id = %request.id, "Created park");

    Ok(JsonResponse::success())
}
