use std::collections::HashMap;

use axum::extract::{Query, State};
use trailhead_core::catalog::{CampsiteQuery, CreateCampsiteRequest};
use trailhead_core::response::Items;

use crate::{
    handlers::{AppError, JsonResponse, RequestBody},
    state::AppState,
};

/// List the campsites of a park ordered by name (GET /campsites?parkCode=).
pub async fn list_campsites(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<JsonResponse, AppError> {
    let query = CampsiteQuery::from_params(&params)?;

    tracing::debug!(park_code = %query.park_code, "Listing campsites");

    let items = state.catalog.list_campsites(&query).await?;

    Ok(JsonResponse::ok(&Items::from(items)))
}

/// Create or replace a campsite (POST /campsites).
pub async fn create_campsite(
    State(state): State<AppState>,
    RequestBody(body): RequestBody,
) -> Result<JsonResponse, AppError> {
    let request = CreateCampsiteRequest::from_body(Some(&body))?;

    state.catalog.create_campsite(&request).await?;

    tracing::info!(park_code = %request.park_code, id = %request.id, "Created campsite");

    Ok(JsonResponse::success())
}
