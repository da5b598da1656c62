use std::collections::HashMap;

use axum::extract::{Query, State};
use trailhead_core::catalog::{CreateArticleRequest, ParkCodeQuery};
use trailhead_core::response::Items;

use crate::{
    handlers::{AppError, JsonResponse, RequestBody},
    state::AppState,
};

/// List the articles of a park ordered by title (GET /articles?parkCode=).
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<JsonResponse, AppError> {
    let query = ParkCodeQuery::from_params(&params)?;

    tracing::debug!(park_code = %query.park_code, "Listing articles");

    let items = state.catalog.list_articles(&query).await?;

    Ok(JsonResponse::ok(&Items::from(items)))
}

/// Create or replace an article (POST /articles).
pub async fn create_article(
    State(state): State<AppState>,
    RequestBody(body): RequestBody,
) -> Result<JsonResponse, AppError> {
    let request = CreateArticleRequest::from_body(Some(&body))?;

    state.catalog.create_article(&request).await?;

    tracing::info!(park_code = %request.park_code, id = %request.id, "Created article");

    Ok(JsonResponse::success())
}
