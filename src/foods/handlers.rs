use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{NewFoodRequest, SearchQuery};
use super::{FoodOption, FoodRecord};
use crate::error::reject;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/foods", get(search_foods).post(add_custom_food))
}

/// GET /foods?q=...
#[instrument(skip(state))]
pub async fn search_foods(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<FoodOption>> {
    Json(state.store().catalog().search(&query.q))
}

/// POST /foods
#[instrument(skip(state))]
pub async fn add_custom_food(
    State(state): State<AppState>,
    Json(body): Json<NewFoodRequest>,
) -> Result<(StatusCode, Json<FoodRecord>), (StatusCode, String)> {
    let food = state
        .store()
        .add_custom_food(body.into())
        .map_err(reject)?;
    info!(name = %food.name, "custom food added");
    Ok((StatusCode::CREATED, Json(food)))
}
