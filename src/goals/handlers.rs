use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument};

use super::NutritionGoals;
use crate::error::reject;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/goals", get(get_goals).put(put_goals))
}

/// GET /goals
#[instrument(skip(state))]
pub async fn get_goals(State(state): State<AppState>) -> Json<NutritionGoals> {
    Json(*state.store().goals())
}

/// PUT /goals. Replaces all four targets at once.
#[instrument(skip(state))]
pub async fn put_goals(
    State(state): State<AppState>,
    Json(goals): Json<NutritionGoals>,
) -> Result<Json<NutritionGoals>, (StatusCode, String)> {
    let saved = state.store().set_goals(goals).map_err(reject)?;
    info!(calories = saved.calories, "goals updated");
    Ok(Json(saved))
}
