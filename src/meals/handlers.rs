use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};

use super::dto::{DayQuery, FoodMealRequest, ManualMealRequest, RecipeMealRequest};
use super::repo_types::Meal;
use super::services::{manual_meal, meal_from_food, meal_from_recipe};
use crate::error::{reject, NutritionError};
use crate::nutrition::aggregate;
use crate::state::AppState;

// --- routers ---

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/meals", get(list_meals))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(create_manual_meal))
        .route("/meals/food", post(create_meal_from_food))
        .route("/meals/recipe", post(create_meal_from_recipe))
        .route("/meals/:id", delete(delete_meal))
}

type Created = (StatusCode, Json<Meal>);

// --- handlers ---

/// GET /meals[?date=YYYY-MM-DD]
#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Result<Json<Vec<Meal>>, (StatusCode, String)> {
    let store = state.store();
    let meals = match q.date.as_deref() {
        Some(d) => {
            let day = crate::dates::parse_date(d).map_err(reject)?;
            aggregate::filter_by_day(store.meals(), day, state.offset())
                .into_iter()
                .cloned()
                .collect()
        }
        None => store.meals().to_vec(),
    };
    Ok(Json(meals))
}

/// POST /meals
#[instrument(skip(state))]
pub async fn create_manual_meal(
    State(state): State<AppState>,
    Json(body): Json<ManualMealRequest>,
) -> Result<Created, (StatusCode, String)> {
    let day = state.day_or_today(body.date.as_deref()).map_err(reject)?;
    let meal = manual_meal(&body.name, body.totals(), day, OffsetDateTime::now_utc(), state.offset())
        .map_err(reject)?;
    Ok(created(state.store().log_meal(meal)))
}

/// POST /meals/food { foodName, quantity, date? }
#[instrument(skip(state))]
pub async fn create_meal_from_food(
    State(state): State<AppState>,
    Json(body): Json<FoodMealRequest>,
) -> Result<Created, (StatusCode, String)> {
    let day = state.day_or_today(body.date.as_deref()).map_err(reject)?;
    let mut store = state.store();
    let food = store.catalog().require(&body.food_name).map_err(reject)?;
    let meal = meal_from_food(&food, body.quantity, day, OffsetDateTime::now_utc(), state.offset())
        .map_err(reject)?;
    Ok(created(store.log_meal(meal)))
}

/// POST /meals/recipe { recipeId, servings?, date? }
#[instrument(skip(state))]
pub async fn create_meal_from_recipe(
    State(state): State<AppState>,
    Json(body): Json<RecipeMealRequest>,
) -> Result<Created, (StatusCode, String)> {
    let day = state.day_or_today(body.date.as_deref()).map_err(reject)?;
    let mut store = state.store();
    let recipe = store
        .recipe(&body.recipe_id)
        .cloned()
        .ok_or_else(|| reject(NutritionError::not_found(format!("recipe {}", body.recipe_id))))?;
    let meal = meal_from_recipe(&recipe, body.servings, day, OffsetDateTime::now_utc(), state.offset())
        .map_err(reject)?;
    Ok(created(store.log_meal(meal)))
}

/// DELETE /meals/:id
#[instrument(skip(state))]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let removed = state.store().remove_meal(&id).map_err(reject)?;
    info!(id = %removed.id, "meal removed");
    Ok(StatusCode::NO_CONTENT)
}

fn created(meal: Meal) -> Created {
    info!(id = %meal.id, name = %meal.name, calories = meal.calories, "meal logged");
    (StatusCode::CREATED, Json(meal))
}
