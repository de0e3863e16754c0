use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{IngredientRequest, RecipeDetails, SaveRecipeRequest};
use super::services::{add_ingredient, remove_ingredient};
use super::Recipe;
use crate::error::{reject, NutritionError};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes).post(save_recipe))
        .route("/recipes/:id", get(get_recipe).delete(delete_recipe))
        .route("/recipes/:id/ingredients", post(add_recipe_ingredient))
        .route("/recipes/:id/ingredients/:index", delete(remove_recipe_ingredient))
}

/// GET /recipes
#[instrument(skip(state))]
pub async fn list_recipes(State(state): State<AppState>) -> Json<Vec<RecipeDetails>> {
    let recipes = state.store().recipes().iter().cloned().map(RecipeDetails::from).collect();
    Json(recipes)
}

/// GET /recipes/:id
#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecipeDetails>, (StatusCode, String)> {
    let recipe = state
        .store()
        .recipe(&id)
        .cloned()
        .ok_or_else(|| reject(NutritionError::not_found(format!("recipe {id}"))))?;
    Ok(Json(recipe.into()))
}

/// POST /recipes
///
/// Ingredients are resolved against the catalog and scaled at save time.
#[instrument(skip(state))]
pub async fn save_recipe(
    State(state): State<AppState>,
    Json(body): Json<SaveRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeDetails>), (StatusCode, String)> {
    let mut store = state.store();

    let mut recipe = Recipe::new(body.name.trim());
    if let Some(id) = body.id {
        recipe.id = id;
    }
    recipe.servings = body.servings;
    recipe.instructions = body.instructions;
    for IngredientRequest { food_name, quantity } in &body.ingredients {
        let food = store.catalog().require(food_name).map_err(reject)?;
        recipe = add_ingredient(&recipe, &food, *quantity).map_err(reject)?;
    }

    let saved = store.save_recipe(recipe).map_err(reject)?;
    info!(id = %saved.id, name = %saved.name, "recipe saved");
    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// DELETE /recipes/:id
#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.store().delete_recipe(&id).map_err(reject)?;
    info!(%id, "recipe deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /recipes/:id/ingredients { foodName, quantity }
#[instrument(skip(state))]
pub async fn add_recipe_ingredient(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<IngredientRequest>,
) -> Result<Json<RecipeDetails>, (StatusCode, String)> {
    let mut store = state.store();
    let food = store.catalog().require(&body.food_name).map_err(reject)?;
    let updated = store
        .update_recipe(&id, |r| add_ingredient(r, &food, body.quantity))
        .map_err(reject)?;
    Ok(Json(updated.into()))
}

/// DELETE /recipes/:id/ingredients/:index
#[instrument(skip(state))]
pub async fn remove_recipe_ingredient(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<RecipeDetails>, (StatusCode, String)> {
    let updated = state
        .store()
        .update_recipe(&id, |r| remove_ingredient(r, index))
        .map_err(reject)?;
    Ok(Json(updated.into()))
}
