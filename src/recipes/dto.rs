use serde::{Deserialize, Serialize};

use super::Recipe;
use crate::nutrition::Totals;

/// Ingredient by catalog name and grams.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRequest {
    pub food_name: String,
    pub quantity: f64,
}

/// Create or replace a recipe. A missing `id` creates a new one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeRequest {
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub ingredients: Vec<IngredientRequest>,
}

fn default_servings() -> u32 {
    1
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub per_serving: Totals,
}

impl From<Recipe> for RecipeDetails {
    fn from(recipe: Recipe) -> Self {
        let per_serving = super::services::per_serving(&recipe);
        Self { recipe, per_serving }
    }
}
