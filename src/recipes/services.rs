use crate::error::{NutritionError, Result};
use crate::foods::FoodRecord;
use crate::meals::services::validate_quantity;
use crate::nutrition::{portion, Totals};
use crate::recipes::repo_types::{Ingredient, Recipe};

/// Scales `food` to `grams` and appends it to a copy of `recipe`.
pub fn add_ingredient(recipe: &Recipe, food: &FoodRecord, grams: f64) -> Result<Recipe> {
    validate_quantity(grams)?;
    let ingredient = Ingredient::new(food.name.clone(), grams, portion::scale(food, grams));
    Ok(recipe.with_ingredient(ingredient))
}

pub fn remove_ingredient(recipe: &Recipe, index: usize) -> Result<Recipe> {
    recipe.without_ingredient(index)
}

/// Total nutrition divided by servings, rounded. Zero servings gives zero.
pub fn per_serving(recipe: &Recipe) -> Totals {
    recipe
        .total_nutrition()
        .divided_rounded(f64::from(recipe.servings))
}

/// Checks run before a recipe is saved.
pub fn validate_for_save(recipe: &Recipe) -> Result<()> {
    if recipe.name.trim().is_empty() {
        return Err(NutritionError::validation("recipe name is required"));
    }
    if recipe.servings == 0 {
        return Err(NutritionError::validation("servings must be at least 1"));
    }
    Ok(())
}
