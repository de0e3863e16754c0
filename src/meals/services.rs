use time::{Date, OffsetDateTime, UtcOffset};

use crate::dates::stamp_on;
use crate::error::{NutritionError, Result};
use crate::foods::{catalog::validate_macros, FoodRecord};
use crate::meals::repo_types::Meal;
use crate::nutrition::{portion, Totals};
use crate::recipes::{services::per_serving, Recipe};

/// Quantities in grams must be finite and non-negative.
pub fn validate_quantity(grams: f64) -> Result<()> {
    if !grams.is_finite() || grams < 0.0 {
        return Err(NutritionError::validation("quantity must be a non-negative number of grams"));
    }
    Ok(())
}

/// Meal for `grams` of a catalog food, dated on `day`.
pub fn meal_from_food(
    food: &FoodRecord,
    grams: f64,
    day: Date,
    now: OffsetDateTime,
    offset: UtcOffset,
) -> Result<Meal> {
    validate_quantity(grams)?;
    let totals = portion::scale(food, grams);
    Ok(Meal::new(
        format!("{} ({}g)", food.name, grams),
        totals,
        stamp_on(day, now, offset),
    ))
}

/// Manually entered meal. Values are taken as given, without catalog lookup.
pub fn manual_meal(
    name: &str,
    totals: Totals,
    day: Date,
    now: OffsetDateTime,
    offset: UtcOffset,
) -> Result<Meal> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NutritionError::validation("meal name is required"));
    }
    validate_macros(&totals)?;
    Ok(Meal::new(name, totals, stamp_on(day, now, offset)))
}

/// Meal worth `servings` portions of a recipe.
pub fn meal_from_recipe(
    recipe: &Recipe,
    servings: f64,
    day: Date,
    now: OffsetDateTime,
    offset: UtcOffset,
) -> Result<Meal> {
    if !servings.is_finite() || servings <= 0.0 {
        return Err(NutritionError::validation("servings must be a positive number"));
    }
    let totals = per_serving(recipe).scaled(servings).rounded();
    let unit = if servings > 1.0 { "portions" } else { "portion" };
    Ok(Meal::new(
        format!("{} ({} {})", recipe.name, servings, unit),
        totals,
        stamp_on(day, now, offset),
    ))
}
