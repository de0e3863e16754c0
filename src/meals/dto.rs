use serde::Deserialize;

use crate::nutrition::Totals;

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
}

/// Meal from a catalog food. `quantity` is in grams.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodMealRequest {
    pub food_name: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    pub date: Option<String>,
}

fn default_quantity() -> f64 {
    100.0
}

/// Manually entered meal, values taken as given.
#[derive(Debug, Deserialize)]
pub struct ManualMealRequest {
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
    pub date: Option<String>,
}

impl ManualMealRequest {
    pub fn totals(&self) -> Totals {
        Totals::new(self.calories, self.proteins, self.carbs, self.fats)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMealRequest {
    pub recipe_id: String,
    #[serde(default = "default_servings")]
    pub servings: f64,
    pub date: Option<String>,
}

fn default_servings() -> f64 {
    1.0
}
