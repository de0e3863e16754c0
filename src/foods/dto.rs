use serde::Deserialize;

use super::FoodRecord;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Request body for a custom food. Values are per 100g.
#[derive(Debug, Deserialize)]
pub struct NewFoodRequest {
    pub name: String,
    pub calories: f64,
    #[serde(default)]
    pub proteins: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fats: f64,
}

impl From<NewFoodRequest> for FoodRecord {
    fn from(r: NewFoodRequest) -> Self {
        FoodRecord::new(r.name, r.calories, r.proteins, r.carbs, r.fats)
    }
}
