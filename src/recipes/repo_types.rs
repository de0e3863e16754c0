use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{NutritionError, Result};
use crate::nutrition::{aggregate, Nutrients, Totals};

/// Ingredient of a recipe, with absolute values at `quantity` grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, totals: Totals) -> Self {
        Self {
            name: name.into(),
            quantity,
            calories: totals.calories,
            proteins: totals.proteins,
            carbs: totals.carbs,
            fats: totals.fats,
        }
    }
}

impl Nutrients for Ingredient {
    fn nutrients(&self) -> Totals {
        Totals::new(self.calories, self.proteins, self.carbs, self.fats)
    }
}

/// A recipe. `total_nutrition` is derived from the ingredients: it is recomputed
/// on every ingredient change and on deserialization, and cannot be set directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredRecipe")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    ingredients: Vec<Ingredient>,
    pub servings: u32,
    pub instructions: String,
    total_nutrition: Totals,
}

/// Persisted shape; any stored `totalNutrition` is ignored on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecipe {
    id: String,
    name: String,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
    servings: u32,
    #[serde(default)]
    instructions: String,
}

impl From<StoredRecipe> for Recipe {
    fn from(r: StoredRecipe) -> Self {
        Recipe {
            id: r.id,
            name: r.name,
            servings: r.servings,
            instructions: r.instructions,
            total_nutrition: aggregate::sum(&r.ingredients),
            ingredients: r.ingredients,
        }
    }
}

impl Recipe {
    /// Empty recipe with a fresh id and one serving.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            ingredients: Vec::new(),
            servings: 1,
            instructions: String::new(),
            total_nutrition: Totals::ZERO,
        }
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn total_nutrition(&self) -> Totals {
        self.total_nutrition
    }

    fn with_ingredients(&self, ingredients: Vec<Ingredient>) -> Self {
        Self {
            total_nutrition: aggregate::sum(&ingredients),
            ingredients,
            ..self.clone()
        }
    }

    pub fn with_ingredient(&self, ingredient: Ingredient) -> Self {
        let mut ingredients = self.ingredients.clone();
        ingredients.push(ingredient);
        self.with_ingredients(ingredients)
    }

    pub fn without_ingredient(&self, index: usize) -> Result<Self> {
        if index >= self.ingredients.len() {
            return Err(NutritionError::not_found(format!(
                "ingredient #{index} in recipe {}",
                self.id
            )));
        }
        let mut ingredients = self.ingredients.clone();
        ingredients.remove(index);
        Ok(self.with_ingredients(ingredients))
    }
}
