use crate::error::{NutritionError, Result};
use crate::meals::repo_types::Meal;

/// Ordered meal log. Every change returns a new log; the old one stays valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealLog {
    meals: Vec<Meal>,
}

impl MealLog {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    pub fn as_slice(&self) -> &[Meal] {
        &self.meals
    }

    pub fn appended(&self, meal: Meal) -> Self {
        let mut meals = self.meals.clone();
        meals.push(meal);
        Self { meals }
    }

    /// Log without the meal `id`, and the removed meal.
    pub fn without(&self, id: &str) -> Result<(Self, Meal)> {
        let pos = self
            .meals
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| NutritionError::not_found(format!("meal {id}")))?;
        let mut meals = self.meals.clone();
        let removed = meals.remove(pos);
        Ok((Self { meals }, removed))
    }
}
