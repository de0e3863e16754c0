use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::{NutritionError, Result};
use crate::foods::{FoodCatalog, FoodRecord};
use crate::meals::{Meal, MealLog};
use crate::nutrition::goals::NutritionGoals;
use crate::recipes::{services::validate_for_save, Recipe, RecipeBook};
use crate::storage::Persistence;

pub const MEALS_KEY: &str = "meals";
pub const CUSTOM_FOODS_KEY: &str = "customFoods";
pub const RECIPES_KEY: &str = "recipes";
pub const GOALS_KEY: &str = "nutritionGoals";

/// All user state: meal log, custom foods, recipes and goals.
///
/// Built once at startup from a persistence port. Each mutation computes the next
/// collection, writes it out, then swaps it in. Writes are best-effort: a failed
/// write is logged and the in-memory state still moves forward.
pub struct NutritionStore {
    persistence: Arc<dyn Persistence>,
    meals: MealLog,
    catalog: FoodCatalog,
    recipes: RecipeBook,
    goals: NutritionGoals,
}

fn load_key<T: DeserializeOwned>(p: &dyn Persistence, key: &str) -> Option<T> {
    let raw = match p.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, key, "stored value unreadable; using default");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(error = %e, key, "stored value malformed; using default");
            None
        }
    }
}

impl NutritionStore {
    /// Loads every key, falling back to empty collections and default goals for
    /// anything missing or malformed.
    pub fn load(persistence: Arc<dyn Persistence>) -> Self {
        let p = persistence.as_ref();
        let meals: Vec<Meal> = load_key(p, MEALS_KEY).unwrap_or_default();
        let custom: Vec<FoodRecord> = load_key(p, CUSTOM_FOODS_KEY).unwrap_or_default();
        let recipes: Vec<Recipe> = load_key(p, RECIPES_KEY).unwrap_or_default();
        let goals: NutritionGoals = load_key(p, GOALS_KEY).unwrap_or_default();
        debug!(
            meals = meals.len(),
            custom_foods = custom.len(),
            recipes = recipes.len(),
            "store loaded"
        );
        Self {
            persistence,
            meals: MealLog::new(meals),
            catalog: FoodCatalog::new(custom),
            recipes: RecipeBook::new(recipes),
            goals,
        }
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, key, "serialize failed; not persisted");
                return;
            }
        };
        if let Err(e) = self.persistence.write(key, &json) {
            warn!(error = %e, key, "persist failed");
        }
    }

    pub fn meals(&self) -> &[Meal] {
        self.meals.as_slice()
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.recipes.as_slice()
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    pub fn goals(&self) -> &NutritionGoals {
        &self.goals
    }

    pub fn log_meal(&mut self, meal: Meal) -> Meal {
        let next = self.meals.appended(meal.clone());
        self.persist(MEALS_KEY, next.as_slice());
        self.meals = next;
        meal
    }

    pub fn remove_meal(&mut self, id: &str) -> Result<Meal> {
        let (next, removed) = self.meals.without(id)?;
        self.persist(MEALS_KEY, next.as_slice());
        self.meals = next;
        Ok(removed)
    }

    pub fn add_custom_food(&mut self, food: FoodRecord) -> Result<FoodRecord> {
        let (next, stored) = self.catalog.with_custom(food)?;
        self.persist(CUSTOM_FOODS_KEY, next.custom());
        self.catalog = next;
        Ok(stored)
    }

    /// Upsert by id.
    pub fn save_recipe(&mut self, recipe: Recipe) -> Result<Recipe> {
        validate_for_save(&recipe)?;
        let next = self.recipes.upserted(recipe.clone());
        self.persist(RECIPES_KEY, next.as_slice());
        self.recipes = next;
        Ok(recipe)
    }

    /// Applies `f` to the stored recipe `id` and stores the result. Fails with
    /// `NotFound` when the recipe no longer exists; nothing changes on error.
    pub fn update_recipe(&mut self, id: &str, f: impl FnOnce(&Recipe) -> Result<Recipe>) -> Result<Recipe> {
        let current = self
            .recipes
            .get(id)
            .ok_or_else(|| NutritionError::not_found(format!("recipe {id}")))?;
        let updated = f(current)?;
        validate_for_save(&updated)?;
        let next = self.recipes.replaced(updated.clone())?;
        self.persist(RECIPES_KEY, next.as_slice());
        self.recipes = next;
        Ok(updated)
    }

    pub fn delete_recipe(&mut self, id: &str) -> Result<()> {
        let next = self.recipes.without(id)?;
        self.persist(RECIPES_KEY, next.as_slice());
        self.recipes = next;
        Ok(())
    }

    /// Full replace; stored meals are unaffected.
    pub fn set_goals(&mut self, goals: NutritionGoals) -> Result<NutritionGoals> {
        goals.validate()?;
        self.persist(GOALS_KEY, &goals);
        self.goals = goals;
        Ok(goals)
    }
}
