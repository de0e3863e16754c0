use crate::error::{NutritionError, Result};
use crate::recipes::repo_types::Recipe;

/// Ordered list of recipes with copy-on-write updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Replaces the recipe with the same id in place, or appends it.
    pub fn upserted(&self, recipe: Recipe) -> Self {
        let mut recipes = self.recipes.clone();
        match recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(slot) => *slot = recipe,
            None => recipes.push(recipe),
        }
        Self { recipes }
    }

    /// Replaces an existing recipe. Unlike [`upserted`](Self::upserted) this never
    /// appends: an id that is gone is reported as `NotFound`.
    pub fn replaced(&self, recipe: Recipe) -> Result<Self> {
        if self.get(&recipe.id).is_none() {
            return Err(NutritionError::not_found(format!("recipe {}", recipe.id)));
        }
        Ok(self.upserted(recipe))
    }

    pub fn without(&self, id: &str) -> Result<Self> {
        if self.get(id).is_none() {
            return Err(NutritionError::not_found(format!("recipe {id}")));
        }
        let recipes = self.recipes.iter().filter(|r| r.id != id).cloned().collect();
        Ok(Self { recipes })
    }
}
