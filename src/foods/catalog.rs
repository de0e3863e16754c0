use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, Result};
use crate::nutrition::Totals;

use super::predefined;

/// A food with nutrition values per 100g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl FoodRecord {
    pub fn new(name: impl Into<String>, calories: f64, proteins: f64, carbs: f64, fats: f64) -> Self {
        Self {
            name: name.into(),
            calories,
            proteins,
            carbs,
            fats,
        }
    }

    pub fn per_100g(&self) -> Totals {
        Totals::new(self.calories, self.proteins, self.carbs, self.fats)
    }

    /// Rules for a user-entered custom food: a name, a calorie value and
    /// non-negative macros.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(NutritionError::validation("food name is required"));
        }
        validate_macros(&self.per_100g())?;
        if self.calories == 0.0 {
            return Err(NutritionError::validation("calories per 100g are required"));
        }
        Ok(())
    }
}

/// Rejects non-finite or negative macro values.
pub fn validate_macros(t: &Totals) -> Result<()> {
    for (label, v) in [
        ("calories", t.calories),
        ("proteins", t.proteins),
        ("carbs", t.carbs),
        ("fats", t.fats),
    ] {
        if !v.is_finite() {
            return Err(NutritionError::validation(format!("{label} must be a number")));
        }
        if v < 0.0 {
            return Err(NutritionError::validation(format!("{label} must not be negative")));
        }
    }
    Ok(())
}

/// An entry offered for selection, tagged by where it comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum FoodOption {
    Predefined {
        id: String,
        category: String,
        portion: String,
        #[serde(flatten)]
        food: FoodRecord,
    },
    Custom {
        #[serde(flatten)]
        food: FoodRecord,
    },
}

impl FoodOption {
    pub fn food(&self) -> &FoodRecord {
        match self {
            FoodOption::Predefined { food, .. } | FoodOption::Custom { food } => food,
        }
    }

    pub fn name(&self) -> &str {
        &self.food().name
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Predefined foods plus the user's custom foods.
///
/// Names are matched case-insensitively after trimming. A custom food shadows a
/// predefined food with the same name, and the most recently added custom food
/// wins over older ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCatalog {
    custom: Vec<FoodRecord>,
}

impl FoodCatalog {
    pub fn new(custom: Vec<FoodRecord>) -> Self {
        Self { custom }
    }

    pub fn custom(&self) -> &[FoodRecord] {
        &self.custom
    }

    /// New catalog with `food` appended to the custom list, and the record as
    /// stored. Duplicates are kept.
    pub fn with_custom(&self, food: FoodRecord) -> Result<(Self, FoodRecord)> {
        food.validate()?;
        let stored = FoodRecord {
            name: food.name.trim().to_string(),
            ..food
        };
        let mut custom = self.custom.clone();
        custom.push(stored.clone());
        Ok((Self { custom }, stored))
    }

    pub fn find(&self, name: &str) -> Option<FoodOption> {
        let key = normalize(name);
        if let Some(food) = self.custom.iter().rev().find(|f| normalize(&f.name) == key) {
            return Some(FoodOption::Custom { food: food.clone() });
        }
        predefined::foods()
            .iter()
            .find(|f| normalize(f.name()) == key)
            .cloned()
    }

    /// Like [`find`](Self::find) but failing with `NotFound`.
    pub fn require(&self, name: &str) -> Result<FoodRecord> {
        self.find(name)
            .map(|o| o.food().clone())
            .ok_or_else(|| NutritionError::not_found(format!("food '{}'", name.trim())))
    }

    /// Autocomplete: case-insensitive substring match, predefined entries first,
    /// then custom ones in insertion order. An empty query lists everything.
    pub fn search(&self, query: &str) -> Vec<FoodOption> {
        let q = normalize(query);
        let shadowed: Vec<String> = self.custom.iter().map(|f| normalize(&f.name)).collect();

        let predefined = predefined::foods()
            .iter()
            .filter(|f| {
                let n = normalize(f.name());
                n.contains(&q) && !shadowed.contains(&n)
            })
            .cloned();
        let custom = self
            .custom
            .iter()
            .filter(|f| normalize(&f.name).contains(&q))
            .map(|f| FoodOption::Custom { food: f.clone() });

        predefined.chain(custom).collect()
    }
}
