use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::nutrition::{Nutrients, Totals};

/// Logged meal record, persisted as-is under the `meals` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,                 // unique meal ID
    pub name: String,               // display name, e.g. "Banane (120g)"
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
    #[serde(rename = "date", with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,  // fixed at creation to the selected day
}

impl Meal {
    pub fn new(name: impl Into<String>, totals: Totals, timestamp: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            calories: totals.calories,
            proteins: totals.proteins,
            carbs: totals.carbs,
            fats: totals.fats,
            timestamp,
        }
    }
}

impl Nutrients for Meal {
    fn nutrients(&self) -> Totals {
        Totals::new(self.calories, self.proteins, self.carbs, self.fats)
    }
}
