use serde::{Deserialize, Serialize};
use time::Date;

use crate::dates::iso_date;
use crate::meals::Meal;
use crate::nutrition::goals::{NutritionGoals, Progress};
use crate::nutrition::Totals;

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WeeklyQuery {
    pub end: Option<String>,
    pub days: Option<usize>,
}

/// One day's meals with their totals measured against the goals.
#[derive(Debug, Serialize)]
pub struct DailySummary {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub meals: Vec<Meal>,
    pub totals: Totals,
    pub goals: NutritionGoals,
    pub progress: Progress,
}
