use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, Result};
use crate::nutrition::Totals;

/// Ratio above which a macro is reported as close to its goal.
pub const NEAR_LIMIT_RATIO: f64 = 0.9;
/// Ratio above which a macro is reported as over its goal.
pub const EXCEEDED_RATIO: f64 = 1.0;

/// Daily targets. A single active instance, replaced wholesale on edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            proteins: 150.0,
            carbs: 250.0,
            fats: 65.0,
        }
    }
}

impl NutritionGoals {
    pub fn validate(&self) -> Result<()> {
        for (label, v) in [
            ("calories", self.calories),
            ("proteins", self.proteins),
            ("carbs", self.carbs),
            ("fats", self.fats),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(NutritionError::validation(format!(
                    "goal for {label} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    OnTrack,
    NearLimit,
    Exceeded,
}

impl GoalStatus {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > EXCEEDED_RATIO {
            Self::Exceeded
        } else if ratio > NEAR_LIMIT_RATIO {
            Self::NearLimit
        } else {
            Self::OnTrack
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroProgress {
    pub value: f64,
    pub goal: f64,
    /// `value / goal`; infinite (serialized as `null`) when the goal is zero.
    pub ratio: f64,
    /// Progress bar fill, capped at 100.
    pub percent: f64,
    pub status: GoalStatus,
}

impl MacroProgress {
    pub fn compute(value: f64, goal: f64) -> Self {
        let ratio = if goal == 0.0 { f64::INFINITY } else { value / goal };
        let status = if goal == 0.0 {
            GoalStatus::Exceeded
        } else {
            GoalStatus::from_ratio(ratio)
        };
        Self {
            value,
            goal,
            ratio,
            percent: (ratio * 100.0).min(100.0),
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    pub calories: MacroProgress,
    pub proteins: MacroProgress,
    pub carbs: MacroProgress,
    pub fats: MacroProgress,
}

pub fn progress(totals: &Totals, goals: &NutritionGoals) -> Progress {
    Progress {
        calories: MacroProgress::compute(totals.calories, goals.calories),
        proteins: MacroProgress::compute(totals.proteins, goals.proteins),
        carbs: MacroProgress::compute(totals.carbs, goals.carbs),
        fats: MacroProgress::compute(totals.fats, goals.fats),
    }
}
