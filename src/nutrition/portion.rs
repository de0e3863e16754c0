use crate::foods::FoodRecord;
use crate::nutrition::Totals;

/// Scales a per-100g food record to `grams`, rounding each macro to the nearest
/// integer. Zero grams yields zero totals.
pub fn scale(food: &FoodRecord, grams: f64) -> Totals {
    let ratio = grams / 100.0;
    food.per_100g().scaled(ratio).rounded()
}
