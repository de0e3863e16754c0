//! Totals over arbitrary meal subsets.
//!
//! Every day boundary is computed from the meal timestamp converted to one local
//! offset, then compared by calendar date (year, month, day), never by a 24h window.

use std::collections::BTreeMap;

use serde::Serialize;
use time::{Date, Month, UtcOffset};
use tracing::warn;

use crate::dates::{iso_date, local_date};
use crate::meals::Meal;
use crate::nutrition::{Nutrients, Totals};

/// Elementwise sum; an empty input yields zero totals.
pub fn sum<'a, T>(items: impl IntoIterator<Item = &'a T>) -> Totals
where
    T: Nutrients + 'a,
{
    items.into_iter().map(Nutrients::nutrients).sum()
}

/// Local date of a meal. Meals whose timestamp cannot be shifted to `offset` are
/// left out of every day-based view.
fn meal_date(meal: &Meal, offset: UtcOffset) -> Option<Date> {
    let date = local_date(meal.timestamp, offset);
    if date.is_none() {
        warn!(id = %meal.id, %offset, "meal timestamp out of range at this offset; skipped");
    }
    date
}

pub fn filter_by_day(meals: &[Meal], day: Date, offset: UtcOffset) -> Vec<&Meal> {
    meals
        .iter()
        .filter(|m| meal_date(m, offset) == Some(day))
        .collect()
}

/// Meals whose local date falls in `from..=to`. Empty when `from > to`.
pub fn filter_by_range(meals: &[Meal], from: Date, to: Date, offset: UtcOffset) -> Vec<&Meal> {
    meals
        .iter()
        .filter(|m| meal_date(m, offset).is_some_and(|d| from <= d && d <= to))
        .collect()
}

/// Per-day totals in chronological order.
pub fn group_by_day<'a>(
    meals: impl IntoIterator<Item = &'a Meal>,
    offset: UtcOffset,
) -> BTreeMap<Date, Totals> {
    let mut days: BTreeMap<Date, Totals> = BTreeMap::new();
    for meal in meals {
        if let Some(date) = meal_date(meal, offset) {
            *days.entry(date).or_default() += meal.nutrients();
        }
    }
    days
}

/// Mean of per-day totals, each macro rounded after averaging. Zero days divide by one.
pub fn average<'a>(per_day: impl IntoIterator<Item = &'a Totals>) -> Totals {
    let (total, count) = per_day
        .into_iter()
        .fold((Totals::ZERO, 0usize), |(acc, n), t| (acc + *t, n + 1));
    total.divided_rounded(count.max(1) as f64)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTotals {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyStats {
    pub days: Vec<DayTotals>,
    pub average: Totals,
}

/// Statistics over the last `window` logged days up to and including `end`.
///
/// Days without meals are skipped rather than counted as zero, so the average is
/// per logged day.
pub fn weekly(meals: &[Meal], end: Date, window: usize, offset: UtcOffset) -> WeeklyStats {
    let grouped = group_by_day(meals, offset);
    let eligible: Vec<(Date, Totals)> = grouped.into_iter().filter(|(d, _)| *d <= end).collect();
    let skip = eligible.len().saturating_sub(window);
    let days: Vec<DayTotals> = eligible
        .into_iter()
        .skip(skip)
        .map(|(date, totals)| DayTotals { date, totals })
        .collect();
    let average = average(days.iter().map(|d| &d.totals));
    WeeklyStats { days, average }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    #[serde(with = "iso_date")]
    pub date: Date,
    pub meal_count: usize,
    pub totals: Totals,
}

/// Days of `year`/`month` that have at least one meal, chronologically.
pub fn month_calendar(meals: &[Meal], year: i32, month: Month, offset: UtcOffset) -> Vec<CalendarDay> {
    let mut days: BTreeMap<Date, CalendarDay> = BTreeMap::new();
    for meal in meals {
        let Some(date) = meal_date(meal, offset) else {
            continue;
        };
        if date.year() != year || date.month() != month {
            continue;
        }
        let day = days.entry(date).or_insert(CalendarDay {
            date,
            meal_count: 0,
            totals: Totals::ZERO,
        });
        day.meal_count += 1;
        day.totals += meal.nutrients();
    }
    days.into_values().collect()
}
