use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use time::Month;
use tracing::{debug, instrument};

use super::dto::{DailyQuery, DailySummary, WeeklyQuery};
use crate::error::{reject, NutritionError};
use crate::nutrition::aggregate::{self, CalendarDay, WeeklyStats};
use crate::nutrition::goals::progress;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/summary/daily", get(daily_summary))
        .route("/summary/weekly", get(weekly_summary))
        .route("/summary/calendar/:year/:month", get(calendar))
}

/// GET /summary/daily[?date=YYYY-MM-DD]
#[instrument(skip(state))]
pub async fn daily_summary(
    State(state): State<AppState>,
    Query(q): Query<DailyQuery>,
) -> Result<Json<DailySummary>, (StatusCode, String)> {
    let date = state.day_or_today(q.date.as_deref()).map_err(reject)?;
    let store = state.store();
    let meals: Vec<_> = aggregate::filter_by_day(store.meals(), date, state.offset())
        .into_iter()
        .cloned()
        .collect();
    let totals = aggregate::sum(&meals);
    let goals = *store.goals();
    Ok(Json(DailySummary {
        date,
        progress: progress(&totals, &goals),
        meals,
        totals,
        goals,
    }))
}

/// GET /summary/weekly[?end=YYYY-MM-DD&days=N]
#[instrument(skip(state))]
pub async fn weekly_summary(
    State(state): State<AppState>,
    Query(q): Query<WeeklyQuery>,
) -> Result<Json<WeeklyStats>, (StatusCode, String)> {
    let end = state.day_or_today(q.end.as_deref()).map_err(reject)?;
    let window = q.days.unwrap_or(state.config.stats_window_days);
    if window == 0 {
        return Err(reject(NutritionError::validation("days must be at least 1")));
    }
    let stats = aggregate::weekly(state.store().meals(), end, window, state.offset());
    debug!(logged_days = stats.days.len(), "weekly stats");
    Ok(Json(stats))
}

/// GET /summary/calendar/:year/:month
#[instrument(skip(state))]
pub async fn calendar(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u8)>,
) -> Result<Json<Vec<CalendarDay>>, (StatusCode, String)> {
    let month = Month::try_from(month)
        .map_err(|_| reject(NutritionError::validation(format!("invalid month {month}"))))?;
    let days = aggregate::month_calendar(state.store().meals(), year, month, state.offset());
    Ok(Json(days))
}
