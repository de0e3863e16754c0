pub mod handlers;

use crate::state::AppState;
use axum::Router;

pub use crate::nutrition::goals::NutritionGoals;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
