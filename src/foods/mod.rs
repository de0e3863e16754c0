pub mod catalog;
mod dto;
pub mod handlers;
pub mod predefined;

use crate::state::AppState;
use axum::Router;

pub use catalog::{FoodCatalog, FoodOption, FoodRecord};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
