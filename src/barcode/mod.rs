mod dto;
pub mod handlers;
pub mod scanner;

use crate::state::AppState;
use axum::Router;

pub use scanner::{oneshot_scanner, resolve_scan, ScanError, ScanOutcome, Scanner};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
