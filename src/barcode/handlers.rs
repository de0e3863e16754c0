use axum::{http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use super::dto::BarcodeReport;
use super::scanner::{oneshot_scanner, resolve_scan, ScanError, ScanOutcome};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/barcode", post(report_barcode))
}

/// POST /barcode { code } | { error }
#[instrument]
pub async fn report_barcode(
    Json(body): Json<BarcodeReport>,
) -> Result<Json<ScanOutcome>, (StatusCode, String)> {
    let (tx, scanner) = oneshot_scanner();
    match (body.code, body.error) {
        (Some(code), _) => tx.detected(code),
        (None, Some(reason)) => tx.failed(reason),
        (None, None) => {
            return Err((StatusCode::BAD_REQUEST, "code or error is required".into()));
        }
    }
    resolve_scan(&scanner).await.map(Json).map_err(scan_rejection)
}

fn scan_rejection(e: ScanError) -> (StatusCode, String) {
    match e {
        ScanError::InvalidCode(_) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
        ScanError::Device(_) | ScanError::Cancelled => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
    }
}
