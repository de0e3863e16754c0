use serde::Deserialize;

/// What the camera client reports: a decoded code, or the reason it failed.
#[derive(Debug, Deserialize)]
pub struct BarcodeReport {
    pub code: Option<String>,
    pub error: Option<String>,
}
