use std::sync::Mutex;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::foods::FoodRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
    #[error("scan cancelled before a code was read")]
    Cancelled,

    #[error("camera error: {0}")]
    Device(String),

    #[error("invalid barcode '{0}'")]
    InvalidCode(String),
}

/// Barcode reader. `scan` resolves once, with the decoded code or an error.
#[async_trait]
pub trait Scanner: Send + Sync {
    async fn scan(&self) -> Result<String, ScanError>;
}

type ScanResult = Result<String, ScanError>;

/// Device side of a [`OneshotScanner`].
#[derive(Debug)]
pub struct ScanSender {
    tx: oneshot::Sender<ScanResult>,
}

impl ScanSender {
    pub fn detected(self, code: impl Into<String>) {
        if self.tx.send(Ok(code.into())).is_err() {
            debug!("scan result dropped; nobody is waiting");
        }
    }

    pub fn failed(self, reason: impl Into<String>) {
        if self.tx.send(Err(ScanError::Device(reason.into()))).is_err() {
            debug!("scan error dropped; nobody is waiting");
        }
    }
}

/// Single-shot scanner fed by a [`ScanSender`]. A second `scan` reports `Cancelled`.
#[derive(Debug)]
pub struct OneshotScanner {
    rx: Mutex<Option<oneshot::Receiver<ScanResult>>>,
}

pub fn oneshot_scanner() -> (ScanSender, OneshotScanner) {
    let (tx, rx) = oneshot::channel();
    (
        ScanSender { tx },
        OneshotScanner {
            rx: Mutex::new(Some(rx)),
        },
    )
}

#[async_trait]
impl Scanner for OneshotScanner {
    async fn scan(&self) -> Result<String, ScanError> {
        let rx = self
            .rx
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .take()
            .ok_or(ScanError::Cancelled)?;
        rx.await.map_err(|_| ScanError::Cancelled)?
    }
}

lazy_static! {
    static ref EAN_RE: Regex = Regex::new(r"^(\d{8}|\d{13})$").unwrap();
}

/// Accepts EAN-8 and EAN-13 codes with a correct check digit.
pub fn validate_barcode(code: &str) -> Result<String, ScanError> {
    let code = code.trim();
    if !EAN_RE.is_match(code) {
        return Err(ScanError::InvalidCode(code.to_string()));
    }
    let digits: Vec<u32> = code.chars().filter_map(|c| c.to_digit(10)).collect();
    let (payload, check) = digits.split_at(digits.len() - 1);
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d * 3 } else { *d })
        .sum();
    if (10 - sum % 10) % 10 != check[0] {
        return Err(ScanError::InvalidCode(code.to_string()));
    }
    Ok(code.to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanOutcome {
    pub code: String,
    pub food: Option<FoodRecord>,
}

/// Maps a barcode to a food record. There is no product database behind this yet,
/// so every code is logged and left unresolved.
pub fn lookup_food(code: &str) -> Option<FoodRecord> {
    info!(%code, "barcode detected; no product mapping available");
    None
}

/// Waits for the scanner, validates the code and looks it up.
pub async fn resolve_scan(scanner: &dyn Scanner) -> Result<ScanOutcome, ScanError> {
    let raw = scanner.scan().await.map_err(|e| {
        warn!(error = %e, "scan failed");
        e
    })?;
    let code = validate_barcode(&raw)?;
    let food = lookup_food(&code);
    Ok(ScanOutcome { code, food })
}

#[cfg(test)]
mod scanner_tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_validates_ean_formats_and_checksums() {
        assert_eq!(validate_barcode("4006381333931").unwrap(), "4006381333931");
        assert_eq!(validate_barcode(" 96385074 ").unwrap(), "96385074");
        assert_eq!(validate_barcode("3017620422003").unwrap(), "3017620422003");
        assert!(validate_barcode("4006381333932").is_err());
        assert!(validate_barcode("12345").is_err());
        assert!(validate_barcode("40063813339a1").is_err());
        assert!(validate_barcode("").is_err());
    }

    #[tokio::test]
    async fn test_resolves_code_delivered_later() {
        let (tx, scanner) = oneshot_scanner();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            tx.detected("96385074");
        });
        let outcome = resolve_scan(&scanner).await.unwrap();
        assert_eq!(outcome.code, "96385074");
        assert_eq!(outcome.food, None);
    }

    #[tokio::test]
    async fn test_scanner_is_single_shot() {
        let (tx, scanner) = oneshot_scanner();
        tx.detected("4006381333931");
        assert!(scanner.scan().await.is_ok());
        assert_eq!(scanner.scan().await, Err(ScanError::Cancelled));
    }

    #[tokio::test]
    async fn test_device_error_and_dropped_sender_surface_as_errors() {
        let (tx, scanner) = oneshot_scanner();
        tx.failed("camera init failed");
        assert_eq!(
            resolve_scan(&scanner).await,
            Err(ScanError::Device("camera init failed".into()))
        );

        let (tx, scanner) = oneshot_scanner();
        drop(tx);
        assert_eq!(scanner.scan().await, Err(ScanError::Cancelled));
    }

    #[tokio::test]
    async fn test_invalid_code_is_rejected_after_scan() {
        let (tx, scanner) = oneshot_scanner();
        tx.detected("not-a-code");
        assert!(matches!(
            resolve_scan(&scanner).await,
            Err(ScanError::InvalidCode(_))
        ));
    }
}
