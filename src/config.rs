use std::path::PathBuf;

use anyhow::Context;
use time::macros::format_description;
use time::UtcOffset;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    /// Offset that defines calendar days for filtering, grouping and new meals.
    pub utc_offset: UtcOffset,
    pub stats_window_days: usize,
}

impl AppConfig {
    /// Reads the environment. Call before any worker thread is spawned: the
    /// local offset cannot be detected reliably from a multi-threaded process.
    pub fn from_env() -> anyhow::Result<Self> {
        let utc_offset = match std::env::var("APP_UTC_OFFSET") {
            Ok(v) => parse_offset(&v)?,
            Err(_) => UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        };
        Ok(Self {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: std::env::var("APP_PORT")
                .ok()
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("APP_PORT")?
                .unwrap_or(8080),
            utc_offset,
            stats_window_days: parse_window(std::env::var("STATS_WINDOW_DAYS").ok().as_deref())?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Days covered by weekly stats; 7 when unset.
pub fn parse_window(raw: Option<&str>) -> anyhow::Result<usize> {
    let Some(raw) = raw else {
        return Ok(7);
    };
    let days = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("STATS_WINDOW_DAYS {raw:?}, expected a positive number"))?;
    anyhow::ensure!(days > 0, "STATS_WINDOW_DAYS must be at least 1");
    Ok(days)
}

/// Accepts `Z`, `UTC` or `±HH:MM`.
pub fn parse_offset(s: &str) -> anyhow::Result<UtcOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }
    UtcOffset::parse(s, format_description!("[offset_hour sign:mandatory]:[offset_minute]"))
        .with_context(|| format!("APP_UTC_OFFSET {s:?}, expected +HH:MM"))
}
