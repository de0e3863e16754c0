use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use time::{Date, UtcOffset};

use crate::config::AppConfig;
use crate::dates;
use crate::error::Result;
use crate::storage::{JsonFileStore, MemoryStore, Persistence};
use crate::store::NutritionStore;

/// Shared handler state. The store is the single owner of user data; every
/// request holds the lock for one synchronous operation only.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<NutritionStore>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init(config: AppConfig) -> anyhow::Result<Self> {
        let persistence = Arc::new(JsonFileStore::new(&config.data_dir)?) as Arc<dyn Persistence>;
        tracing::info!(data_dir = %config.data_dir.display(), "using json file store");
        Ok(Self::from_parts(config, persistence))
    }

    pub fn from_parts(config: AppConfig, persistence: Arc<dyn Persistence>) -> Self {
        Self {
            store: Arc::new(Mutex::new(NutritionStore::load(persistence))),
            config: Arc::new(config),
        }
    }

    /// In-memory state at UTC, for tests.
    pub fn fake() -> Self {
        Self::fake_with(MemoryStore::new())
    }

    pub fn fake_with(persistence: MemoryStore) -> Self {
        let config = AppConfig {
            data_dir: PathBuf::from("unused"),
            host: "127.0.0.1".into(),
            port: 0,
            utc_offset: UtcOffset::UTC,
            stats_window_days: 7,
        };
        Self::from_parts(config, Arc::new(persistence))
    }

    pub fn store(&self) -> MutexGuard<'_, NutritionStore> {
        self.store.lock().unwrap_or_else(|p| p.into_inner())
    }

    pub fn offset(&self) -> UtcOffset {
        self.config.utc_offset
    }

    /// Parses an optional `YYYY-MM-DD` query value, defaulting to today.
    pub fn day_or_today(&self, date: Option<&str>) -> Result<Date> {
        match date {
            Some(d) => dates::parse_date(d),
            None => Ok(dates::today(self.offset())),
        }
    }
}
