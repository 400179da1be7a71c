//! One-time import coordination.
//!
//! The coordinator decides, per run, whether to seed the store from the
//! remote dataset or to trust what the store already holds. The decision
//! hinges on a marker file whose lifecycle is independent of the store:
//! present means the one-time import already happened, absent means it has
//! not. The flag is set strictly after the bulk write commits, so a set flag
//! always reflects a store that actually holds the dataset.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::{DatasetClient, DatasetSource};
use crate::config::Config;
use crate::error::ImportError;
use crate::models::Herb;
use crate::store::HerbStore;

/// Marker file recording that the one-time import completed.
const FLAG_FILE: &str = "herbs_imported.json";

#[derive(Debug, Serialize, Deserialize)]
struct FlagBody {
    imported_at: DateTime<Utc>,
}

/// The persisted import flag.
///
/// Presence of the marker file is the whole signal; the body only records
/// when the import happened. There is no reset operation.
pub struct ImportFlag {
    path: PathBuf,
}

impl ImportFlag {
    /// Flag living alongside the store in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(FLAG_FILE),
        }
    }

    /// Whether the one-time import has completed.
    pub fn is_set(&self) -> bool {
        self.path.exists()
    }

    /// When the import completed, if the flag is set and its body is intact.
    pub fn imported_at(&self) -> Option<DateTime<Utc>> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let body: FlagBody = serde_json::from_str(&contents).ok()?;
        Some(body.imported_at)
    }

    fn set(&self) -> Result<(), ImportError> {
        let body = FlagBody {
            imported_at: Utc::now(),
        };
        let contents = serde_json::to_string_pretty(&body)
            .map_err(|e| ImportError::WriteFailed(e.to_string()))?;
        fs::write(&self.path, contents)
            .map_err(|e| ImportError::WriteFailed(format!("{}: {}", self.path.display(), e)))
    }
}

/// Drives the fetch-once, cache-forever sequence.
///
/// Store, flag, and dataset source are explicit fields rather than ambient
/// globals so tests can substitute doubles.
pub struct ImportCoordinator<S: DatasetSource> {
    store: HerbStore,
    flag: ImportFlag,
    source: S,
}

impl ImportCoordinator<DatasetClient> {
    /// Wire a coordinator from application configuration: store and flag in
    /// the data directory, dataset client pointed at the configured URL.
    pub fn from_config(config: &Config) -> Result<Self, ImportError> {
        let data_dir = config
            .data_dir()
            .map_err(|e| ImportError::StoreUnavailable(e.to_string()))?;
        let url = config
            .dataset_url
            .as_deref()
            .ok_or_else(|| ImportError::FetchFailed("no dataset URL configured".to_string()))?;

        let store = HerbStore::open(&data_dir)?;
        let flag = ImportFlag::new(&data_dir);
        let source = DatasetClient::new(url)?;
        Ok(Self::new(store, flag, source))
    }
}

impl<S: DatasetSource> ImportCoordinator<S> {
    /// Build a coordinator from an already-open store, its companion flag,
    /// and a dataset source.
    pub fn new(store: HerbStore, flag: ImportFlag, source: S) -> Self {
        Self { store, flag, source }
    }

    /// When the one-time import completed, if it has.
    pub fn imported_at(&self) -> Option<DateTime<Utc>> {
        self.flag.imported_at()
    }

    /// Run the import sequence and hand back the full record collection.
    ///
    /// First run per profile: fetch the dataset, bulk-write it to the store,
    /// then set the flag. A fetch or write failure aborts the run with the
    /// flag still unset, so the next run retries the whole import. Every run
    /// after a successful import reads straight from the store, with no
    /// network access and no re-fetch fallback if the read fails.
    pub async fn run(&self) -> Result<Vec<Herb>, ImportError> {
        if !self.flag.is_set() {
            info!("import flag unset, seeding store from remote dataset");
            let herbs = self.source.fetch().await?;
            self.store.write_all(&herbs)?;
            self.flag.set()?;
            info!(count = herbs.len(), "one-time import complete");
            return Ok(herbs);
        }

        debug!("import flag set, reading from local store");
        self.store.read_all()
    }
}
