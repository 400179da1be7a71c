//! Persistent keyed store for the herb dataset.
//!
//! One JSON envelope on disk, records keyed by the herb's Chinese name,
//! schema versioned so a change to the record shape can bump it. The bulk
//! write stages the merged map into a temporary file and renames it over the
//! store file; the rename is the commit point.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ImportError;
use crate::models::Herb;

/// Store file name, named for the dataset it holds.
const STORE_FILE: &str = "herbs.json";

/// Staging file for the bulk write. Lives in the store directory so the
/// commit rename never crosses a filesystem boundary.
const STORE_TMP_FILE: &str = "herbs.json.tmp";

/// On-disk schema version. Bump if the `Herb` shape changes.
const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreEnvelope {
    schema_version: u32,
    records: BTreeMap<String, Herb>,
}

impl StoreEnvelope {
    fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            records: BTreeMap::new(),
        }
    }
}

/// Handle to the open store.
#[derive(Debug)]
pub struct HerbStore {
    dir: PathBuf,
}

impl HerbStore {
    /// Open the store rooted at `dir`, creating the directory on first use.
    ///
    /// Idempotent: reopening an existing store validates its schema version
    /// and otherwise leaves it untouched. The store file itself appears with
    /// the first bulk write.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ImportError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| ImportError::StoreUnavailable(format!("{}: {}", dir.display(), e)))?;

        let store = Self { dir };
        if store.store_path().exists() {
            let envelope = store
                .load_envelope()
                .map_err(ImportError::StoreUnavailable)?;
            if envelope.schema_version != SCHEMA_VERSION {
                return Err(ImportError::StoreUnavailable(format!(
                    "schema version {} on disk, expected {}",
                    envelope.schema_version, SCHEMA_VERSION
                )));
            }
        }

        debug!(dir = %store.dir.display(), "herb store opened");
        Ok(store)
    }

    /// Bulk upsert of `herbs` into the current contents, one atomic commit.
    ///
    /// Every record is written, replacing any stored record with the same
    /// key; duplicate keys within the batch resolve last-write-wins. A
    /// record with an empty primary key aborts the whole batch before
    /// anything is staged. Failures leave the prior contents fully intact.
    pub fn write_all(&self, herbs: &[Herb]) -> Result<(), ImportError> {
        let mut envelope = self.load_envelope().map_err(ImportError::WriteFailed)?;

        for herb in herbs {
            if herb.name.is_empty() {
                return Err(ImportError::WriteFailed(
                    "record with empty primary key in batch".to_string(),
                ));
            }
            envelope.records.insert(herb.name.clone(), herb.clone());
        }

        let contents = serde_json::to_string_pretty(&envelope)
            .map_err(|e| ImportError::WriteFailed(e.to_string()))?;

        let tmp = self.dir.join(STORE_TMP_FILE);
        fs::write(&tmp, contents)
            .map_err(|e| ImportError::WriteFailed(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, self.store_path())
            .map_err(|e| ImportError::WriteFailed(e.to_string()))?;

        debug!(batch = herbs.len(), total = envelope.records.len(), "bulk write committed");
        Ok(())
    }

    /// Read back every stored record, in no particular order.
    ///
    /// A store that was opened but never written reads back empty. Never
    /// returns a partial set.
    pub fn read_all(&self) -> Result<Vec<Herb>, ImportError> {
        let envelope = self.load_envelope().map_err(ImportError::ReadFailed)?;
        Ok(envelope.records.into_values().collect())
    }

    fn store_path(&self) -> PathBuf {
        self.dir.join(STORE_FILE)
    }

    fn load_envelope(&self) -> Result<StoreEnvelope, String> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(StoreEnvelope::empty());
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
        serde_json::from_str(&contents).map_err(|e| format!("{}: {}", path.display(), e))
    }
}
