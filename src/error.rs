use thiserror::Error;

/// Errors surfaced by the import pipeline.
///
/// All four are fatal for a single run; the only retry mechanism is running
/// the coordinator again. `FetchFailed` and `WriteFailed` leave the import
/// flag unset, so the next run repeats the whole import.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The persistence layer cannot be opened or created.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// Network error or malformed payload during the one-time dataset fetch.
    #[error("dataset fetch failed: {0}")]
    FetchFailed(String),

    /// The bulk write transaction aborted; nothing was committed.
    #[error("bulk write failed: {0}")]
    WriteFailed(String),

    /// The store could not be read back on the already-imported path.
    #[error("store read failed: {0}")]
    ReadFailed(String),
}
