//! herbcache - offline-first storage for a herbal medicine reference dataset.
//!
//! The dataset is a single static JSON document. On the first run per
//! profile the coordinator fetches it, bulk-writes it into a local keyed
//! store, and records a persistent flag; every later run serves reads from
//! the store with no network access. There is no delta sync and no cache
//! invalidation: this is deliberately a fetch-once, cache-forever pattern.
//!
//! ```no_run
//! use herbcache::{filter, Config, ImportCoordinator};
//!
//! # async fn demo() -> Result<(), herbcache::ImportError> {
//! let config = Config {
//!     dataset_url: Some("https://example.org/herbs.json".to_string()),
//! };
//! let coordinator = ImportCoordinator::from_config(&config)?;
//! let herbs = coordinator.run().await?;
//! let hits = filter(&herbs, "ginseng");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod models;
pub mod store;

pub use api::{DatasetClient, DatasetSource};
pub use config::Config;
pub use coordinator::{ImportCoordinator, ImportFlag};
pub use error::ImportError;
pub use models::{filter, Herb};
pub use store::HerbStore;
