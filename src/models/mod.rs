//! Data models for the herb reference dataset.
//!
//! - `Herb`: one herb entry, keyed by its Chinese name
//! - `filter`: the search-as-you-type predicate over a herb list

pub mod herb;

pub use herb::{filter, Herb};
