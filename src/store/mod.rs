//! Persistent local storage for the herb dataset.

pub mod manager;

pub use manager::HerbStore;
