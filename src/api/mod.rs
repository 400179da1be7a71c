//! Remote dataset retrieval.

pub mod client;

pub use client::{DatasetClient, DatasetSource};
