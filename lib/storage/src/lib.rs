//! # buildcraft Storage
//!
//! Catalog storage for buildcraft: where the raw records come from and how
//! the normalized catalog is held between requests.
//!
//! - [`DataDragonSource`] - fetches `champion.json` and `item.json` from Data Dragon
//! - [`StaticSource`] - serves records from memory or local files
//! - [`CatalogSnapshot`] - immutable, versioned result of one load
//! - [`CatalogManager`] - swaps snapshots on reload and answers queries

pub mod manager;
pub mod snapshot;
pub mod source;

pub use manager::{CatalogManager, CatalogStats, LoadSummary};
pub use snapshot::{CatalogSnapshot, Recommendation};
pub use source::{CatalogSource, DataDragonSource, SourceConfig, StaticSource};
