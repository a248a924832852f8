//! # buildcraft
//!
//! A League of Legends item recommender.
//!
//! buildcraft normalizes the Data Dragon champion and item catalogs, encodes
//! items and champion preferences into one 21-dimensional feature space, and
//! ranks every item by cosine similarity to what a champion wants in a given
//! game phase.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install buildcraft
//! buildcraft serve --http-port 8080
//! ```
//!
//! ### From the Command Line
//!
//! ```bash
//! buildcraft recommend Ahri --phase late --top-k 5
//! buildcraft compare Ahri Jinx --phase mid
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use buildcraft::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let manager = CatalogManager::new();
//! let source = DataDragonSource::new(SourceConfig::default())?;
//! manager.load(&source).await?;
//!
//! for rec in manager.recommend("Ahri", "late", 5)? {
//!     println!("{} {:.3}", rec.name, rec.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - [`buildcraft-core`](https://docs.rs/buildcraft-core) - Errors, feature vectors, batch cosine kernel
//! - [`buildcraft-catalog`](https://docs.rs/buildcraft-catalog) - Raw records and the catalog normalizer
//! - [`buildcraft-similarity`](https://docs.rs/buildcraft-similarity) - Feature encoder, ranker, comparison
//! - [`buildcraft-storage`](https://docs.rs/buildcraft-storage) - Data Dragon source, snapshots, catalog manager
//! - [`buildcraft-api`](https://docs.rs/buildcraft-api) - REST API

// Re-export core types
pub use buildcraft_core::{Error, FeatureMatrix, FeatureVector, Result};

// Re-export catalog
pub use buildcraft_catalog::{
    Category, CharacterProfile, DamageType, GamePhase, ItemRecord, NormalizeReport, Playstyle,
    Role, Scaling,
};

// Re-export similarity
pub use buildcraft_similarity::{
    Comparison, FeatureSchema, RankedItem, RecommendationSummary, ScoreBreakdown,
};

// Re-export storage
pub use buildcraft_storage::{
    CatalogManager, CatalogSnapshot, CatalogSource, CatalogStats, DataDragonSource, LoadSummary,
    Recommendation, SourceConfig, StaticSource,
};

// Re-export API
pub use buildcraft_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CatalogManager, CatalogSource, CharacterProfile, Comparison, DataDragonSource, Error,
        GamePhase, ItemRecord, Recommendation, RecommendationSummary, Result, SourceConfig,
        StaticSource,
    };
}

/// Feature encoding and ranking primitives
pub mod similarity {
    pub use buildcraft_similarity::{
        build_item_matrix, compare, encode_item, encode_query, explain, rank, summarize,
    };
}
