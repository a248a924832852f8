//! # buildcraft Similarity
//!
//! Feature encoding and cosine ranking for item recommendations.
//!
//! Items and champion queries are encoded into one fixed 21-dimensional
//! feature space, so a single cosine similarity tells how well an item fits
//! what a champion wants in a given game phase.
//!
//! ## Features
//!
//! - **Feature Schema**: Fixed slot layout for roles, phases, categories, playstyles and cost
//! - **Encoder**: Multi-hot item vectors and preference-weighted query vectors
//! - **Batch Ranking**: One pass over the item matrix, stable descending order
//! - **Explainability**: Per-axis share of each score
//! - **Comparison**: Set views and summaries over rankings
//!
//! ## Example
//!
//! ```rust
//! use buildcraft_catalog::{normalize_character, normalize_item, GamePhase, RawChampion, RawItem};
//! use buildcraft_similarity::{build_item_matrix, encode_query, rank};
//! use serde_json::json;
//!
//! let ahri = normalize_character(RawChampion::from_value(&json!({
//!     "id": "Ahri", "name": "Ahri", "title": "the Nine-Tailed Fox",
//!     "tags": ["Mage", "Assassin"],
//!     "info": {"attack": 3, "defense": 4, "magic": 8, "difficulty": 5}
//! })).unwrap());
//!
//! let items: Vec<_> = [
//!     ("3089", json!({"name": "Rabadon's Deathcap", "gold": {"total": 3600},
//!                     "stats": {"FlatMagicDamageMod": 130}})),
//!     ("3075", json!({"name": "Thornmail", "gold": {"total": 2450},
//!                     "stats": {"FlatHPPoolMod": 350, "FlatArmorMod": 60}})),
//! ]
//! .iter()
//! .filter_map(|(id, v)| normalize_item(RawItem::from_value(id, v).unwrap()))
//! .collect();
//!
//! let matrix = build_item_matrix(&items).unwrap();
//! let ranked = rank(&encode_query(&ahri, GamePhase::Late), &matrix).unwrap();
//! assert_eq!(ranked[0].name, "Rabadon's Deathcap");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Items     │────>│  Encoder    │────>│   Feature   │
//! │  (records)  │     │ (item→v)    │     │   Matrix    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//! ┌─────────────┐     ┌─────────────┐            │
//! │  Champion   │────>│  Encoder    │──┐         │
//! │  + phase    │     │ (query→v)   │  │         │
//! └─────────────┘     └─────────────┘  v         v
//!                               ┌─────────────────────┐
//!                               │       Ranker        │
//!                               │  (batch cosine)     │
//!                               └─────────────────────┘
//!                                         │
//!                               ┌─────────────────────┐
//!                               │ Explain / Compare   │
//!                               └─────────────────────┘
//! ```

pub mod compare;
pub mod encoder;
pub mod explain;
pub mod rank;
pub mod schema;

// Re-export main types for convenience
pub use compare::{compare, summarize, Comparison, RecommendationSummary};
pub use encoder::{
    build_item_matrix, encode_item, encode_query, encode_query_str, phase_cost_target,
    COST_SCALE,
};
pub use explain::{explain, ScoreBreakdown};
pub use rank::{rank, top_names, RankedItem};
pub use schema::{FeatureSchema, Segment};
