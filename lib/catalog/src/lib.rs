//! # buildcraft Catalog
//!
//! Normalizes raw Data Dragon champion and item records into the domain
//! records the recommender works with.
//!
//! - [`CharacterProfile`] - role, damage type, playstyle and scaling derived
//!   from a champion's tags and info scores
//! - [`ItemRecord`] - category, stat labels and suitable roles, phases and
//!   playstyles derived from an item's stats, cost and name
//!
//! Items that are boots, consumables, trinkets, gold-income items, potions,
//! wards or cheaper than 400 gold are dropped and never reach the catalog.
//!
//! ## Example
//!
//! ```rust
//! use buildcraft_catalog::{normalize_item, Category, RawItem};
//! use serde_json::json;
//!
//! let raw = RawItem::from_value("3031", &json!({
//!     "name": "Infinity Edge",
//!     "gold": {"total": 3400},
//!     "stats": {"FlatPhysicalDamageMod": 70, "FlatCritChanceMod": 0.25}
//! })).unwrap();
//!
//! let item = normalize_item(raw).unwrap();
//! assert_eq!(item.category, Category::Damage);
//! ```

pub mod model;
pub mod normalize;
pub mod raw;
pub mod rules;

pub use model::{
    Category, CharacterProfile, DamageType, GamePhase, ItemRecord, Playstyle, Role, Scaling,
};
pub use normalize::{
    normalize_catalog, normalize_character, normalize_item, NormalizeReport, NormalizedCatalog,
};
pub use raw::{RawChampion, RawItem};
