//! Versioned catalog snapshots
//!
//! A snapshot bundles everything one catalog load produced: champion
//! profiles, item records and the item feature matrix. Snapshots are never
//! mutated; a reload builds a new one and swaps it in whole.

use ahash::AHashMap;
use buildcraft_catalog::{CharacterProfile, GamePhase, ItemRecord, NormalizeReport, NormalizedCatalog};
use buildcraft_core::{Error, FeatureMatrix, Result};
use buildcraft_similarity::{
    build_item_matrix, compare, encode_item, encode_query, explain, rank, summarize, Comparison,
    FeatureSchema, RankedItem, RecommendationSummary, ScoreBreakdown,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// One recommended item with its score and full record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub score: f32,
    pub item: ItemRecord,
    pub breakdown: ScoreBreakdown,
}

/// Name lookup with a case-insensitive fallback
#[derive(Debug, Clone, Default)]
struct NameIndex {
    exact: AHashMap<String, usize>,
    folded: AHashMap<String, usize>,
}

impl NameIndex {
    fn insert(&mut self, name: &str, position: usize) {
        self.exact.insert(name.to_string(), position);
        self.folded.insert(name.to_lowercase(), position);
    }

    fn get(&self, name: &str) -> Option<usize> {
        self.exact
            .get(name)
            .or_else(|| self.folded.get(&name.trim().to_lowercase()))
            .copied()
    }
}

/// Append `record`, or replace the earlier record with the same name in place
fn upsert_by_name<T>(records: &mut Vec<T>, index: &mut NameIndex, name: &str, record: T) {
    match index.exact.get(name) {
        Some(&position) => {
            debug!("Duplicate name {}, keeping the later record", name);
            records[position] = record;
        }
        None => {
            index.insert(name, records.len());
            records.push(record);
        }
    }
}

/// Immutable result of one catalog load
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    generation: u64,
    version: String,
    loaded_at: DateTime<Utc>,
    characters: Vec<CharacterProfile>,
    character_index: NameIndex,
    items: Vec<ItemRecord>,
    item_index: NameIndex,
    matrix: FeatureMatrix,
    report: NormalizeReport,
}

impl CatalogSnapshot {
    /// Valid catalog with no records
    pub fn empty(generation: u64) -> Self {
        Self {
            generation,
            version: String::new(),
            loaded_at: Utc::now(),
            characters: Vec::new(),
            character_index: NameIndex::default(),
            items: Vec::new(),
            item_index: NameIndex::default(),
            matrix: FeatureMatrix::new(FeatureSchema::DIM),
            report: NormalizeReport::default(),
        }
    }

    /// Index normalized records and encode the item matrix.
    ///
    /// Records are keyed by display name; a later duplicate replaces the
    /// earlier record but keeps its position.
    pub fn build(generation: u64, version: impl Into<String>, catalog: NormalizedCatalog) -> Result<Self> {
        let mut snapshot = Self::empty(generation);
        snapshot.version = version.into();

        for profile in catalog.characters {
            let name = profile.name.clone();
            upsert_by_name(&mut snapshot.characters, &mut snapshot.character_index, &name, profile);
        }
        for item in catalog.items {
            let name = item.name.clone();
            upsert_by_name(&mut snapshot.items, &mut snapshot.item_index, &name, item);
        }

        snapshot.matrix = build_item_matrix(&snapshot.items)?;
        snapshot.report = NormalizeReport {
            characters: snapshot.characters.len(),
            items: snapshot.items.len(),
            ..catalog.report
        };
        Ok(snapshot)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn report(&self) -> NormalizeReport {
        self.report
    }

    pub fn characters(&self) -> &[CharacterProfile] {
        &self.characters
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn matrix(&self) -> &FeatureMatrix {
        &self.matrix
    }

    /// Exact name match, then a trimmed case-insensitive one. Partial names
    /// are `NotFound`.
    pub fn character(&self, name: &str) -> Result<&CharacterProfile> {
        self.character_index
            .get(name)
            .map(|i| &self.characters[i])
            .ok_or_else(|| Error::NotFound(format!("champion '{}'", name)))
    }

    pub fn item(&self, name: &str) -> Result<&ItemRecord> {
        self.item_index
            .get(name)
            .map(|i| &self.items[i])
            .ok_or_else(|| Error::NotFound(format!("item '{}'", name)))
    }

    /// Full ranking of the catalog for a champion and phase
    pub fn rank_for(&self, name: &str, phase: GamePhase) -> Result<Vec<RankedItem>> {
        let character = self.character(name)?;
        rank(&encode_query(character, phase), &self.matrix)
    }

    /// Top `top_k` items for a champion in `phase`.
    ///
    /// The phase is validated before the champion is looked up.
    pub fn recommend(&self, name: &str, phase: &str, top_k: usize) -> Result<Vec<Recommendation>> {
        let phase: GamePhase = phase.parse()?;
        let character = self.character(name)?;
        let query = encode_query(character, phase);

        let recommendations = rank(&query, &self.matrix)?
            .into_iter()
            .take(top_k)
            .map(|ranked| {
                let item = &self.items[ranked.row];
                Recommendation {
                    breakdown: explain(&query, &encode_item(item)),
                    name: ranked.name,
                    score: ranked.score,
                    item: item.clone(),
                }
            })
            .collect();
        Ok(recommendations)
    }

    pub fn compare(&self, name_a: &str, name_b: &str, phase: &str, top_k: usize) -> Result<Comparison> {
        let phase: GamePhase = phase.parse()?;
        let ranked_a = self.rank_for(name_a, phase)?;
        let ranked_b = self.rank_for(name_b, phase)?;
        Ok(compare(&ranked_a, &ranked_b, top_k))
    }

    pub fn summarize(&self, name: &str, phase: &str, top_k: usize) -> Result<RecommendationSummary> {
        let recommendations = self.recommend(name, phase, top_k)?;
        Ok(summarize(recommendations.iter().map(|r| (r.score, &r.item))))
    }
}
