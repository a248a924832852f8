//! Comparison and summary views over rankings

use crate::rank::{top_names, RankedItem};
use ahash::AHashSet;
use buildcraft_catalog::{Category, ItemRecord};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Set view of two top-k recommendation lists.
///
/// Sets are sorted only so output is stable; membership is all that matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub common: BTreeSet<String>,
    pub unique_a: BTreeSet<String>,
    pub unique_b: BTreeSet<String>,
}

/// Intersection and differences of the top-k names of two rankings
pub fn compare(ranked_a: &[RankedItem], ranked_b: &[RankedItem], top_k: usize) -> Comparison {
    let top_a: AHashSet<&str> = top_names(ranked_a, top_k).collect();
    let top_b: AHashSet<&str> = top_names(ranked_b, top_k).collect();

    Comparison {
        common: top_a.intersection(&top_b).map(|n| n.to_string()).collect(),
        unique_a: top_a.difference(&top_b).map(|n| n.to_string()).collect(),
        unique_b: top_b.difference(&top_a).map(|n| n.to_string()).collect(),
    }
}

/// Aggregate view of a recommendation list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSummary {
    pub count: usize,
    pub mean_score: f32,
    pub max_score: f32,
    pub min_score: f32,
    pub total_cost: i64,
    pub mean_cost: f32,
    /// Item count per category, in feature schema order
    pub categories: Vec<(Category, usize)>,
    /// Item count per stat label, most common first
    pub stats: Vec<(&'static str, usize)>,
}

/// Summarize `(score, item)` pairs.
///
/// An empty input yields zero counts and zero scores.
pub fn summarize<'a, I>(entries: I) -> RecommendationSummary
where
    I: IntoIterator<Item = (f32, &'a ItemRecord)>,
{
    let mut count = 0usize;
    let mut score_sum = 0.0f32;
    let mut max_score = f32::NEG_INFINITY;
    let mut min_score = f32::INFINITY;
    let mut total_cost = 0i64;
    let mut category_counts = [0usize; 4];
    let mut stat_counts: BTreeMap<&'static str, usize> = BTreeMap::new();

    for (score, item) in entries {
        count += 1;
        score_sum += score;
        max_score = max_score.max(score);
        min_score = min_score.min(score);
        total_cost += item.cost;
        category_counts[item.category as usize] += 1;
        for label in &item.stats {
            *stat_counts.entry(*label).or_default() += 1;
        }
    }

    if count == 0 {
        max_score = 0.0;
        min_score = 0.0;
    }

    let mut stats: Vec<(&'static str, usize)> = stat_counts.into_iter().collect();
    // stable: ties stay alphabetical
    stats.sort_by(|a, b| b.1.cmp(&a.1));

    RecommendationSummary {
        count,
        mean_score: if count == 0 { 0.0 } else { score_sum / count as f32 },
        max_score,
        min_score,
        total_cost,
        mean_cost: if count == 0 { 0.0 } else { total_cost as f32 / count as f32 },
        categories: Category::ALL
            .into_iter()
            .map(|c| (c, category_counts[c as usize]))
            .collect(),
        stats,
    }
}
