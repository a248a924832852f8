//! Similarity ranker
//!
//! Scores a query vector against the whole item matrix in one batch and
//! orders the items by descending cosine similarity.

use buildcraft_core::{FeatureMatrix, FeatureVector, Result};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;

/// One row of a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    /// Item display name (matrix row label)
    pub name: String,
    /// Cosine similarity to the query
    pub score: f32,
    /// Row index in the item matrix, i.e. catalog-load position
    #[serde(skip)]
    pub row: usize,
}

/// Rank every row of `matrix` against `query`.
///
/// The result always has one entry per row. Equal scores keep matrix row
/// order, since the sort is stable.
pub fn rank(query: &FeatureVector, matrix: &FeatureMatrix) -> Result<Vec<RankedItem>> {
    let scores = matrix.cosine_scores(query)?;

    let mut ranked: Vec<RankedItem> = matrix
        .labels()
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(row, (name, score))| RankedItem {
            name: name.clone(),
            score,
            row,
        })
        .collect();

    ranked.sort_by_key(|item| Reverse(OrderedFloat(item.score)));
    Ok(ranked)
}

/// Names of the first `top_k` entries of a ranking
pub fn top_names(ranked: &[RankedItem], top_k: usize) -> impl Iterator<Item = &str> {
    ranked.iter().take(top_k).map(|item| item.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[(&str, Vec<f32>)]) -> FeatureMatrix {
        let mut m = FeatureMatrix::new(rows[0].1.len());
        for (name, row) in rows {
            m.push(*name, &FeatureVector::new(row.clone())).unwrap();
        }
        m
    }

    #[test]
    fn test_rank_orders_by_score() {
        let m = matrix(&[
            ("far", vec![0.0, 0.0, 1.0]),
            ("exact", vec![1.0, 1.0, 0.0]),
            ("near", vec![1.0, 0.0, 0.0]),
        ]);
        let ranked = rank(&FeatureVector::new(vec![1.0, 1.0, 0.0]), &m).unwrap();

        let names: Vec<&str> = top_names(&ranked, 10).collect();
        assert_eq!(names, vec!["exact", "near", "far"]);
        assert!((ranked[0].score - 1.0).abs() < 1e-6);
        assert_eq!(ranked[0].row, 1);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_ties_keep_load_order() {
        let m = matrix(&[
            ("b-first", vec![1.0, 0.0]),
            ("low", vec![0.0, 1.0]),
            ("a-second", vec![1.0, 0.0]),
            ("c-third", vec![2.0, 0.0]),
        ]);
        let ranked = rank(&FeatureVector::new(vec![1.0, 0.0]), &m).unwrap();
        let names: Vec<&str> = top_names(&ranked, 4).collect();
        assert_eq!(names, vec!["b-first", "a-second", "c-third", "low"]);
    }

    #[test]
    fn test_positive_scaling_keeps_order() {
        let m = matrix(&[
            ("a", vec![1.0, 0.0, 0.5]),
            ("b", vec![0.0, 1.0, 0.2]),
            ("c", vec![1.0, 1.0, 1.0]),
            ("d", vec![0.3, 0.1, 0.0]),
        ]);
        let query = FeatureVector::new(vec![3.0, 1.0, 0.6]);
        let base: Vec<String> = rank(&query, &m).unwrap().into_iter().map(|r| r.name).collect();

        for factor in [0.01f32, 0.5, 2.0, 1000.0] {
            let scaled: Vec<String> = rank(&(&query * factor), &m)
                .unwrap()
                .into_iter()
                .map(|r| r.name)
                .collect();
            assert_eq!(base, scaled);
        }
    }

    #[test]
    fn test_rank_length_and_bounds() {
        let m = matrix(&[
            ("a", vec![1.0, 0.0]),
            ("b", vec![0.0, 0.0]),
            ("c", vec![0.5, 0.5]),
        ]);
        let ranked = rank(&FeatureVector::new(vec![0.2, 0.9]), &m).unwrap();
        assert_eq!(ranked.len(), m.rows());
        assert!(ranked.iter().all(|r| (-1.0..=1.0).contains(&r.score)));
    }

    #[test]
    fn test_dimension_mismatch_is_error() {
        let m = matrix(&[("a", vec![1.0, 0.0])]);
        assert!(rank(&FeatureVector::new(vec![1.0]), &m).is_err());
    }
}
