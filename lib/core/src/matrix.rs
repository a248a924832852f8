use crate::{Error, FeatureVector, Result};
use rayon::prelude::*;
use serde::Serialize;

/// Rows below this count are scored on the calling thread
const PARALLEL_THRESHOLD: usize = 512;

/// Row-major matrix of labelled feature vectors.
///
/// Rows are stored contiguously and each row's norm is computed once at
/// insertion, so scoring a query is one dot product per row. Labels and rows
/// are always the same length and in the same order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureMatrix {
    dim: usize,
    data: Vec<f32>,
    norms: Vec<f32>,
    labels: Vec<String>,
}

impl FeatureMatrix {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            data: Vec::new(),
            norms: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn with_capacity(dim: usize, rows: usize) -> Self {
        Self {
            dim,
            data: Vec::with_capacity(dim * rows),
            norms: Vec::with_capacity(rows),
            labels: Vec::with_capacity(rows),
        }
    }

    /// Append a labelled row
    pub fn push(&mut self, label: impl Into<String>, row: &FeatureVector) -> Result<()> {
        if row.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: row.dim(),
            });
        }

        self.data.extend_from_slice(row.as_slice());
        self.norms.push(row.norm());
        self.labels.push(label.into());
        Ok(())
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        let start = index.checked_mul(self.dim)?;
        self.data.get(start..start + self.dim)
    }

    /// Cosine similarity of `query` against every row, in row order.
    ///
    /// A zero-norm query or row scores 0.0.
    pub fn cosine_scores(&self, query: &FeatureVector) -> Result<Vec<f32>> {
        if query.dim() != self.dim {
            return Err(Error::InvalidDimension {
                expected: self.dim,
                actual: query.dim(),
            });
        }

        let query_norm = query.norm();
        if query_norm == 0.0 || self.dim == 0 {
            return Ok(vec![0.0; self.rows()]);
        }

        let q = query.as_slice();
        let score = |(row, &row_norm): (&[f32], &f32)| {
            if row_norm == 0.0 {
                0.0
            } else {
                crate::simd::dot_product_simd(row, q) / (row_norm * query_norm)
            }
        };

        let scores = if self.rows() >= PARALLEL_THRESHOLD {
            self.data
                .par_chunks_exact(self.dim)
                .zip(self.norms.par_iter())
                .map(score)
                .collect()
        } else {
            self.data
                .chunks_exact(self.dim)
                .zip(self.norms.iter())
                .map(score)
                .collect()
        };

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureMatrix {
        let mut m = FeatureMatrix::new(3);
        m.push("a", &FeatureVector::new(vec![1.0, 0.0, 0.0])).unwrap();
        m.push("b", &FeatureVector::new(vec![0.0, 1.0, 0.0])).unwrap();
        m.push("zero", &FeatureVector::zeros(3)).unwrap();
        m
    }

    #[test]
    fn test_push_rejects_wrong_dimension() {
        let mut m = FeatureMatrix::new(3);
        let err = m.push("x", &FeatureVector::new(vec![1.0])).unwrap_err();
        assert_eq!(err, Error::InvalidDimension { expected: 3, actual: 1 });
        assert!(m.is_empty());
    }

    #[test]
    fn test_labels_follow_rows() {
        let m = sample();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.labels(), ["a", "b", "zero"]);
        assert_eq!(m.row(1), Some(&[0.0, 1.0, 0.0][..]));
        assert_eq!(m.row(3), None);
    }

    #[test]
    fn test_cosine_scores() {
        let m = sample();
        let scores = m.cosine_scores(&FeatureVector::new(vec![1.0, 1.0, 0.0])).unwrap();
        assert_eq!(scores.len(), 3);
        assert!((scores[0] - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!((scores[1] - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_zero_query() {
        let m = sample();
        let scores = m.cosine_scores(&FeatureVector::zeros(3)).unwrap();
        assert_eq!(scores, vec![0.0; 3]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut m = FeatureMatrix::new(4);
        for i in 0..(PARALLEL_THRESHOLD + 10) {
            let v = FeatureVector::new(vec![(i % 3) as f32, 1.0, (i % 7) as f32, 0.5]);
            m.push(format!("row{i}"), &v).unwrap();
        }
        let q = FeatureVector::new(vec![1.0, 2.0, 0.0, 1.0]);
        let scores = m.cosine_scores(&q).unwrap();
        assert_eq!(scores.len(), m.rows());
        for (i, s) in scores.iter().enumerate() {
            let row = FeatureVector::new(m.row(i).unwrap().to_vec());
            assert!((row.cosine_similarity(&q) - s).abs() < 1e-5);
        }
    }
}
