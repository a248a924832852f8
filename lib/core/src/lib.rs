//! # buildcraft Core
//!
//! Core library for the buildcraft item recommender.
//!
//! This crate provides the numeric building blocks shared by every other
//! buildcraft crate:
//!
//! - [`FeatureVector`] - Dense feature vector with cosine similarity
//! - [`FeatureMatrix`] - Labelled row-major matrix with batch cosine scoring
//! - [`Error`] - The error taxonomy used across the workspace
//!
//! ## Example
//!
//! ```rust
//! use buildcraft_core::{FeatureMatrix, FeatureVector};
//!
//! let mut matrix = FeatureMatrix::new(3);
//! matrix.push("Long Sword", &FeatureVector::new(vec![1.0, 0.0, 0.3])).unwrap();
//! matrix.push("Cloth Armor", &FeatureVector::new(vec![0.0, 1.0, 0.1])).unwrap();
//!
//! let query = FeatureVector::new(vec![3.0, 1.0, 0.6]);
//! let scores = matrix.cosine_scores(&query).unwrap();
//! assert!(scores[0] > scores[1]);
//! ```

pub mod error;
pub mod matrix;
pub mod vector;

/// Dot product and norm kernels
///
/// Provides hardware-accelerated dot products:
/// - SSE on x86_64
/// - NEON on ARM64/Apple Silicon
pub mod simd;

pub use error::{Error, Result};
pub use matrix::FeatureMatrix;
pub use vector::FeatureVector;
