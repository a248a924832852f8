//! Explainability for item scores
//!
//! Splits a cosine score into the share contributed by each axis of the
//! feature space, so a recommendation can show why an item ranked where it
//! did. The per-axis shares sum to the cosine score.

use crate::schema::Segment;
use buildcraft_core::FeatureVector;
use serde::Serialize;

/// Per-axis contribution to a cosine similarity score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub role: f32,
    pub phase: f32,
    pub category: f32,
    pub playstyle: f32,
    pub cost: f32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f32 {
        self.role + self.phase + self.category + self.playstyle + self.cost
    }

    pub fn get(&self, segment: Segment) -> f32 {
        match segment {
            Segment::Role => self.role,
            Segment::Phase => self.phase,
            Segment::Category => self.category,
            Segment::Playstyle => self.playstyle,
            Segment::Cost => self.cost,
        }
    }

    fn slot_mut(&mut self, segment: Segment) -> &mut f32 {
        match segment {
            Segment::Role => &mut self.role,
            Segment::Phase => &mut self.phase,
            Segment::Category => &mut self.category,
            Segment::Playstyle => &mut self.playstyle,
            Segment::Cost => &mut self.cost,
        }
    }
}

/// Break down the cosine similarity of `query` and `item` by segment
pub fn explain(query: &FeatureVector, item: &FeatureVector) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();
    if query.dim() != item.dim() {
        return breakdown;
    }

    let denominator = query.norm() * item.norm();
    if denominator == 0.0 {
        return breakdown;
    }

    for segment in Segment::ALL {
        let range = segment.range();
        if range.end > query.dim() {
            continue;
        }
        let dot: f32 = query.as_slice()[range.clone()]
            .iter()
            .zip(&item.as_slice()[range])
            .map(|(q, i)| q * i)
            .sum();
        *breakdown.slot_mut(segment) = dot / denominator;
    }

    breakdown
}
