//! Feature schema
//!
//! Fixes the layout of the shared item/query feature space. Each axis is a
//! contiguous block of slots in the declared label order, followed by one
//! cost scalar:
//!
//! ```text
//! [ roles x5 | phases x3 | categories x4 | playstyles x8 | cost ]
//!   0..5       5..8        8..12            12..20         20
//! ```

use buildcraft_catalog::{Category, GamePhase, Playstyle, Role};
use serde::Serialize;
use std::ops::Range;

/// One axis of the feature space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Role,
    Phase,
    Category,
    Playstyle,
    Cost,
}

impl Segment {
    pub const ALL: [Segment; 5] = [
        Segment::Role,
        Segment::Phase,
        Segment::Category,
        Segment::Playstyle,
        Segment::Cost,
    ];

    pub fn range(self) -> Range<usize> {
        match self {
            Segment::Role => FeatureSchema::ROLE_OFFSET..FeatureSchema::PHASE_OFFSET,
            Segment::Phase => FeatureSchema::PHASE_OFFSET..FeatureSchema::CATEGORY_OFFSET,
            Segment::Category => FeatureSchema::CATEGORY_OFFSET..FeatureSchema::PLAYSTYLE_OFFSET,
            Segment::Playstyle => FeatureSchema::PLAYSTYLE_OFFSET..FeatureSchema::COST_INDEX,
            Segment::Cost => FeatureSchema::COST_INDEX..FeatureSchema::DIM,
        }
    }
}

/// Slot layout of the 21-dimensional feature space
#[derive(Debug, Clone, Copy)]
pub struct FeatureSchema;

impl FeatureSchema {
    pub const ROLE_OFFSET: usize = 0;
    pub const PHASE_OFFSET: usize = Self::ROLE_OFFSET + Role::ALL.len();
    pub const CATEGORY_OFFSET: usize = Self::PHASE_OFFSET + GamePhase::ALL.len();
    pub const PLAYSTYLE_OFFSET: usize = Self::CATEGORY_OFFSET + Category::ALL.len();
    pub const COST_INDEX: usize = Self::PLAYSTYLE_OFFSET + Playstyle::ALL.len();
    pub const DIM: usize = Self::COST_INDEX + 1;

    // Label enums are declared in schema order, so the discriminant is the
    // offset within the axis.

    pub fn role_index(role: Role) -> usize {
        Self::ROLE_OFFSET + role as usize
    }

    pub fn phase_index(phase: GamePhase) -> usize {
        Self::PHASE_OFFSET + phase as usize
    }

    pub fn category_index(category: Category) -> usize {
        Self::CATEGORY_OFFSET + category as usize
    }

    pub fn playstyle_index(playstyle: Playstyle) -> usize {
        Self::PLAYSTYLE_OFFSET + playstyle as usize
    }
}
