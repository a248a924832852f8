//! Feature encoder
//!
//! Items become multi-hot indicator vectors; a champion plus a game phase
//! becomes a preference-weighted query vector in the same space.

use crate::schema::FeatureSchema;
use buildcraft_catalog::{Category, CharacterProfile, DamageType, GamePhase, ItemRecord};
use buildcraft_core::{FeatureMatrix, FeatureVector, Result};
use tracing::debug;

/// Item cost is divided by this; costs above it encode to values > 1
pub const COST_SCALE: f32 = 4000.0;

/// Weight for the slots a query explicitly prefers
pub const PREFERRED_WEIGHT: f32 = 3.0;

/// Weight for phase and category slots the query does not prefer
pub const BASELINE_WEIGHT: f32 = 1.0;

/// Flat cost target of a query in each phase
pub fn phase_cost_target(phase: GamePhase) -> f32 {
    match phase {
        GamePhase::Early => 0.3,
        GamePhase::Mid => 0.6,
        GamePhase::Late => 1.0,
    }
}

pub fn encode_item(item: &ItemRecord) -> FeatureVector {
    let mut vector = FeatureVector::zeros(FeatureSchema::DIM);
    let slots = vector.as_mut_slice();

    for role in &item.roles {
        slots[FeatureSchema::role_index(*role)] = 1.0;
    }
    for phase in &item.phases {
        slots[FeatureSchema::phase_index(*phase)] = 1.0;
    }
    slots[FeatureSchema::category_index(item.category)] = 1.0;
    for playstyle in &item.playstyles {
        slots[FeatureSchema::playstyle_index(*playstyle)] = 1.0;
    }
    slots[FeatureSchema::COST_INDEX] = item.cost as f32 / COST_SCALE;

    vector
}

/// Preference vector for `character` in `phase`.
///
/// Only Physical champions boost the Damage slot. Magic champions keep every
/// category at baseline because no category corresponds to magic damage.
pub fn encode_query(character: &CharacterProfile, phase: GamePhase) -> FeatureVector {
    let mut vector = FeatureVector::zeros(FeatureSchema::DIM);
    let slots = vector.as_mut_slice();

    slots[FeatureSchema::role_index(character.role)] = PREFERRED_WEIGHT;

    for candidate in GamePhase::ALL {
        slots[FeatureSchema::phase_index(candidate)] = if candidate == phase {
            PREFERRED_WEIGHT
        } else {
            BASELINE_WEIGHT
        };
    }

    for category in Category::ALL {
        slots[FeatureSchema::category_index(category)] = BASELINE_WEIGHT;
    }
    if character.damage_type == DamageType::Physical {
        slots[FeatureSchema::category_index(Category::Damage)] = PREFERRED_WEIGHT;
    }

    slots[FeatureSchema::playstyle_index(character.playstyle)] = PREFERRED_WEIGHT;
    slots[FeatureSchema::COST_INDEX] = phase_cost_target(phase);

    debug!(
        "Encoded query for {} ({}, {}) at phase {}",
        character.name, character.role, character.playstyle, phase
    );
    vector
}

/// Parse `phase` and encode the query; unknown phases fail before any
/// vector is built
pub fn encode_query_str(character: &CharacterProfile, phase: &str) -> Result<FeatureVector> {
    let phase: GamePhase = phase.parse()?;
    Ok(encode_query(character, phase))
}

/// Encode every item into a matrix whose rows follow `items` order
pub fn build_item_matrix(items: &[ItemRecord]) -> Result<FeatureMatrix> {
    let mut matrix = FeatureMatrix::with_capacity(FeatureSchema::DIM, items.len());
    for item in items {
        matrix.push(item.name.clone(), &encode_item(item))?;
    }
    Ok(matrix)
}
