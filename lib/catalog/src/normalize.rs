//! Catalog normalizer
//!
//! Turns raw champion and item records into [`CharacterProfile`] and
//! [`ItemRecord`] values with every derived attribute filled in.

use crate::model::{
    CharacterProfile, DamageType, GamePhase, ItemRecord, Playstyle, Role, Scaling,
};
use crate::raw::{RawChampion, RawItem};
use crate::rules::*;
use buildcraft_core::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, info, warn};

/// First label whose tag appears earliest in `tags`
fn first_tag_match<T: Copy>(tags: &[String], table: &[(&str, T)]) -> Option<T> {
    tags.iter().find_map(|tag| {
        table
            .iter()
            .find(|(key, _)| *key == tag.as_str())
            .map(|(_, label)| *label)
    })
}

fn push_unique<A: smallvec::Array>(set: &mut SmallVec<A>, value: A::Item)
where
    A::Item: PartialEq,
{
    if !set.contains(&value) {
        set.push(value);
    }
}

pub fn derive_role(tags: &[String]) -> Role {
    first_tag_match(tags, TAG_ROLES).unwrap_or(DEFAULT_ROLE)
}

pub fn derive_playstyle(tags: &[String]) -> Playstyle {
    first_tag_match(tags, TAG_PLAYSTYLES).unwrap_or(DEFAULT_PLAYSTYLE)
}

pub fn derive_damage_type(attack: f32, magic: f32) -> DamageType {
    if magic > attack {
        DamageType::Magic
    } else {
        DamageType::Physical
    }
}

/// Attack share is checked before magic share
pub fn derive_scaling(attack: f32, defense: f32, magic: f32) -> Scaling {
    let total = attack + defense + magic;
    if attack > total * SCALING_SHARE {
        Scaling::Early
    } else if magic > total * SCALING_SHARE {
        Scaling::Mid
    } else {
        Scaling::Late
    }
}

pub fn normalize_character(raw: RawChampion) -> CharacterProfile {
    let info = raw.info;
    CharacterProfile {
        role: derive_role(&raw.tags),
        damage_type: derive_damage_type(info.attack, info.magic),
        playstyle: derive_playstyle(&raw.tags),
        scaling: derive_scaling(info.attack, info.defense, info.magic),
        difficulty: info.difficulty,
        attack: info.attack,
        defense: info.defense,
        magic: info.magic,
        id: raw.id,
        name: raw.name,
        title: raw.title,
        tags: raw.tags,
    }
}

pub fn is_excluded(raw: &RawItem) -> bool {
    raw.gold.total < MIN_ITEM_COST
        || raw.tags.iter().any(|t| EXCLUDED_TAGS.contains(&t.as_str()))
        || EXCLUDED_NAME_FRAGMENTS
            .iter()
            .any(|fragment| raw.name.contains(fragment))
}

pub fn stat_labels(raw: &RawItem) -> SmallVec<[&'static str; 4]> {
    let mut labels = SmallVec::new();
    for (key, label) in STAT_LABELS {
        if raw.stat(key) > 0.0 {
            push_unique(&mut labels, *label);
        }
    }
    labels
}

pub fn suitable_roles(raw: &RawItem) -> SmallVec<[Role; 5]> {
    let mut roles = SmallVec::new();
    for (rule, contributed) in ROLE_RULES {
        if rule(raw) {
            for role in contributed.iter() {
                push_unique(&mut roles, *role);
            }
        }
    }
    if roles.is_empty() {
        roles.extend(Role::ALL);
    }
    roles
}

pub fn suitable_phases(cost: i64) -> SmallVec<[GamePhase; 3]> {
    if cost < EARLY_COST_CEILING {
        smallvec![GamePhase::Early]
    } else if cost < LATE_COST_FLOOR {
        smallvec![GamePhase::Early, GamePhase::Mid]
    } else {
        smallvec![GamePhase::Mid, GamePhase::Late]
    }
}

pub fn suitable_playstyles(raw: &RawItem) -> SmallVec<[Playstyle; 4]> {
    let mut playstyles: SmallVec<[Playstyle; 4]> = PLAYSTYLE_RULES
        .iter()
        .filter(|(rule, _)| rule(raw))
        .map(|(_, playstyle)| *playstyle)
        .collect();
    if playstyles.is_empty() {
        playstyles.push(Playstyle::Control);
    }
    playstyles
}

/// Plain-text description; falls back to the HTML description with tags removed
fn item_description(raw: &RawItem) -> String {
    if !raw.plaintext.trim().is_empty() {
        return raw.plaintext.trim().to_string();
    }

    let mut text = String::with_capacity(raw.description.len());
    let mut in_tag = false;
    for c in raw.description.chars() {
        match c {
            '<' => {
                in_tag = true;
                if !text.is_empty() && !text.ends_with(' ') {
                    text.push(' ');
                }
            }
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize one item, or `None` when the exclusion filter drops it
pub fn normalize_item(raw: RawItem) -> Option<ItemRecord> {
    if is_excluded(&raw) {
        return None;
    }

    let category = CATEGORY_RULES
        .iter()
        .find(|(rule, _)| rule(&raw))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY);

    Some(ItemRecord {
        category,
        description: item_description(&raw),
        stats: stat_labels(&raw),
        roles: suitable_roles(&raw),
        phases: suitable_phases(raw.gold.total),
        playstyles: suitable_playstyles(&raw),
        cost: raw.gold.total,
        id: raw.id,
        name: raw.name,
        tags: raw.tags,
    })
}

/// Counters describing what a catalog normalization pass kept and dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    pub characters: usize,
    pub items: usize,
    pub excluded_items: usize,
    pub malformed_characters: usize,
    pub malformed_items: usize,
}

/// Normalized records in catalog-load order
#[derive(Debug, Clone, Default)]
pub struct NormalizedCatalog {
    pub characters: Vec<CharacterProfile>,
    pub items: Vec<ItemRecord>,
    pub report: NormalizeReport,
}

/// Parse and normalize a whole batch.
///
/// Malformed records are logged and skipped; the batch never fails as a whole.
/// Items are processed in the iteration order of `items`.
pub fn normalize_catalog(characters: &[Value], items: &Map<String, Value>) -> NormalizedCatalog {
    let mut catalog = NormalizedCatalog::default();

    for value in characters {
        match RawChampion::from_value(value).map(normalize_character) {
            Ok(profile) => catalog.characters.push(profile),
            Err(e) => {
                warn!("Skipping champion record: {}", e);
                catalog.report.malformed_characters += 1;
            }
        }
    }

    for (id, value) in items {
        let raw: Result<RawItem> = RawItem::from_value(id, value);
        match raw {
            Ok(raw) => match normalize_item(raw) {
                Some(item) => catalog.items.push(item),
                None => {
                    debug!("Excluded item {}", id);
                    catalog.report.excluded_items += 1;
                }
            },
            Err(e) => {
                warn!("Skipping item record: {}", e);
                catalog.report.malformed_items += 1;
            }
        }
    }

    catalog.report.characters = catalog.characters.len();
    catalog.report.items = catalog.items.len();
    info!(
        "Normalized {} champions and {} items ({} excluded, {} malformed)",
        catalog.report.characters,
        catalog.report.items,
        catalog.report.excluded_items,
        catalog.report.malformed_characters + catalog.report.malformed_items,
    );

    catalog
}
