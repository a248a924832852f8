//! Lookup tables and thresholds used by the normalizer
//!
//! Tables are ordered slices. Single-label derivations take the first
//! matching entry; multi-label derivations run every rule and union the
//! results.

use crate::model::{Category, Playstyle, Role};
use crate::raw::RawItem;

// Data Dragon stat keys
pub const HEALTH: &str = "FlatHPPoolMod";
pub const MANA: &str = "FlatMPPoolMod";
pub const ARMOR: &str = "FlatArmorMod";
pub const MAGIC_RESIST: &str = "FlatSpellBlockMod";
pub const ATTACK_DAMAGE: &str = "FlatPhysicalDamageMod";
pub const ABILITY_POWER: &str = "FlatMagicDamageMod";
pub const ATTACK_SPEED: &str = "PercentAttackSpeedMod";
pub const CRIT_CHANCE: &str = "FlatCritChanceMod";
pub const LIFE_STEAL: &str = "PercentLifeStealMod";
pub const MOVE_SPEED_FLAT: &str = "FlatMovementSpeedMod";
pub const MOVE_SPEED_PERCENT: &str = "PercentMovementSpeedMod";

/// Items cheaper than this never enter the catalog
pub const MIN_ITEM_COST: i64 = 400;

/// Raw tags that disqualify an item
pub const EXCLUDED_TAGS: &[&str] = &["Boots", "Consumable", "Trinket", "GoldPer"];

/// Name fragments that disqualify an item. English-only: a localized or
/// renamed catalog will slip past this list.
pub const EXCLUDED_NAME_FRAGMENTS: &[&str] = &["Health Potion", "Ward"];

/// Raw stat key to display label; output order follows this table
pub const STAT_LABELS: &[(&str, &str)] = &[
    (HEALTH, "Health"),
    (MANA, "Mana"),
    (ARMOR, "Armor"),
    (MAGIC_RESIST, "Magic Resist"),
    (ATTACK_DAMAGE, "Attack Damage"),
    (ABILITY_POWER, "Ability Power"),
    (ATTACK_SPEED, "Attack Speed"),
    (CRIT_CHANCE, "Critical Strike"),
    (LIFE_STEAL, "Life Steal"),
    (MOVE_SPEED_FLAT, "Movement Speed"),
    (MOVE_SPEED_PERCENT, "Movement Speed"),
];

/// Champion tag to role, scanned in the champion's own tag order
pub const TAG_ROLES: &[(&str, Role)] = &[
    ("Marksman", Role::Adc),
    ("Mage", Role::Mid),
    ("Assassin", Role::Mid),
    ("Support", Role::Support),
    ("Tank", Role::Top),
    ("Fighter", Role::Top),
];

pub const DEFAULT_ROLE: Role = Role::Jungle;

/// Champion tag to playstyle, scanned in the champion's own tag order
pub const TAG_PLAYSTYLES: &[(&str, Playstyle)] = &[
    ("Assassin", Playstyle::Assassin),
    ("Marksman", Playstyle::Hypercarry),
    ("Mage", Playstyle::Burst),
    ("Support", Playstyle::Utility),
    ("Tank", Playstyle::Tank),
    ("Fighter", Playstyle::Bruiser),
];

pub const DEFAULT_PLAYSTYLE: Playstyle = Playstyle::Control;

/// Share of attack+defense+magic above which a champion counts as
/// early- or mid-game scaling
pub const SCALING_SHARE: f32 = 0.4;

// Cost bands for suitable phases
pub const EARLY_COST_CEILING: i64 = 1200;
pub const LATE_COST_FLOOR: i64 = 2800;

pub type ItemPredicate = fn(&RawItem) -> bool;

fn name_contains(item: &RawItem, fragment: &str) -> bool {
    item.name.to_lowercase().contains(fragment)
}

/// Category rules, first match wins; anything else is Utility
pub const CATEGORY_RULES: &[(ItemPredicate, Category)] = &[
    (
        |i: &RawItem| i.stat(HEALTH) > 300.0 || i.stat(ARMOR) > 40.0 || i.stat(MAGIC_RESIST) > 40.0,
        Category::Defense,
    ),
    (
        |i: &RawItem| i.stat(ATTACK_DAMAGE) > 40.0 || i.stat(ABILITY_POWER) > 60.0,
        Category::Damage,
    ),
    (
        |i: &RawItem| i.stat(LIFE_STEAL) > 0.0 || name_contains(i, "heal"),
        Category::Sustain,
    ),
];

pub const DEFAULT_CATEGORY: Category = Category::Utility;

/// Role rules, every match contributes; no match means all roles
pub const ROLE_RULES: &[(ItemPredicate, &[Role])] = &[
    (
        |i: &RawItem| i.stat(ATTACK_DAMAGE) > 30.0 || i.stat(CRIT_CHANCE) > 0.0,
        &[Role::Adc, Role::Top],
    ),
    (|i: &RawItem| i.stat(ABILITY_POWER) > 40.0, &[Role::Mid, Role::Support]),
    (
        |i: &RawItem| i.stat(HEALTH) > 200.0,
        &[Role::Top, Role::Jungle, Role::Support],
    ),
];

/// Playstyle rules, every match contributes; no match means Control
pub const PLAYSTYLE_RULES: &[(ItemPredicate, Playstyle)] = &[
    (|i: &RawItem| i.stat(CRIT_CHANCE) > 0.0, Playstyle::Hypercarry),
    (|i: &RawItem| i.stat(ATTACK_DAMAGE) > 50.0, Playstyle::Assassin),
    (|i: &RawItem| i.stat(ABILITY_POWER) > 80.0, Playstyle::Burst),
    (|i: &RawItem| i.stat(HEALTH) > 400.0, Playstyle::Tank),
    (
        |i: &RawItem| name_contains(i, "heal") || name_contains(i, "shield"),
        Playstyle::Enchanter,
    ),
];
