//! Normalized catalog records and their categorical attributes
//!
//! Every label enum exposes `ALL` in the order used by the feature schema,
//! so index assignment never depends on declaration order elsewhere.

use buildcraft_core::Error;
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Lane/role a champion is played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "ADC")]
    Adc,
    Mid,
    Top,
    Support,
    Jungle,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Adc, Role::Mid, Role::Top, Role::Support, Role::Jungle];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Adc => "ADC",
            Role::Mid => "Mid",
            Role::Top => "Top",
            Role::Support => "Support",
            Role::Jungle => "Jungle",
        }
    }
}

/// Coarse temporal bucket of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Early,
    Mid,
    Late,
}

impl GamePhase {
    pub const ALL: [GamePhase; 3] = [GamePhase::Early, GamePhase::Mid, GamePhase::Late];

    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Early => "early",
            GamePhase::Mid => "mid",
            GamePhase::Late => "late",
        }
    }
}

impl FromStr for GamePhase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        GamePhase::ALL
            .into_iter()
            .find(|phase| phase.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::InvalidPhase(s.to_string()))
    }
}

/// Item category; exactly one per item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Damage,
    Defense,
    Utility,
    Sustain,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Damage,
        Category::Defense,
        Category::Utility,
        Category::Sustain,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Damage => "Damage",
            Category::Defense => "Defense",
            Category::Utility => "Utility",
            Category::Sustain => "Sustain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Playstyle {
    Hypercarry,
    Assassin,
    Burst,
    Tank,
    Enchanter,
    Control,
    Bruiser,
    Utility,
}

impl Playstyle {
    pub const ALL: [Playstyle; 8] = [
        Playstyle::Hypercarry,
        Playstyle::Assassin,
        Playstyle::Burst,
        Playstyle::Tank,
        Playstyle::Enchanter,
        Playstyle::Control,
        Playstyle::Bruiser,
        Playstyle::Utility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Playstyle::Hypercarry => "Hypercarry",
            Playstyle::Assassin => "Assassin",
            Playstyle::Burst => "Burst",
            Playstyle::Tank => "Tank",
            Playstyle::Enchanter => "Enchanter",
            Playstyle::Control => "Control",
            Playstyle::Bruiser => "Bruiser",
            Playstyle::Utility => "Utility",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DamageType {
    Physical,
    Magic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scaling {
    Early,
    Mid,
    Late,
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Role, GamePhase, Category, Playstyle);

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Scaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A champion as seen by the recommender
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterProfile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub role: Role,
    pub damage_type: DamageType,
    pub playstyle: Playstyle,
    pub scaling: Scaling,
    pub difficulty: f32,
    pub attack: f32,
    pub defense: f32,
    pub magic: f32,
    pub tags: Vec<String>,
}

/// A purchasable item that survived the exclusion filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cost: i64,
    pub category: Category,
    /// Labels of the positive stats, in stat table order
    pub stats: SmallVec<[&'static str; 4]>,
    pub roles: SmallVec<[Role; 5]>,
    pub phases: SmallVec<[GamePhase; 3]>,
    pub playstyles: SmallVec<[Playstyle; 4]>,
    pub tags: Vec<String>,
}
