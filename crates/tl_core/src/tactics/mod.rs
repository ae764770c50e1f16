//! Tactical setup chosen before kickoff: formation, mentality, play style
//! and an optional explicit lineup.

pub mod formations;

use serde::{Deserialize, Serialize};

pub use formations::{layout, Anchor, Formation, Role, SlotTemplate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Mentality {
    Defensive,
    #[default]
    Balanced,
    Attacking,
    #[serde(rename = "All-out Attack")]
    AllOutAttack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum PlayStyle {
    #[default]
    Gegenpressing,
    #[serde(rename = "Tiki-Taka")]
    TikiTaka,
    #[serde(rename = "Route One")]
    RouteOne,
    #[serde(rename = "Park the Bus")]
    ParkTheBus,
}

/// Number of lineup slots on the team sheet.
pub const LINEUP_SLOTS: usize = 11;

/// Mentality and style are presentational; only the formation and the
/// lineup (under an explicit lineup policy) shape the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tactics {
    #[serde(default)]
    pub formation: Formation,
    #[serde(default)]
    pub mentality: Mentality,
    #[serde(default)]
    pub style: PlayStyle,
    /// Squad ids per slot, GK first. `None` leaves the slot to the
    /// positional fallback.
    #[serde(default = "empty_lineup")]
    pub lineup: Vec<Option<String>>,
}

fn empty_lineup() -> Vec<Option<String>> {
    vec![None; LINEUP_SLOTS]
}

impl Default for Tactics {
    fn default() -> Self {
        Self {
            formation: Formation::default(),
            mentality: Mentality::default(),
            style: PlayStyle::default(),
            lineup: empty_lineup(),
        }
    }
}

impl Tactics {
    pub fn with_formation(formation: Formation) -> Self {
        Self { formation, ..Self::default() }
    }

    /// Lineup entry for a slot, if one was picked.
    pub fn lineup_id(&self, slot: usize) -> Option<&str> {
        self.lineup.get(slot).and_then(|id| id.as_deref())
    }
}
