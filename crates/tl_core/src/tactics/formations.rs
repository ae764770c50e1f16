//! Formation tables and their conversion to pitch anchors.
//!
//! Each table lists 11 slots, goalkeeper first, as `(x%, y%)` on a portrait
//! team sheet: x% runs left to right across the pitch, y% runs from the
//! opponent's goal (0) to our own (100). `layout` turns a table into
//! landscape pitch coordinates for a team attacking left-to-right (home)
//! or right-to-left (away).

use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::pitch;
use crate::engine::types::Vec2;
use crate::models::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Formation {
    #[default]
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-2-3-1")]
    F4231,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "5-3-2")]
    F532,
}

/// Tactical role of a slot. Drives keeper behaviour, forward runs and the
/// depth line used for the team push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    GK,
    DEF,
    MID,
    FWD,
}

impl Role {
    /// Depth line: 0 keeper, 1 defence, 2 midfield, 3 attack.
    pub const fn line(self) -> u8 {
        match self {
            Role::GK => 0,
            Role::DEF => 1,
            Role::MID => 2,
            Role::FWD => 3,
        }
    }

    pub const fn is_keeper(self) -> bool {
        matches!(self, Role::GK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotTemplate {
    pub label: &'static str,
    pub x_pct: f32,
    pub y_pct: f32,
    pub role: Role,
}

const fn slot(label: &'static str, x_pct: f32, y_pct: f32, role: Role) -> SlotTemplate {
    SlotTemplate { label, x_pct, y_pct, role }
}

const GK: SlotTemplate = slot("GK", 50.0, 88.0, Role::GK);

const F433_SLOTS: [SlotTemplate; 11] = [
    GK,
    slot("LB", 15.0, 70.0, Role::DEF),
    slot("CB", 38.0, 75.0, Role::DEF),
    slot("CB", 62.0, 75.0, Role::DEF),
    slot("RB", 85.0, 70.0, Role::DEF),
    slot("CM", 30.0, 45.0, Role::MID),
    slot("CDM", 50.0, 55.0, Role::MID),
    slot("CM", 70.0, 45.0, Role::MID),
    slot("LW", 20.0, 22.0, Role::FWD),
    slot("ST", 50.0, 15.0, Role::FWD),
    slot("RW", 80.0, 22.0, Role::FWD),
];

const F442_SLOTS: [SlotTemplate; 11] = [
    GK,
    slot("LB", 15.0, 70.0, Role::DEF),
    slot("CB", 38.0, 75.0, Role::DEF),
    slot("CB", 62.0, 75.0, Role::DEF),
    slot("RB", 85.0, 70.0, Role::DEF),
    slot("LM", 15.0, 45.0, Role::MID),
    slot("CM", 40.0, 48.0, Role::MID),
    slot("CM", 60.0, 48.0, Role::MID),
    slot("RM", 85.0, 45.0, Role::MID),
    slot("ST", 38.0, 18.0, Role::FWD),
    slot("ST", 62.0, 18.0, Role::FWD),
];

const F4231_SLOTS: [SlotTemplate; 11] = [
    GK,
    slot("LB", 15.0, 72.0, Role::DEF),
    slot("LCB", 38.0, 77.0, Role::DEF),
    slot("RCB", 62.0, 77.0, Role::DEF),
    slot("RB", 85.0, 72.0, Role::DEF),
    slot("LDM", 38.0, 58.0, Role::MID),
    slot("RDM", 62.0, 58.0, Role::MID),
    slot("LAM", 20.0, 35.0, Role::MID),
    slot("CAM", 50.0, 35.0, Role::MID),
    slot("RAM", 80.0, 35.0, Role::MID),
    slot("ST", 50.0, 15.0, Role::FWD),
];

const F352_SLOTS: [SlotTemplate; 11] = [
    GK,
    slot("LCB", 30.0, 75.0, Role::DEF),
    slot("CB", 50.0, 77.0, Role::DEF),
    slot("RCB", 70.0, 75.0, Role::DEF),
    slot("LWB", 15.0, 45.0, Role::MID),
    slot("LCM", 35.0, 50.0, Role::MID),
    slot("CDM", 50.0, 55.0, Role::MID),
    slot("RCM", 65.0, 50.0, Role::MID),
    slot("RWB", 85.0, 45.0, Role::MID),
    slot("LST", 40.0, 18.0, Role::FWD),
    slot("RST", 60.0, 18.0, Role::FWD),
];

const F532_SLOTS: [SlotTemplate; 11] = [
    GK,
    slot("LWB", 12.0, 65.0, Role::DEF),
    slot("LCB", 30.0, 75.0, Role::DEF),
    slot("CB", 50.0, 77.0, Role::DEF),
    slot("RCB", 70.0, 75.0, Role::DEF),
    slot("RWB", 88.0, 65.0, Role::DEF),
    slot("LCM", 35.0, 48.0, Role::MID),
    slot("CM", 50.0, 50.0, Role::MID),
    slot("RCM", 65.0, 48.0, Role::MID),
    slot("LST", 40.0, 18.0, Role::FWD),
    slot("RST", 60.0, 18.0, Role::FWD),
];

impl Formation {
    pub const ALL: [Formation; 5] =
        [Formation::F433, Formation::F442, Formation::F4231, Formation::F352, Formation::F532];

    pub const fn label(self) -> &'static str {
        match self {
            Formation::F433 => "4-3-3",
            Formation::F442 => "4-4-2",
            Formation::F4231 => "4-2-3-1",
            Formation::F352 => "3-5-2",
            Formation::F532 => "5-3-2",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    pub const fn slots(self) -> &'static [SlotTemplate; 11] {
        match self {
            Formation::F433 => &F433_SLOTS,
            Formation::F442 => &F442_SLOTS,
            Formation::F4231 => &F4231_SLOTS,
            Formation::F352 => &F352_SLOTS,
            Formation::F532 => &F532_SLOTS,
        }
    }
}

/// Sheet depth of the keeper row and the deepest striker row.
const KEEPER_DEPTH_PCT: f32 = 88.0;
const STRIKER_DEPTH_PCT: f32 = 15.0;
/// Pitch x (home orientation) those two rows map to.
const KEEPER_ANCHOR_X: f32 = 35.0;
const STRIKER_ANCHOR_X: f32 = 450.0;
const DEPTH_SCALE: f32 =
    (STRIKER_ANCHOR_X - KEEPER_ANCHOR_X) / (KEEPER_DEPTH_PCT - STRIKER_DEPTH_PCT);

/// A slot placed on the pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub pos: Vec2,
    pub role: Role,
    pub line: u8,
}

fn anchor_position(template: &SlotTemplate, side: Side) -> Vec2 {
    let home_x = KEEPER_ANCHOR_X + (KEEPER_DEPTH_PCT - template.y_pct) * DEPTH_SCALE;
    let home_y = template.x_pct / 100.0 * pitch::HEIGHT;
    match side {
        Side::Home => Vec2::new(home_x, home_y),
        // Point-mirror so the left-back stays on the team's own left.
        Side::Away => Vec2::new(pitch::WIDTH - home_x, pitch::HEIGHT - home_y),
    }
}

/// Pitch anchors for all 11 slots, slot 0 the keeper.
pub fn layout(formation: Formation, side: Side) -> [Anchor; 11] {
    (*formation.slots()).map(|template| Anchor {
        pos: anchor_position(&template, side),
        role: template.role,
        line: template.role.line(),
    })
}
