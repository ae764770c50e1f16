use serde::{Deserialize, Serialize};

/// Squad position as listed on the team sheet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
}

impl Position {
    pub const fn label(self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        }
    }
}

/// Six core ratings, 0-99.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    pub pac: u8,
    pub sho: u8,
    pub pas: u8,
    pub dri: u8,
    pub def: u8,
    pub phy: u8,
}

impl Default for Attributes {
    fn default() -> Self {
        Self { pac: 50, sho: 50, pas: 50, dri: 50, def: 50, phy: 50 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SquadPlayer {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub rating: u8,
    #[serde(default = "default_morale")]
    pub morale: u8,
    #[serde(default = "default_fitness")]
    pub fitness: u8,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

fn default_morale() -> u8 {
    80
}

fn default_fitness() -> u8 {
    100
}

impl SquadPlayer {
    /// One line per player for narrative prompts:
    /// `Name (POS, Rating: 78, Traits: Clinical, Fast)`
    pub fn summary_line(&self) -> String {
        format!(
            "{} ({}, Rating: {}, Traits: {})",
            self.name,
            self.position.label(),
            self.rating,
            self.traits.join(", ")
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: String,
    #[serde(default)]
    pub stadium: String,
    pub squad: Vec<SquadPlayer>,
}

impl Team {
    pub fn find_player(&self, id: &str) -> Option<&SquadPlayer> {
        self.squad.iter().find(|p| p.id == id)
    }
}
