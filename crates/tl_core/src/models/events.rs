use serde::{Deserialize, Serialize};

use super::side::Side;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum EventKind {
    Goal,
    Chance,
    Commentary,
    // Reserved for narrated events; the engine never books players.
    Yellow,
    Red,
}

/// A timeline entry. Serialized with the field names hosts expect
/// (`type`, `team`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub minute: u32,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub description: String,
    #[serde(rename = "team")]
    pub side: Side,
}

impl MatchEvent {
    pub fn new(minute: u32, kind: EventKind, side: Side, description: impl Into<String>) -> Self {
        Self { minute, kind, description: description.into(), side }
    }

    pub fn goal(minute: u32, side: Side, team_name: &str) -> Self {
        Self::new(minute, EventKind::Goal, side, format!("GOAL! {} score!", team_name))
    }

    pub fn shot(minute: u32, side: Side, shooter: &str) -> Self {
        Self::new(minute, EventKind::Chance, side, format!("{} shoots!", shooter))
    }

    pub fn save(minute: u32, keeper_side: Side) -> Self {
        Self::new(minute, EventKind::Chance, keeper_side, "Great save by the keeper!")
    }

    pub fn tackle(minute: u32, side: Side, tackler: &str) -> Self {
        Self::new(minute, EventKind::Commentary, side, format!("{} wins the ball!", tackler))
    }

    pub fn full_time(minute: u32, home: u32, away: u32) -> Self {
        Self::new(
            minute,
            EventKind::Commentary,
            Side::Home,
            format!("FULL TIME: {} - {}", home, away),
        )
    }
}
