//! Turns a team sheet into the 11 on-pitch players for one side.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::physics_constants::player as player_consts;
use super::types::{PlayerKey, Vec2, SQUAD_SLOTS};
use crate::error::{MatchError, Result};
use crate::models::{Attributes, Side, SquadPlayer, Team};
use crate::tactics::{layout, Role, Tactics};

/// How lineup slots are filled from the squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineupPolicy {
    /// Slot i takes squad entry i (entry 0 when the squad is short).
    #[default]
    Positional,
    /// Slot i takes the squad member named in `tactics.lineup[i]`, falling
    /// back to the positional pick when the id is missing or unknown.
    Explicit,
}

/// Attribute multipliers, each rating / 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub speed: f32,
    pub passing: f32,
    pub shooting: f32,
    pub defending: f32,
    /// Passing with per-match jitter of 0.8..1.2
    pub creativity: f32,
}

impl SkillProfile {
    pub fn from_attributes(attrs: &Attributes, creativity_roll: f32) -> Self {
        let norm = |v: u8| f32::from(v.min(99)) / 100.0;
        let passing = norm(attrs.pas);
        Self {
            speed: norm(attrs.pac),
            passing,
            shooting: norm(attrs.sho),
            defending: norm(attrs.def),
            creativity: passing * (0.8 + creativity_roll * 0.4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchPlayer {
    pub key: PlayerKey,
    pub roster_id: String,
    pub name: String,
    /// Shirt number, slot + 1
    pub number: u8,
    pub role: Role,
    pub line: u8,
    pub anchor: Vec2,
    pub pos: Vec2,
    pub vel: Vec2,
    pub skills: SkillProfile,
    /// Off-ball run timer (ms), seeded randomly so teammates drift out of phase
    pub run_timer: f32,
}

impl PitchPlayer {
    #[inline]
    pub fn side(&self) -> Side {
        self.key.side
    }

    #[inline]
    pub fn is_keeper(&self) -> bool {
        self.role.is_keeper()
    }

    /// Drift phase in [0, 2π).
    pub fn run_phase(&self) -> f32 {
        (self.run_timer / player_consts::RUN_PHASE_PERIOD).rem_euclid(std::f32::consts::TAU)
    }

    /// Back to the formation anchor, at rest.
    pub fn return_to_anchor(&mut self) {
        self.pos = self.anchor;
        self.vel = Vec2::ZERO;
    }
}

fn pick_for_slot<'a>(
    team: &'a Team,
    tactics: &Tactics,
    slot: usize,
    policy: LineupPolicy,
) -> Option<&'a SquadPlayer> {
    let positional = move || team.squad.get(slot).or_else(|| team.squad.first());
    match policy {
        LineupPolicy::Positional => positional(),
        LineupPolicy::Explicit => tactics
            .lineup_id(slot)
            .and_then(|id| team.find_player(id))
            .or_else(positional),
    }
}

/// Build the 11 pitch players of one side, slot 0 the keeper.
///
/// Draws two numbers per slot from `rng` (creativity jitter, run timer).
pub fn build_side<R: Rng + ?Sized>(
    team: &Team,
    tactics: &Tactics,
    side: Side,
    policy: LineupPolicy,
    rng: &mut R,
) -> Result<Vec<PitchPlayer>> {
    if team.squad.is_empty() {
        return Err(MatchError::EmptySquad { team: team.name.clone() });
    }

    let anchors = layout(tactics.formation, side);
    let mut players = Vec::with_capacity(SQUAD_SLOTS);

    for (slot, anchor) in anchors.iter().enumerate() {
        let source = pick_for_slot(team, tactics, slot, policy)
            .ok_or_else(|| MatchError::EmptySquad { team: team.name.clone() })?;

        let creativity_roll: f32 = rng.gen();
        let run_timer = rng.gen::<f32>() * 1000.0;

        players.push(PitchPlayer {
            key: PlayerKey::new(side, slot as u8),
            roster_id: source.id.clone(),
            name: source.name.clone(),
            number: slot as u8 + 1,
            role: anchor.role,
            line: anchor.line,
            anchor: anchor.pos,
            pos: anchor.pos,
            vel: Vec2::ZERO,
            skills: SkillProfile::from_attributes(&source.attributes, creativity_roll),
            run_timer,
        });
    }

    debug!(
        team = %team.name,
        side = %side,
        formation = tactics.formation.label(),
        "lineup built"
    );
    Ok(players)
}
