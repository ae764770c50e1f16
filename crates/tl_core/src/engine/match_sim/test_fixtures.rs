//! Test Fixtures Module
//!
//! Shared helpers for engine tests: teams, a kickoff state, and two fixed
//! RNGs that force every probability gate open or shut.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::engine::match_sim::test_fixtures::*;
//! ```

use rand::{Error, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::engine::match_state::MatchState;
use crate::engine::roster::{build_side, LineupPolicy};
use crate::engine::types::{PlayerKey, Vec2};
use crate::models::{Attributes, MatchSetup, Position, Side, SquadPlayer, Team};
use crate::tactics::Tactics;

// =============================================================================
// Team Creation Helpers
// =============================================================================

/// Squad order matching the 4-3-3 slot order, plus five substitutes.
const SQUAD_POSITIONS: [Position; 16] = [
    Position::GK,
    Position::DEF,
    Position::DEF,
    Position::DEF,
    Position::DEF,
    Position::MID,
    Position::MID,
    Position::MID,
    Position::FWD,
    Position::FWD,
    Position::FWD,
    Position::GK,
    Position::DEF,
    Position::MID,
    Position::MID,
    Position::FWD,
];

/// A 16-player squad with flat 70-rated attributes.
pub fn create_test_team(name: &str, id_prefix: &str) -> Team {
    create_test_team_with_attributes(name, id_prefix, Attributes {
        pac: 70,
        sho: 70,
        pas: 70,
        dri: 70,
        def: 70,
        phy: 70,
    })
}

pub fn create_test_team_with_attributes(name: &str, id_prefix: &str, attributes: Attributes) -> Team {
    let squad = SQUAD_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, &position)| SquadPlayer {
            id: format!("{}{}", id_prefix, i + 1),
            name: format!("{} Player {}", name, i + 1),
            position,
            rating: 70,
            morale: 80,
            fitness: 100,
            traits: Vec::new(),
            attributes,
        })
        .collect();

    Team {
        id: format!("{}-team", id_prefix),
        name: name.to_string(),
        short_name: name.chars().take(3).collect::<String>().to_uppercase(),
        primary_color: "#ffffff".to_string(),
        secondary_color: "#000000".to_string(),
        stadium: format!("{} Park", name),
        squad,
    }
}

pub fn create_test_setup() -> MatchSetup {
    MatchSetup::new(create_test_team("Home", "h"), create_test_team("Away", "a"))
}

/// Kickoff state for the default test setup (4-3-3 both sides).
pub fn create_test_state() -> MatchState {
    let setup = create_test_setup();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let home = build_side(&setup.home, &Tactics::default(), Side::Home, LineupPolicy::Positional, &mut rng)
        .expect("test squad");
    let away = build_side(&setup.away, &Tactics::default(), Side::Away, LineupPolicy::Positional, &mut rng)
        .expect("test squad");
    MatchState::new(home, away, 50)
}

// =============================================================================
// State Helpers
// =============================================================================

pub fn place(state: &mut MatchState, key: PlayerKey, pos: Vec2) {
    let player = &mut state.players[key.index()];
    player.pos = pos;
    player.vel = Vec2::ZERO;
}

/// Hand the ball to `key` at the current clock and snap the ball to them.
pub fn give_ball(state: &mut MatchState, key: PlayerKey) {
    state.possession.claim_save(key, state.clock_ms);
    let pos = state.players[key.index()].pos;
    state.ball.attach_to(pos, key.side);
}

// =============================================================================
// Fixed RNGs
// =============================================================================

/// Every `gen::<f32>()` yields 0.0, so every probability gate fires.
pub struct AlwaysRng;

impl RngCore for AlwaysRng {
    fn next_u32(&mut self) -> u32 {
        0
    }
    fn next_u64(&mut self) -> u64 {
        0
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        dest.fill(0);
        Ok(())
    }
}

/// Every `gen::<f32>()` yields just under 1.0, so no probability gate fires.
pub struct NeverRng;

impl RngCore for NeverRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }
    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0xff);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        dest.fill(0xff);
        Ok(())
    }
}
