//! # tl_core - Deterministic Touchline Match Engine
//!
//! A small-sided 11v11 football simulation on an 800x500 pitch. Two squads
//! are laid out from a formation table, then a fixed-step tick advances ball
//! physics, possession and per-player decisions until full time.
//!
//! ## Features
//! - Deterministic simulation (same seed + same frame sequence = same match)
//! - Pure `advance(state, inputs, rng)` step plus an owning [`Simulation`] host
//! - Hidden performance modifiers from pre-match team talks
//! - JSON API for headless hosts

// Game engine APIs often require many parameters for physics, state, etc.
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod narrative;
pub mod tactics;

pub use api::{simulate_match, simulate_match_json, MatchRequest, MatchResponse};
pub use engine::{
    advance, EngineConfig, LineupPolicy, MatchPhase, MatchSnapshot, MatchState, MatchStats,
    MatchUpdate, Simulation, StepInputs, StepResult,
};
pub use error::{MatchError, Result};
pub use models::{
    Attributes, EventKind, HiddenImpact, MatchEvent, MatchSetup, Position, Side, SquadPlayer, Team,
};
pub use tactics::{Formation, Mentality, PlayStyle, Tactics};
