use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::{EngineConfig, MatchStats, Simulation};
use crate::error::{MatchError, Result};
use crate::models::{HiddenImpact, MatchEvent, MatchSetup, Team};
use crate::tactics::Tactics;

pub const SCHEMA_VERSION: u8 = 1;

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

fn default_game_speed() -> f32 {
    1.0
}

/// Headless match request. Omitted tactics use the default 4-3-3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_game_speed")]
    pub game_speed: f32,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub home_tactics: Option<Tactics>,
    #[serde(default)]
    pub away_tactics: Option<Tactics>,
    #[serde(default)]
    pub hidden_impacts: Vec<HiddenImpact>,
    /// Full-time minute, 90 when omitted
    #[serde(default)]
    pub match_minutes: Option<u32>,
}

impl MatchRequest {
    pub fn new(seed: u64, home_team: Team, away_team: Team) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed,
            game_speed: default_game_speed(),
            home_team,
            away_team,
            home_tactics: None,
            away_tactics: None,
            hidden_impacts: Vec::new(),
            match_minutes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub home_score: u32,
    pub away_score: u32,
    pub stats: MatchStats,
    /// Every event of the match in the order it happened
    pub events: Vec<MatchEvent>,
}

/// Run a whole match to full time.
pub fn simulate_match(request: MatchRequest) -> Result<MatchResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(MatchError::InvalidRequest(format!(
            "unsupported schema version: {}",
            request.schema_version
        )));
    }

    let MatchRequest {
        seed,
        game_speed,
        home_team,
        away_team,
        home_tactics,
        away_tactics,
        hidden_impacts,
        match_minutes,
        ..
    } = request;

    let defaults = EngineConfig::default();
    let config = EngineConfig {
        seed,
        game_speed,
        match_minutes: match_minutes.unwrap_or(defaults.match_minutes),
        ..defaults
    };

    let setup = MatchSetup::new(home_team, away_team)
        .with_tactics(home_tactics.unwrap_or_default(), away_tactics.unwrap_or_default())
        .with_hidden_impacts(hidden_impacts);

    let mut sim = Simulation::new(setup, config)?;
    let events: Vec<MatchEvent> = sim
        .run_to_full_time()
        .into_iter()
        .filter_map(|update| update.event)
        .collect();

    let stats = sim.stats();
    info!(seed, home = stats.home_score, away = stats.away_score, "headless match finished");

    Ok(MatchResponse { home_score: stats.home_score, away_score: stats.away_score, stats, events })
}

/// JSON in, JSON out.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    let response = simulate_match(request)?;
    Ok(serde_json::to_string(&response)?)
}
