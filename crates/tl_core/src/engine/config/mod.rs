//! # Engine Configuration
//!
//! Run-level knobs: seed, game speed, clock and logging limits, lineup
//! policy. Pitch and physics constants live in `physics_constants` and are
//! not configurable.
//!
//! ## Usage
//! ```rust
//! use tl_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let quick = EngineConfig::quick_sim(7);
//! assert!(quick.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::events::DEFAULT_EVENT_LOG_CAPACITY;
use super::roster::LineupPolicy;
use super::timestep::FRAME_MS;
use crate::error::{MatchError, Result};

/// Upper bound on game speed; past this a single tick skips whole passes.
pub const MAX_GAME_SPEED: f32 = 16.0;

/// Upper bound on `frame_ms` and `goal_freeze_ms`.
pub const MAX_DURATION_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub seed: u64,
    /// Scales ball and player displacement and minute advance per tick
    pub game_speed: f32,
    /// Frame duration used by `Simulation::tick` (ms)
    pub frame_ms: u64,
    /// Freeze after a goal before the kickoff reset (ms)
    pub goal_freeze_ms: u64,
    pub match_minutes: u32,
    pub event_log_capacity: usize,
    pub lineup_policy: LineupPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            game_speed: 1.0,
            frame_ms: FRAME_MS,
            goal_freeze_ms: 3000,
            match_minutes: 90,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
            lineup_policy: LineupPolicy::Positional,
        }
    }
}

impl EngineConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// Headless preset: 4x speed, same clock rules.
    pub fn quick_sim(seed: u64) -> Self {
        Self { seed, game_speed: 4.0, ..Self::default() }
    }

    pub fn validate(&self) -> Result<()> {
        validate_game_speed(self.game_speed)?;
        if !(1..=MAX_DURATION_MS).contains(&self.frame_ms) {
            return Err(MatchError::InvalidConfig(format!(
                "frame_ms must be in 1..={}, got {}",
                MAX_DURATION_MS, self.frame_ms
            )));
        }
        if self.goal_freeze_ms > MAX_DURATION_MS {
            return Err(MatchError::InvalidConfig(format!(
                "goal_freeze_ms must be at most {}, got {}",
                MAX_DURATION_MS, self.goal_freeze_ms
            )));
        }
        if self.match_minutes == 0 {
            return Err(MatchError::InvalidConfig("match_minutes must be at least 1".into()));
        }
        if !(1..=DEFAULT_EVENT_LOG_CAPACITY).contains(&self.event_log_capacity) {
            return Err(MatchError::InvalidConfig(format!(
                "event_log_capacity must be in 1..={}, got {}",
                DEFAULT_EVENT_LOG_CAPACITY, self.event_log_capacity
            )));
        }
        Ok(())
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json` file, or YAML for any other extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }
}

pub fn validate_game_speed(game_speed: f32) -> Result<()> {
    if !game_speed.is_finite() || game_speed <= 0.0 || game_speed > MAX_GAME_SPEED {
        return Err(MatchError::InvalidConfig(format!(
            "game_speed must be in (0, {}], got {}",
            MAX_GAME_SPEED, game_speed
        )));
    }
    Ok(())
}
