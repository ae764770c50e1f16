//! Live Match Session
//!
//! `Simulation` is the owning host handle: it holds the committed
//! `MatchState`, the seeded RNG and the run configuration, and drives one
//! tick per host frame through the pure [`advance`] step.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::config::{validate_game_speed, EngineConfig};
use super::events::{MatchSnapshot, MatchUpdate};
use super::match_modifiers::HiddenImpactTable;
use super::match_state::{advance, MatchPhase, MatchState, StepInputs};
use super::roster::build_side;
use super::stats::MatchStats;
use crate::error::Result;
use crate::models::{HiddenImpact, MatchSetup, Side};

#[derive(Debug, Clone)]
pub struct Simulation {
    setup: MatchSetup,
    config: EngineConfig,
    impacts: HiddenImpactTable,
    rng: ChaCha8Rng,
    state: MatchState,
}

impl Simulation {
    /// Lay out both sides (home first, same RNG stream) and place the ball
    /// on the centre spot.
    pub fn new(setup: MatchSetup, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        setup.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let state = kickoff_state(&setup, &config, &mut rng)?;
        let impacts = HiddenImpactTable::from_impacts(&setup.hidden_impacts);

        info!(
            home = %setup.home.name,
            away = %setup.away.name,
            seed = config.seed,
            game_speed = config.game_speed,
            impacts = impacts.len(),
            "match created"
        );

        Ok(Self { setup, config, impacts, rng, state })
    }

    /// Advance by one frame of `frame_ms` wall-clock milliseconds.
    pub fn step(&mut self, frame_ms: u64) -> Vec<MatchUpdate> {
        let inputs = StepInputs {
            frame_ms,
            game_speed: self.config.game_speed,
            match_minutes: self.config.match_minutes,
            goal_freeze_ms: self.config.goal_freeze_ms,
            impacts: &self.impacts,
            home_name: &self.setup.home.name,
            away_name: &self.setup.away.name,
        };
        let result = advance(&self.state, &inputs, &mut self.rng);
        self.state = result.state;
        result.updates
    }

    /// Advance by the configured frame duration.
    pub fn tick(&mut self) -> Vec<MatchUpdate> {
        self.step(self.config.frame_ms)
    }

    /// Tick until full time, collecting every update.
    pub fn run_to_full_time(&mut self) -> Vec<MatchUpdate> {
        let mut updates = Vec::new();
        while !self.state.is_finished() {
            updates.extend(self.tick());
        }
        updates
    }

    /// Start the same fixture over from kickoff with the configured seed.
    /// Any pending goal celebration belongs to the old state and is dropped.
    pub fn restart(&mut self) -> Result<()> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.state = kickoff_state(&self.setup, &self.config, &mut rng)?;
        self.rng = rng;
        debug!(seed = self.config.seed, "match restarted");
        Ok(())
    }

    pub fn set_game_speed(&mut self, game_speed: f32) -> Result<()> {
        validate_game_speed(game_speed)?;
        self.config.game_speed = game_speed;
        Ok(())
    }

    /// Merge impacts from a team talk resolved after creation; later
    /// entries replace earlier ones for the same player.
    pub fn apply_hidden_impacts(&mut self, impacts: &[HiddenImpact]) {
        self.impacts.merge(impacts);
        self.setup.hidden_impacts.extend_from_slice(impacts);
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn setup(&self) -> &MatchSetup {
        &self.setup
    }

    pub fn team_name(&self, side: Side) -> &str {
        &self.setup.team(side).name
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.state.snapshot()
    }

    pub fn stats(&self) -> MatchStats {
        self.state.summary()
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }
}

fn kickoff_state(
    setup: &MatchSetup,
    config: &EngineConfig,
    rng: &mut ChaCha8Rng,
) -> Result<MatchState> {
    let home = build_side(&setup.home, &setup.home_tactics, Side::Home, config.lineup_policy, rng)?;
    let away = build_side(&setup.away, &setup.away_tactics, Side::Away, config.lineup_policy, rng)?;
    Ok(MatchState::new(home, away, config.event_log_capacity))
}
