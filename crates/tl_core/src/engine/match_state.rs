//! Match state and the pure tick function.
//!
//! `advance(prev, inputs, rng)` clones `prev`, runs one tick on the copy
//! and returns it with the updates the tick produced. A tick runs in a
//! fixed order:
//!
//! 1. Ball: snap to the carrier, or fly free and check goal, save, pickup
//! 2. Decisions: every player in list order (home then away), each seeing
//!    the effects of earlier passes, shots and tackles this tick
//! 3. Motion: integrate every player toward their target
//! 4. Re-derive the carried ball from the carrier's new position
//! 5. Advance the match minute; full time ends play

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::ball::{goal_scored, Ball};
use super::events::{EventLog, MatchSnapshot, MatchUpdate};
use super::match_modifiers::HiddenImpactTable;
use super::physics_constants::player as player_consts;
use super::player_decision::{decide, BallAction, DecisionContext};
use super::player_physics::{effective_max_speed, update_player_motion};
use super::possession::{find_collector, find_saving_keeper, Possession};
use super::roster::PitchPlayer;
use super::stats::{MatchStats, StatsCalculator};
use super::timestep::{advance_minute, crossed_minute};
use super::types::{PlayerKey, Vec2};
use crate::models::{MatchEvent, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayState {
    Live,
    /// Frozen after a goal; restarts from kickoff once the clock reaches `until_ms`
    GoalCelebration { until_ms: u64, scorer: Side },
    FullTime,
}

/// Coarse label for scoreboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum MatchPhase {
    KickOff,
    HomeAttack,
    AwayAttack,
    MidfieldBattle,
    GoalCelebration,
    FullTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Real-time clock (ms), sum of frame durations
    pub clock_ms: u64,
    /// Match minute, fractional
    pub minute: f32,
    pub home_score: u32,
    pub away_score: u32,
    pub ball: Ball,
    /// Home slots 0..11 then away slots 0..11; see [`PlayerKey::index`]
    pub players: Vec<PitchPlayer>,
    pub possession: Possession,
    pub play: PlayState,
    pub events: EventLog,
    pub stats: StatsCalculator,
}

/// Per-tick inputs that are not part of the state.
#[derive(Debug, Clone, Copy)]
pub struct StepInputs<'a> {
    /// Real time elapsed since the previous tick (ms)
    pub frame_ms: u64,
    /// Finite and positive
    pub game_speed: f32,
    pub match_minutes: u32,
    pub goal_freeze_ms: u64,
    pub impacts: &'a HiddenImpactTable,
    pub home_name: &'a str,
    pub away_name: &'a str,
}

#[derive(Debug, Clone)]
pub struct StepResult {
    pub state: MatchState,
    pub updates: Vec<MatchUpdate>,
}

/// Run one tick on a copy of `prev`.
pub fn advance<R: Rng + ?Sized>(
    prev: &MatchState,
    inputs: &StepInputs<'_>,
    rng: &mut R,
) -> StepResult {
    let mut state = prev.clone();
    let updates = state.apply_tick(inputs, rng);
    StepResult { state, updates }
}

impl MatchState {
    pub fn new(home: Vec<PitchPlayer>, away: Vec<PitchPlayer>, event_capacity: usize) -> Self {
        let mut players = home;
        players.extend(away);
        Self {
            clock_ms: 0,
            minute: 0.0,
            home_score: 0,
            away_score: 0,
            ball: Ball::at_center(),
            players,
            possession: Possession::default(),
            play: PlayState::Live,
            events: EventLog::with_capacity(event_capacity),
            stats: StatsCalculator::default(),
        }
    }

    pub fn player(&self, key: PlayerKey) -> Option<&PitchPlayer> {
        self.players.get(key.index())
    }

    pub fn carrier(&self) -> Option<&PitchPlayer> {
        self.possession.holder.and_then(|key| self.player(key))
    }

    #[inline]
    pub fn whole_minute(&self) -> u32 {
        self.minute.floor() as u32
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.play, PlayState::FullTime)
    }

    pub fn phase(&self) -> MatchPhase {
        match self.play {
            PlayState::FullTime => return MatchPhase::FullTime,
            PlayState::GoalCelebration { .. } => return MatchPhase::GoalCelebration,
            PlayState::Live => {}
        }
        match self.possession.holder_side() {
            Some(Side::Home) => MatchPhase::HomeAttack,
            Some(Side::Away) => MatchPhase::AwayAttack,
            None if self.ball == Ball::at_center() => MatchPhase::KickOff,
            None => MatchPhase::MidfieldBattle,
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            minute: self.whole_minute(),
            home_score: self.home_score,
            away_score: self.away_score,
            events: self.events.to_vec(),
        }
    }

    pub fn summary(&self) -> MatchStats {
        MatchStats {
            home_score: self.home_score,
            away_score: self.away_score,
            possession: self.stats.possession_home_pct(),
            home: self.stats.home,
            away: self.stats.away,
            minute: self.whole_minute(),
            phase: self.phase(),
            events: self.events.to_vec(),
        }
    }

    /// Ball to the centre spot, everyone back on their anchors, possession
    /// history and cooldowns cleared.
    pub fn reset_for_kickoff(&mut self) {
        self.ball = Ball::at_center();
        self.possession = Possession::default();
        for player in self.players.iter_mut() {
            player.return_to_anchor();
        }
    }

    /// Run one tick in place. [`advance`] is the copy-then-commit wrapper.
    pub fn apply_tick<R: Rng + ?Sized>(
        &mut self,
        inputs: &StepInputs<'_>,
        rng: &mut R,
    ) -> Vec<MatchUpdate> {
        self.clock_ms = self.clock_ms.saturating_add(inputs.frame_ms);

        match self.play {
            PlayState::FullTime => return Vec::new(),
            PlayState::GoalCelebration { until_ms, .. } => {
                if self.clock_ms >= until_ms {
                    self.reset_for_kickoff();
                    self.play = PlayState::Live;
                    debug!(clock_ms = self.clock_ms, "restart after goal");
                }
                return Vec::new();
            }
            PlayState::Live => {}
        }

        let now = self.clock_ms;
        let mut updates = Vec::new();
        self.possession.prune_cooldowns(now);

        // 1. Ball
        if let Some(key) = self.possession.holder {
            let carrier_pos = self.players[key.index()].pos;
            self.ball.attach_to(carrier_pos, key.side);
        } else {
            self.ball.integrate(inputs.game_speed);

            if let Some(scorer) = goal_scored(self.ball.pos) {
                self.record_goal(scorer, inputs, &mut updates);
                return updates;
            }

            if let Some(keeper) = find_saving_keeper(&self.ball, &self.players) {
                self.possession.claim_save(keeper, now);
                self.ball.in_flight_from_shot = false;
                self.stats.record_save(keeper.side);
                debug!(keeper = %keeper, "save");
                self.emit(MatchEvent::save(self.whole_minute(), keeper.side), &mut updates);
            }

            if let Some(collector) =
                find_collector(&self.ball, &self.players, &self.possession, now)
            {
                self.possession.collect(collector, now);
                self.ball.in_flight_from_shot = false;
                trace!(player = %collector, "ball collected");
            }
        }
        self.stats.record_possession(self.possession.holder_side());

        // 2. Decisions
        for player in self.players.iter_mut() {
            player.run_timer += player_consts::RUN_TIMER_STEP * inputs.game_speed;
        }
        let mut plans: Vec<(Vec2, bool)> = Vec::with_capacity(self.players.len());
        for idx in 0..self.players.len() {
            let decision = {
                let ctx = DecisionContext {
                    players: &self.players,
                    ball: &self.ball,
                    possession: &self.possession,
                    now_ms: now,
                };
                decide(&self.players[idx], &ctx, rng)
            };
            if let Some(action) = decision.action {
                self.apply_action(idx, action, now, &mut updates);
            }
            plans.push((decision.target, decision.sprint));
        }

        // 3. Motion
        for (player, (target, sprint)) in self.players.iter_mut().zip(plans) {
            let max_speed = effective_max_speed(
                player.skills.speed,
                inputs.impacts.performance_mod(&player.roster_id),
                sprint,
            );
            let (pos, vel) =
                update_player_motion(player.pos, player.vel, target, max_speed, inputs.game_speed);
            player.pos = pos;
            player.vel = vel;
        }

        // 4. Carried ball follows the carrier
        if let Some(key) = self.possession.holder {
            let carrier_pos = self.players[key.index()].pos;
            self.ball.attach_to(carrier_pos, key.side);
        }

        // 5. Clock
        let previous = self.minute;
        self.minute = advance_minute(previous, inputs.game_speed);
        let full_time_at = inputs.match_minutes as f32;
        if self.minute >= full_time_at {
            self.minute = full_time_at;
            self.play = PlayState::FullTime;
            info!(home = self.home_score, away = self.away_score, "full time");
            let event = MatchEvent::full_time(inputs.match_minutes, self.home_score, self.away_score);
            self.emit(event, &mut updates);
        } else if crossed_minute(previous, self.minute) {
            updates.push(self.update(None));
        }

        updates
    }

    fn apply_action(
        &mut self,
        idx: usize,
        action: BallAction,
        now: u64,
        updates: &mut Vec<MatchUpdate>,
    ) {
        let actor = self.players[idx].key;
        match action {
            BallAction::Pass { target, velocity } => {
                if !self.possession.is_held_by(actor) {
                    return;
                }
                self.ball.vel = velocity;
                self.ball.in_flight_from_shot = false;
                self.possession.release(actor);
                trace!(from = %actor, to = %target, "pass");
            }
            BallAction::Shot { velocity } => {
                if !self.possession.is_held_by(actor) {
                    return;
                }
                self.ball.vel = velocity;
                self.ball.in_flight_from_shot = true;
                self.possession.release(actor);
                self.stats.record_shot(actor.side);
                let event = MatchEvent::shot(self.whole_minute(), actor.side, &self.players[idx].name);
                debug!(shooter = %self.players[idx].name, "shot");
                self.emit(event, updates);
            }
            BallAction::Tackle { victim } => {
                if !self.possession.is_held_by(victim) {
                    return;
                }
                self.possession.dispossess(actor, now);
                self.ball.in_flight_from_shot = false;
                self.stats.record_tackle(actor.side);
                let event =
                    MatchEvent::tackle(self.whole_minute(), actor.side, &self.players[idx].name);
                debug!(tackler = %self.players[idx].name, victim = %victim, "tackle");
                self.emit(event, updates);
            }
        }
    }

    fn record_goal(&mut self, scorer: Side, inputs: &StepInputs<'_>, updates: &mut Vec<MatchUpdate>) {
        match scorer {
            Side::Home => self.home_score += 1,
            Side::Away => self.away_score += 1,
        }
        self.stats.record_goal(scorer);
        self.ball.in_flight_from_shot = false;
        self.play = PlayState::GoalCelebration {
            until_ms: self.clock_ms.saturating_add(inputs.goal_freeze_ms),
            scorer,
        };

        let team_name = match scorer {
            Side::Home => inputs.home_name,
            Side::Away => inputs.away_name,
        };
        info!(
            minute = self.whole_minute(),
            team = team_name,
            home = self.home_score,
            away = self.away_score,
            "goal"
        );
        self.emit(MatchEvent::goal(self.whole_minute(), scorer, team_name), updates);
    }

    fn update(&self, event: Option<MatchEvent>) -> MatchUpdate {
        MatchUpdate {
            minute: self.minute,
            home_score: self.home_score,
            away_score: self.away_score,
            event,
        }
    }

    fn emit(&mut self, event: MatchEvent, updates: &mut Vec<MatchUpdate>) {
        self.events.push(event.clone());
        updates.push(self.update(Some(event)));
    }
}
