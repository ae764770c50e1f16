//! Possession bookkeeping: who holds the ball, who last released it, and
//! per-player turnover cooldowns.
//!
//! At most one player holds the ball. The holder is the only source of
//! truth for the carrier; the ball's position is derived from it.

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::physics_constants::possession as consts;
use super::roster::PitchPlayer;
use super::types::PlayerKey;
use crate::models::Side;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Possession {
    pub holder: Option<PlayerKey>,
    /// Clock time (ms) the current holder gained the ball
    pub started_ms: u64,
    /// Last player to release the ball, until someone collects it
    pub previous: Option<PlayerKey>,
    /// Player -> clock time (ms) until which they cannot collect a loose ball
    pub cooldowns: FxHashMap<PlayerKey, u64>,
}

impl Possession {
    #[inline]
    pub fn holder_side(&self) -> Option<Side> {
        self.holder.map(|k| k.side)
    }

    #[inline]
    pub fn is_held_by(&self, key: PlayerKey) -> bool {
        self.holder == Some(key)
    }

    /// How long the current holder has had the ball.
    pub fn held_for_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms)
    }

    pub fn on_cooldown(&self, key: PlayerKey, now_ms: u64) -> bool {
        self.cooldowns.get(&key).is_some_and(|&until| now_ms < until)
    }

    /// Collect a loose ball. If it last left an opponent, that opponent
    /// cannot re-collect it for a moment.
    pub fn collect(&mut self, key: PlayerKey, now_ms: u64) {
        if let Some(prev) = self.previous.take() {
            if prev.side != key.side {
                self.cooldowns.insert(prev, now_ms.saturating_add(consts::TURNOVER_COOLDOWN_MS));
            }
        }
        self.holder = Some(key);
        self.started_ms = now_ms;
    }

    /// Keeper claims a shot.
    pub fn claim_save(&mut self, keeper: PlayerKey, now_ms: u64) {
        self.holder = Some(keeper);
        self.started_ms = now_ms;
        self.previous = None;
    }

    /// Pass or shot: the ball goes loose and remembers who kicked it.
    pub fn release(&mut self, by: PlayerKey) {
        if self.holder == Some(by) {
            self.holder = None;
        }
        self.previous = Some(by);
    }

    /// Successful tackle. Returns the dispossessed player, or `None` when
    /// nobody was holding the ball.
    pub fn dispossess(&mut self, tackler: PlayerKey, now_ms: u64) -> Option<PlayerKey> {
        let victim = self.holder?;
        self.cooldowns.insert(victim, now_ms.saturating_add(consts::TURNOVER_COOLDOWN_MS));
        self.previous = Some(victim);
        self.holder = Some(tackler);
        self.started_ms = now_ms;
        Some(victim)
    }

    /// Drop expired cooldown entries.
    pub fn prune_cooldowns(&mut self, now_ms: u64) {
        self.cooldowns.retain(|_, until| now_ms < *until);
    }
}

/// The keeper, if any, who saves a shot in flight.
///
/// Only a shot moving faster than the save threshold can be saved; when
/// both keepers are in range the nearer one claims it.
pub fn find_saving_keeper(ball: &Ball, players: &[PitchPlayer]) -> Option<PlayerKey> {
    if !ball.in_flight_from_shot || ball.speed() <= consts::SAVE_MIN_BALL_SPEED {
        return None;
    }
    players
        .iter()
        .filter(|p| p.is_keeper())
        .map(|p| (p.key, p.pos.distance(ball.pos)))
        .filter(|&(_, d)| d < consts::SAVE_DISTANCE)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(key, _)| key)
}

/// The player who collects a loose ball this tick, if any.
///
/// Nearest eligible player strictly inside the control distance wins.
/// Players on cooldown are skipped, as is the last releaser while the ball
/// is still moving away from them.
pub fn find_collector(
    ball: &Ball,
    players: &[PitchPlayer],
    possession: &Possession,
    now_ms: u64,
) -> Option<PlayerKey> {
    if possession.holder.is_some() {
        return None;
    }
    let speed = ball.speed();
    if speed >= consts::PICKUP_MAX_BALL_SPEED {
        return None;
    }

    let mut best: Option<(PlayerKey, f32)> = None;
    for player in players {
        if possession.on_cooldown(player.key, now_ms) {
            continue;
        }
        if possession.previous == Some(player.key) && speed > consts::DEPARTING_BALL_SPEED {
            continue;
        }
        let d = player.pos.distance(ball.pos);
        let limit = best.map_or(consts::CONTROL_DISTANCE, |(_, bd)| bd);
        if d < limit {
            best = Some((player.key, d));
        }
    }
    best.map(|(key, _)| key)
}
