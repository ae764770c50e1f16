//! Pass target selection and pass velocity.

use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::engine::physics_constants::{passing, pitch};
use crate::engine::roster::PitchPlayer;
use crate::engine::types::{attack_dir, opponent_goal_x, PlayerKey, Vec2};
use crate::tactics::Role;

/// Smallest absolute difference between two angles.
fn angle_between(a: f32, b: f32) -> f32 {
    let diff = (a - b).rem_euclid(TAU);
    if diff > PI {
        TAU - diff
    } else {
        diff
    }
}

/// An outfield opponent standing short of the receiver inside the narrow
/// cone around the pass line blocks the lane. Keepers never block.
pub fn is_lane_blocked<'a>(
    from: Vec2,
    to: Vec2,
    opponents: impl IntoIterator<Item = &'a PitchPlayer>,
) -> bool {
    let dist = from.distance(to);
    let angle = from.angle_to(to);
    opponents.into_iter().filter(|o| !o.is_keeper()).any(|o| {
        from.distance(o.pos) < dist - passing::LANE_CLEARANCE
            && angle_between(from.angle_to(o.pos), angle) < passing::LANE_HALF_ANGLE
    })
}

/// Deterministic part of a target's score; the caller adds jitter.
pub fn base_pass_score(passer: &PitchPlayer, target: &PitchPlayer) -> f32 {
    let side = passer.side();
    let dist = passer.pos.distance(target.pos);

    let mut score = passing::BASE_SCORE
        + (target.pos.x - passer.pos.x) * attack_dir(side) * passing::PROGRESS_WEIGHT;

    let in_danger_zone = (target.pos.x - opponent_goal_x(side)).abs()
        < passing::DANGER_ZONE_GOAL_DISTANCE
        && (target.pos.y - pitch::CENTER_Y).abs() < passing::DANGER_ZONE_HALF_HEIGHT;
    if in_danger_zone {
        score += passing::DANGER_ZONE_BONUS;
    }
    if target.role == Role::FWD {
        score += passing::FORWARD_BONUS;
    }
    if dist < passing::SHORT_PASS_DISTANCE {
        score += passing::SHORT_PASS_BONUS;
    }
    score
}

/// Best unblocked teammate between the minimum and maximum pass distance.
///
/// Draws one jitter roll per surviving candidate, in list order.
pub fn find_best_pass_target<R: Rng + ?Sized>(
    passer: &PitchPlayer,
    players: &[PitchPlayer],
    rng: &mut R,
) -> Option<PlayerKey> {
    let side = passer.side();
    let mut best: Option<(PlayerKey, f32)> = None;

    for target in players.iter().filter(|p| p.side() == side && p.key != passer.key) {
        let dist = passer.pos.distance(target.pos);
        if !(passing::MIN_DISTANCE..=passing::MAX_DISTANCE).contains(&dist) {
            continue;
        }
        let opponents = players.iter().filter(|p| p.side() != side);
        if is_lane_blocked(passer.pos, target.pos, opponents) {
            continue;
        }

        let score = base_pass_score(passer, target) + rng.gen::<f32>() * passing::JITTER;
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((target.key, score));
        }
    }

    best.map(|(key, _)| key)
}

/// Pass velocity toward `target`: harder for longer passes, capped by the
/// passer's passing skill.
pub fn pass_velocity(passer: &PitchPlayer, target: Vec2) -> Vec2 {
    let dist = passer.pos.distance(target);
    let max_speed = passing::BASE_MAX_SPEED + passer.skills.passing * passing::SKILL_SPEED;
    let speed = (dist / passing::SPEED_DISTANCE_DIVISOR).clamp(passing::MIN_SPEED, max_speed);
    Vec2::from_angle(passer.pos.angle_to(target), speed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::match_sim::test_fixtures::{create_test_state, NeverRng};
    use crate::models::Side;

    fn key(side: Side, slot: u8) -> PlayerKey {
        PlayerKey::new(side, slot)
    }

    /// Passer, one receiver and one opponent; everyone else parked far away.
    fn lane_setup(receiver: Vec2, opponent: Vec2) -> Vec<PitchPlayer> {
        let state = create_test_state();
        let mut players = state.players;
        for p in players.iter_mut() {
            p.pos = Vec2::new(790.0, 10.0);
        }
        players[key(Side::Home, 5).index()].pos = Vec2::new(300.0, 250.0);
        players[key(Side::Home, 9).index()].pos = receiver;
        players[key(Side::Away, 6).index()].pos = opponent;
        players
    }

    #[test]
    fn test_opponent_in_lane_blocks() {
        let players = lane_setup(Vec2::new(500.0, 250.0), Vec2::new(400.0, 255.0));
        let passer = &players[key(Side::Home, 5).index()];
        let receiver = &players[key(Side::Home, 9).index()];
        let opponents = players.iter().filter(|p| p.side() == Side::Away);
        assert!(is_lane_blocked(passer.pos, receiver.pos, opponents));
        assert_eq!(find_best_pass_target(passer, &players, &mut NeverRng), None);
    }

    #[test]
    fn test_opponent_beyond_receiver_does_not_block() {
        let players = lane_setup(Vec2::new(500.0, 250.0), Vec2::new(495.0, 250.0));
        let passer = &players[key(Side::Home, 5).index()];
        assert_eq!(
            find_best_pass_target(passer, &players, &mut NeverRng),
            Some(key(Side::Home, 9))
        );
    }

    #[test]
    fn test_opponent_outside_cone_does_not_block() {
        let players = lane_setup(Vec2::new(500.0, 250.0), Vec2::new(400.0, 320.0));
        let passer = &players[key(Side::Home, 5).index()];
        assert_eq!(
            find_best_pass_target(passer, &players, &mut NeverRng),
            Some(key(Side::Home, 9))
        );
    }

    #[test]
    fn test_keeper_never_blocks() {
        let mut players = lane_setup(Vec2::new(500.0, 250.0), Vec2::new(790.0, 10.0));
        players[key(Side::Away, 0).index()].pos = Vec2::new(400.0, 250.0);
        let passer = &players[key(Side::Home, 5).index()];
        assert_eq!(
            find_best_pass_target(passer, &players, &mut NeverRng),
            Some(key(Side::Home, 9))
        );
    }

    #[test]
    fn test_distance_window() {
        let too_close = lane_setup(Vec2::new(330.0, 250.0), Vec2::new(10.0, 10.0));
        let passer = &too_close[key(Side::Home, 5).index()];
        assert_eq!(find_best_pass_target(passer, &too_close, &mut NeverRng), None);

        let too_far = lane_setup(Vec2::new(660.0, 250.0), Vec2::new(10.0, 10.0));
        let passer = &too_far[key(Side::Home, 5).index()];
        assert_eq!(find_best_pass_target(passer, &too_far, &mut NeverRng), None);
    }

    #[test]
    fn test_forward_progress_preferred() {
        let mut players = lane_setup(Vec2::new(450.0, 250.0), Vec2::new(10.0, 10.0));
        // Square option at the same distance.
        players[key(Side::Home, 6).index()].pos = Vec2::new(300.0, 400.0);
        let passer = &players[key(Side::Home, 5).index()];
        let forward = &players[key(Side::Home, 9).index()];
        let square = &players[key(Side::Home, 6).index()];
        assert!(base_pass_score(passer, forward) > base_pass_score(passer, square));
    }

    #[test]
    fn test_pass_velocity_bounds() {
        let state = create_test_state();
        let mut passer = state.players[key(Side::Home, 5).index()].clone();
        passer.pos = Vec2::new(100.0, 250.0);
        passer.skills.passing = 0.5;

        let short = pass_velocity(&passer, Vec2::new(160.0, 250.0));
        assert!((short.length() - 4.0).abs() < 1e-4);

        let medium = pass_velocity(&passer, Vec2::new(250.0, 250.0));
        assert!((medium.length() - 5.0).abs() < 1e-4);

        let long = pass_velocity(&passer, Vec2::new(400.0, 250.0));
        assert!((long.length() - 8.0).abs() < 1e-4);
        assert!(long.x > 0.0 && long.y.abs() < 1e-4);
    }

    #[test]
    fn test_angle_between_wraps() {
        assert!((angle_between(PI - 0.1, -PI + 0.1) - 0.2).abs() < 1e-5);
        assert!(angle_between(0.3, 0.3) < 1e-6);
    }
}
