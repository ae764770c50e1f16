//! Per-player decision for one tick: where to run, whether to sprint, and
//! at most one on-ball action.
//!
//! Decisions read the state as already mutated by players earlier in the
//! tick, so a pass by one player is visible to the next.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::match_sim::{
    find_best_pass_target, in_shooting_range, in_tackle_range, pass_velocity, shot_chance,
    shot_velocity, tackle_chance,
};
use super::physics_constants::{decision, pitch, possession as possession_consts};
use super::possession::Possession;
use super::roster::PitchPlayer;
use super::types::{attack_dir, own_goal_x, team_push, PlayerKey, Vec2};
use crate::tactics::Role;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BallAction {
    Pass { target: PlayerKey, velocity: Vec2 },
    Shot { velocity: Vec2 },
    Tackle { victim: PlayerKey },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub target: Vec2,
    pub sprint: bool,
    pub action: Option<BallAction>,
}

/// Read-only view of the match used by [`decide`].
pub struct DecisionContext<'a> {
    pub players: &'a [PitchPlayer],
    pub ball: &'a Ball,
    pub possession: &'a Possession,
    pub now_ms: u64,
}

impl DecisionContext<'_> {
    fn player(&self, key: PlayerKey) -> Option<&PitchPlayer> {
        self.players.get(key.index())
    }
}

pub fn decide<R: Rng + ?Sized>(
    player: &PitchPlayer,
    ctx: &DecisionContext<'_>,
    rng: &mut R,
) -> Decision {
    let side = player.side();
    let dir = attack_dir(side);
    let holder_side = ctx.possession.holder_side();
    let push = team_push(side, holder_side);

    let mut out = Decision {
        target: Vec2::new(
            player.anchor.x
                + push * (decision::PUSH_BASE_WEIGHT + f32::from(player.line) * decision::PUSH_LINE_WEIGHT),
            player.anchor.y,
        ),
        sprint: false,
        action: None,
    };

    let has_ball = ctx.possession.is_held_by(player.key);

    if player.role == Role::GK {
        if has_ball {
            out.action = keeper_distribution(player, ctx, rng);
        } else {
            out.target = Vec2::new(
                own_goal_x(side) + dir * decision::KEEPER_LINE_OFFSET,
                pitch::CENTER_Y + (ctx.ball.pos.y - pitch::CENTER_Y) * decision::KEEPER_SHADE_WEIGHT,
            );
        }
        return out;
    }

    if has_ball {
        out.target.x = player.pos.x + dir * decision::DRIBBLE_STEP;
        out.action = carrier_action(player, ctx, rng);
        return out;
    }

    match holder_side {
        Some(h) if h == side => {
            out.target.x += player.run_phase().sin() * decision::DRIFT_AMPLITUDE;
            if player.role == Role::FWD {
                out.target.x += dir * decision::FORWARD_RUN;
                out.sprint = true;
            }
        }
        Some(_) => {
            out.target.x -= dir * decision::DEFENSIVE_DROP;
            out.target.y =
                player.anchor.y + (ctx.ball.pos.y - pitch::CENTER_Y) * decision::BALL_SIDE_SHIFT;

            let dist = player.pos.distance(ctx.ball.pos);
            if dist < decision::PRESS_RADIUS {
                out.target = Vec2::new(
                    ctx.ball.pos.x - dir * decision::PRESS_GOAL_SIDE_OFFSET,
                    ctx.ball.pos.y,
                );
                out.sprint = true;

                if in_tackle_range(player, ctx.ball.pos) && rng.gen::<f32>() < tackle_chance(player) {
                    if let Some(victim) = ctx.possession.holder {
                        out.action = Some(BallAction::Tackle { victim });
                    }
                }
            }
        }
        None => {
            if player.pos.distance(ctx.ball.pos) < decision::LOOSE_BALL_CHASE_RADIUS {
                out.target = ctx.ball.pos;
                out.sprint = true;
            }
        }
    }

    out
}

/// After holding for a moment, the keeper occasionally rolls it out to the
/// first outfield teammate in the back two lines.
fn keeper_distribution<R: Rng + ?Sized>(
    keeper: &PitchPlayer,
    ctx: &DecisionContext<'_>,
    rng: &mut R,
) -> Option<BallAction> {
    if ctx.possession.held_for_ms(ctx.now_ms) < possession_consts::KEEPER_HOLD_MS {
        return None;
    }
    if rng.gen::<f32>() >= possession_consts::KEEPER_DISTRIBUTION_CHANCE {
        return None;
    }
    let outlet = ctx.players.iter().find(|p| {
        p.side() == keeper.side()
            && !p.is_keeper()
            && p.line <= decision::KEEPER_OUTLET_MAX_LINE
    })?;
    Some(BallAction::Pass { target: outlet.key, velocity: pass_velocity(keeper, outlet.pos) })
}

/// Shoot when in range, otherwise look for a pass; keep dribbling if neither.
fn carrier_action<R: Rng + ?Sized>(
    carrier: &PitchPlayer,
    ctx: &DecisionContext<'_>,
    rng: &mut R,
) -> Option<BallAction> {
    if in_shooting_range(carrier) && rng.gen::<f32>() < shot_chance(carrier) {
        let aim_roll: f32 = rng.gen();
        return Some(BallAction::Shot { velocity: shot_velocity(carrier, aim_roll) });
    }

    let pass_chance =
        decision::PASS_BASE_CHANCE + carrier.skills.passing * decision::PASS_SKILL_CHANCE;
    if rng.gen::<f32>() < pass_chance {
        let target = find_best_pass_target(carrier, ctx.players, rng)?;
        let receiver = ctx.player(target)?;
        return Some(BallAction::Pass { target, velocity: pass_velocity(carrier, receiver.pos) });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::match_sim::test_fixtures::{
        create_test_state, give_ball, place, AlwaysRng, NeverRng,
    };
    use crate::engine::match_state::MatchState;
    use crate::models::Side;

    fn key(side: Side, slot: u8) -> PlayerKey {
        PlayerKey::new(side, slot)
    }

    fn decide_for(state: &MatchState, who: PlayerKey, rng: &mut impl Rng) -> Decision {
        let ctx = DecisionContext {
            players: &state.players,
            ball: &state.ball,
            possession: &state.possession,
            now_ms: state.clock_ms,
        };
        decide(&state.players[who.index()], &ctx, rng)
    }

    #[test]
    fn test_keeper_shades_toward_ball() {
        let mut state = create_test_state();
        state.ball.pos = Vec2::new(300.0, 450.0);
        let d = decide_for(&state, key(Side::Home, 0), &mut NeverRng);
        assert_eq!(d.target, Vec2::new(20.0, 350.0));

        let d = decide_for(&state, key(Side::Away, 0), &mut NeverRng);
        assert_eq!(d.target, Vec2::new(780.0, 350.0));
        assert!(d.action.is_none());
    }

    #[test]
    fn test_keeper_waits_before_distributing() {
        let mut state = create_test_state();
        let gk = key(Side::Home, 0);
        give_ball(&mut state, gk);

        state.clock_ms = 500;
        assert!(decide_for(&state, gk, &mut AlwaysRng).action.is_none());

        state.clock_ms = 1_000;
        match decide_for(&state, gk, &mut AlwaysRng).action {
            Some(BallAction::Pass { target, .. }) => assert_eq!(target, key(Side::Home, 1)),
            other => panic!("expected distribution, got {:?}", other),
        }
    }

    #[test]
    fn test_carrier_shoots_in_range() {
        let mut state = create_test_state();
        let st = key(Side::Home, 9);
        place(&mut state, st, Vec2::new(680.0, 250.0));
        give_ball(&mut state, st);

        let d = decide_for(&state, st, &mut AlwaysRng);
        assert!(matches!(d.action, Some(BallAction::Shot { .. })));
        assert_eq!(d.target.x, 720.0);

        let d = decide_for(&state, st, &mut NeverRng);
        assert!(d.action.is_none());
    }

    #[test]
    fn test_carrier_out_of_range_passes() {
        let mut state = create_test_state();
        let cm = key(Side::Home, 6);
        give_ball(&mut state, cm);

        let d = decide_for(&state, cm, &mut AlwaysRng);
        assert!(matches!(d.action, Some(BallAction::Pass { .. })));
    }

    #[test]
    fn test_supporting_forward_sprints_upfield() {
        let mut state = create_test_state();
        give_ball(&mut state, key(Side::Home, 6));

        let fwd = key(Side::Home, 9);
        let d = decide_for(&state, fwd, &mut NeverRng);
        assert!(d.sprint);
        let anchor = state.players[fwd.index()].anchor;
        // push 150 * (0.3 + 3 * 0.25) = 157.5, plus the 50 run, +/- 20 drift
        assert!(d.target.x >= anchor.x + 157.5 + 50.0 - 20.0 - 1e-3);
        assert!(d.target.x <= anchor.x + 157.5 + 50.0 + 20.0 + 1e-3);
    }

    #[test]
    fn test_presser_tackles_when_close() {
        let mut state = create_test_state();
        let carrier = key(Side::Home, 6);
        let presser = key(Side::Away, 6);
        place(&mut state, carrier, Vec2::new(300.0, 250.0));
        give_ball(&mut state, carrier);
        place(&mut state, presser, Vec2::new(318.0, 252.0));

        let d = decide_for(&state, presser, &mut AlwaysRng);
        assert!(d.sprint);
        assert_eq!(d.target, Vec2::new(state.ball.pos.x + 10.0, state.ball.pos.y));
        assert_eq!(d.action, Some(BallAction::Tackle { victim: carrier }));

        assert!(decide_for(&state, presser, &mut NeverRng).action.is_none());
    }

    #[test]
    fn test_loose_ball_chase_radius() {
        let mut state = create_test_state();
        state.ball.pos = Vec2::new(400.0, 250.0);
        let near = key(Side::Home, 9);
        let far = key(Side::Home, 1);

        let d = decide_for(&state, near, &mut NeverRng);
        assert!(d.sprint);
        assert_eq!(d.target, state.ball.pos);

        let d = decide_for(&state, far, &mut NeverRng);
        assert!(!d.sprint);
        assert_eq!(d.target, state.players[far.index()].anchor);
    }
}
