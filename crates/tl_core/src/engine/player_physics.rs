//! Player Motion Physics
//!
//! Steering toward a target with capped acceleration, braking on arrival,
//! friction, and a hard clamp to the pitch.
//!
//! ```ignore
//! let max_speed = effective_max_speed(skills.speed, performance_mod, sprint);
//! let (pos, vel) = update_player_motion(pos, vel, target, max_speed, game_speed);
//! ```

use super::physics_constants::{pitch, player};
use super::types::Vec2;

/// Top speed from pace, hidden performance modifier and sprint state.
pub fn effective_max_speed(speed_skill: f32, performance_mod: f32, sprint: bool) -> f32 {
    let base = player::BASE_MAX_SPEED
        * (1.0 + speed_skill * player::SPEED_SKILL_WEIGHT + performance_mod * player::HIDDEN_MOD_WEIGHT);
    if sprint {
        base * player::SPRINT_MULTIPLIER
    } else {
        base
    }
}

/// One tick of motion. Returns the new `(pos, vel)`.
pub fn update_player_motion(
    pos: Vec2,
    vel: Vec2,
    target: Vec2,
    max_speed: f32,
    game_speed: f32,
) -> (Vec2, Vec2) {
    let to_target = target - pos;
    let mut vel = if to_target.length() > player::ARRIVAL_THRESHOLD {
        let accelerated = vel + to_target.normalize() * player::ACCELERATION;
        let speed = accelerated.length();
        if speed > max_speed {
            accelerated * (max_speed / speed)
        } else {
            accelerated
        }
    } else {
        vel * player::ARRIVAL_DAMPING
    };

    vel = vel * player::FRICTION;
    let moved = pos + vel * game_speed;
    (clamp_to_pitch(moved), vel)
}

#[inline]
pub fn clamp_to_pitch(pos: Vec2) -> Vec2 {
    Vec2::new(
        pos.x.clamp(player::RADIUS, pitch::WIDTH - player::RADIUS),
        pos.y.clamp(player::RADIUS, pitch::HEIGHT - player::RADIUS),
    )
}
