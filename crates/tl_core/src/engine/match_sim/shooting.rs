//! Shot range, shot chance and shot velocity.

use crate::engine::physics_constants::{decision, pitch, shooting};
use crate::engine::roster::PitchPlayer;
use crate::engine::types::{opponent_goal_x, Vec2};

/// Within shooting distance of the opponent's goal line.
pub fn in_shooting_range(player: &PitchPlayer) -> bool {
    (player.pos.x - opponent_goal_x(player.side())).abs() < decision::SHOOTING_RANGE
}

/// Per-tick probability that a carrier in range shoots.
pub fn shot_chance(player: &PitchPlayer) -> f32 {
    decision::SHOT_BASE_CHANCE + player.skills.shooting * decision::SHOT_SKILL_CHANCE
}

/// Point on the goal line the shot is aimed at. `aim_roll` in [0, 1)
/// spreads the aim across most of the goal mouth.
pub fn aim_point(player: &PitchPlayer, aim_roll: f32) -> Vec2 {
    let y = pitch::CENTER_Y + (aim_roll - 0.5) * pitch::GOAL_WIDTH * shooting::AIM_SPREAD;
    Vec2::new(opponent_goal_x(player.side()), y)
}

pub fn shot_power(player: &PitchPlayer) -> f32 {
    shooting::POWER
        * (shooting::POWER_BASE_FACTOR + player.skills.shooting * shooting::POWER_SKILL_FACTOR)
}

pub fn shot_velocity(player: &PitchPlayer, aim_roll: f32) -> Vec2 {
    let aim = aim_point(player, aim_roll);
    Vec2::from_angle(player.pos.angle_to(aim), shot_power(player))
}
