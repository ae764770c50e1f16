//! Ball state and free-flight physics.
//!
//! While a player holds the ball its position is derived from the carrier
//! every tick (see [`carried_position`]); only a loose ball integrates.

use serde::{Deserialize, Serialize};

use super::physics_constants::{ball as ball_consts, pitch};
use super::types::{attack_dir, Vec2};
use crate::models::Side;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Set by a shot, cleared on the next touch. Only shots can be saved.
    pub in_flight_from_shot: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self::at_center()
    }
}

impl Ball {
    pub fn at_center() -> Self {
        Self {
            pos: Vec2::new(pitch::CENTER_X, pitch::CENTER_Y),
            vel: Vec2::ZERO,
            in_flight_from_shot: false,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Snap to the carrier's feet: dribble offset ahead, at rest.
    pub fn attach_to(&mut self, carrier_pos: Vec2, side: Side) {
        self.pos = carried_position(carrier_pos, side);
        self.vel = Vec2::ZERO;
        self.in_flight_from_shot = false;
    }

    /// One tick of free flight: move, apply friction, bounce off the
    /// sidelines and off the end lines outside the goal mouth.
    pub fn integrate(&mut self, game_speed: f32) {
        self.pos += self.vel * game_speed;
        self.vel = self.vel * ball_consts::FRICTION;

        let min_y = ball_consts::RADIUS;
        let max_y = pitch::HEIGHT - ball_consts::RADIUS;
        if self.pos.y <= min_y || self.pos.y >= max_y {
            self.vel.y *= -ball_consts::SIDELINE_RESTITUTION;
            self.pos.y = self.pos.y.clamp(min_y, max_y);
        }

        if in_goal_mouth(self.pos.y) {
            return;
        }

        let min_x = ball_consts::RADIUS;
        let max_x = pitch::WIDTH - ball_consts::RADIUS;
        if self.pos.x <= min_x {
            self.vel.x = self.vel.x.abs() * ball_consts::END_LINE_RESTITUTION;
            self.pos.x = min_x;
        } else if self.pos.x >= max_x {
            self.vel.x = -self.vel.x.abs() * ball_consts::END_LINE_RESTITUTION;
            self.pos.x = max_x;
        }
    }
}

/// Where a carried ball sits relative to its carrier.
#[inline]
pub fn carried_position(carrier_pos: Vec2, side: Side) -> Vec2 {
    Vec2::new(carrier_pos.x + attack_dir(side) * ball_consts::DRIBBLE_OFFSET, carrier_pos.y)
}

/// Strictly inside the vertical band of the goal mouth.
#[inline]
pub fn in_goal_mouth(y: f32) -> bool {
    let half = pitch::GOAL_WIDTH / 2.0;
    y > pitch::CENTER_Y - half && y < pitch::CENTER_Y + half
}

/// The side that scores if the ball has crossed an end line inside the
/// goal mouth.
pub fn goal_scored(pos: Vec2) -> Option<Side> {
    if !in_goal_mouth(pos.y) {
        return None;
    }
    if pos.x <= pitch::GOAL_LINE_DEPTH {
        Some(Side::Away)
    } else if pos.x >= pitch::WIDTH - pitch::GOAL_LINE_DEPTH {
        Some(Side::Home)
    } else {
        None
    }
}
