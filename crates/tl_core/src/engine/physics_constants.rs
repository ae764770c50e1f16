//! Physics constants for match simulation
//!
//! Pitch units, origin top-left, y grows downward. Velocities are in pitch
//! units per tick at game speed 1.

// ============================================================
// Pitch geometry
// ============================================================
pub mod pitch {
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 500.0;
    pub const CENTER_X: f32 = WIDTH / 2.0;
    pub const CENTER_Y: f32 = HEIGHT / 2.0;

    /// Goal mouth width, centred on `CENTER_Y`
    pub const GOAL_WIDTH: f32 = 70.0;

    /// A ball in the goal mouth within this distance of an end line is a goal
    pub const GOAL_LINE_DEPTH: f32 = 3.0;
}

// ============================================================
// Ball
// ============================================================
pub mod ball {
    pub const RADIUS: f32 = 5.0;

    /// Velocity retained per tick while free
    pub const FRICTION: f32 = 0.97;

    /// Sideline bounce: vertical velocity flips and keeps this fraction
    pub const SIDELINE_RESTITUTION: f32 = 0.5;

    /// End-line bounce outside the goal mouth
    pub const END_LINE_RESTITUTION: f32 = 0.3;

    /// Carried ball sits this far ahead of the carrier in the attack direction
    pub const DRIBBLE_OFFSET: f32 = 12.0;
}

// ============================================================
// Player movement
// ============================================================
pub mod player {
    pub const RADIUS: f32 = 10.0;

    /// Velocity retained per tick
    pub const FRICTION: f32 = 0.92;

    pub const ACCELERATION: f32 = 0.18;
    pub const BASE_MAX_SPEED: f32 = 2.6;
    pub const SPRINT_MULTIPLIER: f32 = 1.3;

    /// Max speed gain at speed multiplier 1.0
    pub const SPEED_SKILL_WEIGHT: f32 = 0.4;

    /// Max speed gain per point of hidden performance modifier
    pub const HIDDEN_MOD_WEIGHT: f32 = 0.05;

    /// Within this distance of the target a player brakes instead of accelerating
    pub const ARRIVAL_THRESHOLD: f32 = 1.0;
    pub const ARRIVAL_DAMPING: f32 = 0.8;

    /// Off-ball run timer advance per tick (ms at game speed 1)
    pub const RUN_TIMER_STEP: f32 = 16.0;
    /// Run timer divisor for the drift phase
    pub const RUN_PHASE_PERIOD: f32 = 1500.0;
}

// ============================================================
// Possession
// ============================================================
pub mod possession {
    /// Pickup radius for a loose ball
    pub const CONTROL_DISTANCE: f32 = 20.0;

    /// Loose balls faster than this cannot be collected
    pub const PICKUP_MAX_BALL_SPEED: f32 = 8.0;

    /// Above this speed the last releaser cannot re-collect their own ball
    pub const DEPARTING_BALL_SPEED: f32 = 2.0;

    /// Turnover cooldown on the player who lost the ball (ms)
    pub const TURNOVER_COOLDOWN_MS: u64 = 1000;

    /// Keeper save radius and the minimum shot speed that can be saved
    pub const SAVE_DISTANCE: f32 = 35.0;
    pub const SAVE_MIN_BALL_SPEED: f32 = 2.0;

    pub const TACKLE_DISTANCE: f32 = 15.0;
    pub const TACKLE_BASE_CHANCE: f32 = 0.05;
    pub const TACKLE_SKILL_CHANCE: f32 = 0.05;

    /// Keeper holds at least this long before distributing (ms)
    pub const KEEPER_HOLD_MS: u64 = 1000;
    pub const KEEPER_DISTRIBUTION_CHANCE: f32 = 0.05;
}

// ============================================================
// Decision making
// ============================================================
pub mod decision {
    /// Carrier targets this far ahead of themself
    pub const DRIBBLE_STEP: f32 = 40.0;

    pub const SHOOTING_RANGE: f32 = 200.0;
    pub const SHOT_BASE_CHANCE: f32 = 0.05;
    pub const SHOT_SKILL_CHANCE: f32 = 0.05;
    pub const PASS_BASE_CHANCE: f32 = 0.05;
    pub const PASS_SKILL_CHANCE: f32 = 0.05;

    /// Team push toward the opponent while in possession / back while defending
    pub const ATTACK_PUSH: f32 = 150.0;
    pub const DEFEND_PUSH: f32 = 40.0;
    /// Push share: base + line * per-line weight
    pub const PUSH_BASE_WEIGHT: f32 = 0.3;
    pub const PUSH_LINE_WEIGHT: f32 = 0.25;

    /// Drift amplitude along the attack axis for supporting runs
    pub const DRIFT_AMPLITUDE: f32 = 20.0;
    pub const FORWARD_RUN: f32 = 50.0;

    /// Off-ball drop and ball-side shift when the opponent has the ball
    pub const DEFENSIVE_DROP: f32 = 20.0;
    pub const BALL_SIDE_SHIFT: f32 = 0.3;

    pub const PRESS_RADIUS: f32 = 100.0;
    /// Presser aims this far goal-side of the ball
    pub const PRESS_GOAL_SIDE_OFFSET: f32 = 10.0;

    pub const LOOSE_BALL_CHASE_RADIUS: f32 = 150.0;

    /// Keeper stands this far off the goal line and shades toward the ball
    pub const KEEPER_LINE_OFFSET: f32 = 20.0;
    pub const KEEPER_SHADE_WEIGHT: f32 = 0.5;

    /// Keeper distribution targets the first teammate at or below this line
    pub const KEEPER_OUTLET_MAX_LINE: u8 = 2;
}

// ============================================================
// Passing
// ============================================================
pub mod passing {
    pub const MIN_DISTANCE: f32 = 40.0;
    pub const MAX_DISTANCE: f32 = 350.0;

    /// An opponent closer than (pass distance - clearance) inside the cone blocks the lane
    pub const LANE_CLEARANCE: f32 = 15.0;
    /// Half-angle of the blocking cone (rad, ~16 degrees)
    pub const LANE_HALF_ANGLE: f32 = 0.28;

    pub const BASE_SCORE: f32 = 80.0;
    pub const PROGRESS_WEIGHT: f32 = 0.8;
    pub const DANGER_ZONE_GOAL_DISTANCE: f32 = 200.0;
    pub const DANGER_ZONE_HALF_HEIGHT: f32 = 120.0;
    pub const DANGER_ZONE_BONUS: f32 = 60.0;
    pub const FORWARD_BONUS: f32 = 25.0;
    pub const SHORT_PASS_DISTANCE: f32 = 140.0;
    pub const SHORT_PASS_BONUS: f32 = 20.0;
    pub const JITTER: f32 = 25.0;

    /// Pass speed = clamp(distance / divisor, MIN_SPEED, BASE_MAX_SPEED + passing * SKILL_SPEED)
    pub const SPEED_DISTANCE_DIVISOR: f32 = 30.0;
    pub const MIN_SPEED: f32 = 4.0;
    pub const BASE_MAX_SPEED: f32 = 7.0;
    pub const SKILL_SPEED: f32 = 2.0;
}

// ============================================================
// Shooting
// ============================================================
pub mod shooting {
    pub const POWER: f32 = 12.0;
    pub const POWER_BASE_FACTOR: f32 = 0.9;
    pub const POWER_SKILL_FACTOR: f32 = 0.3;

    /// Aim spread as a fraction of the goal width
    pub const AIM_SPREAD: f32 = 0.8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_mouth_fits_pitch() {
        assert!(pitch::GOAL_WIDTH < pitch::HEIGHT);
        assert!(pitch::GOAL_LINE_DEPTH < ball::RADIUS);
    }

    #[test]
    fn test_pickup_faster_than_departing() {
        assert!(possession::DEPARTING_BALL_SPEED < possession::PICKUP_MAX_BALL_SPEED);
        assert!(possession::TACKLE_DISTANCE < possession::CONTROL_DISTANCE);
    }

    #[test]
    fn test_pass_speed_bounds() {
        assert!(passing::MIN_SPEED < passing::BASE_MAX_SPEED);
        assert!(passing::BASE_MAX_SPEED + passing::SKILL_SPEED > possession::PICKUP_MAX_BALL_SPEED);
    }
}
