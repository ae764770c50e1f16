//! On-ball actions: passing, shooting, tackling.

pub mod passing;
pub mod shooting;
pub mod tackle;

#[cfg(test)]
pub mod test_fixtures;

pub use passing::{find_best_pass_target, is_lane_blocked, pass_velocity};
pub use shooting::{in_shooting_range, shot_chance, shot_velocity};
pub use tackle::{in_tackle_range, tackle_chance};
