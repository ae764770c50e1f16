use crate::engine::physics_constants::possession;
use crate::engine::roster::PitchPlayer;
use crate::engine::types::Vec2;

/// Close enough to the carried ball to attempt a tackle.
#[inline]
pub fn in_tackle_range(presser: &PitchPlayer, ball_pos: Vec2) -> bool {
    presser.pos.distance(ball_pos) < possession::TACKLE_DISTANCE
}

/// Per-tick probability that a presser in range wins the ball.
#[inline]
pub fn tackle_chance(presser: &PitchPlayer) -> f32 {
    possession::TACKLE_BASE_CHANCE + presser.skills.defending * possession::TACKLE_SKILL_CHANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::match_sim::test_fixtures::create_test_state;

    #[test]
    fn test_tackle_range_and_chance() {
        let state = create_test_state();
        let mut presser = state.players[3].clone();
        presser.pos = Vec2::new(200.0, 200.0);
        presser.skills.defending = 0.8;

        assert!(in_tackle_range(&presser, Vec2::new(210.0, 200.0)));
        assert!(!in_tackle_range(&presser, Vec2::new(215.0, 200.0)));
        assert!((tackle_chance(&presser) - 0.09).abs() < 1e-6);
    }
}
