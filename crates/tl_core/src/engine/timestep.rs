/// timestep.rs
/// Frame and match-clock constants
///
/// Two clocks run side by side:
/// - Real-time clock (ms): advanced by each frame's duration; drives
///   cooldowns, keeper hold time and the goal-celebration freeze.
/// - Match minute: advanced by a fixed amount per live tick, scaled by game
///   speed. A 90-minute match is 1800 live ticks at speed 1.

/// Default frame duration (ms), ~60 Hz
pub const FRAME_MS: u64 = 16;

/// Match minutes per live tick at game speed 1
pub const MINUTES_PER_TICK: f32 = 0.05;

/// Live ticks per match minute at game speed 1
pub const TICKS_PER_MINUTE: u32 = 20;

const _: () = assert!(MINUTES_PER_TICK * TICKS_PER_MINUTE as f32 == 1.0);

/// Next match minute after one live tick.
#[inline]
pub fn advance_minute(minute: f32, game_speed: f32) -> f32 {
    minute + MINUTES_PER_TICK * game_speed
}

/// True when a tick moved the clock past a whole minute.
#[inline]
pub fn crossed_minute(previous: f32, next: f32) -> bool {
    next.floor() > previous.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_per_match() {
        let mut minute = 0.0f32;
        let mut crossings = 0;
        for _ in 0..(90 * TICKS_PER_MINUTE) {
            let next = advance_minute(minute, 1.0);
            if crossed_minute(minute, next) {
                crossings += 1;
            }
            minute = next;
        }
        // f32 accumulation drifts slightly; whole minutes still land
        assert!((minute - 90.0).abs() < 0.01);
        assert!((89..=90).contains(&crossings));
    }

    #[test]
    fn test_game_speed_scales_minutes() {
        assert!((advance_minute(10.0, 4.0) - 10.2).abs() < 1e-5);
        assert!(crossed_minute(10.99, 11.0));
        assert!(!crossed_minute(10.0, 10.5));
    }
}
