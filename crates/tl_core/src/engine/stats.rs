use serde::{Deserialize, Serialize};

use super::match_state::MatchPhase;
use crate::models::{MatchEvent, Side};

/// Running counters for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideStats {
    pub shots: u32,
    /// Shots that were saved or scored
    pub on_target: u32,
    pub saves: u32,
    pub tackles: u32,
    /// Live ticks this side held the ball
    pub possession_ticks: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsCalculator {
    pub home: SideStats,
    pub away: SideStats,
}

impl StatsCalculator {
    pub fn side(&self, side: Side) -> &SideStats {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideStats {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    pub fn record_shot(&mut self, side: Side) {
        self.side_mut(side).shots += 1;
    }

    /// A keeper save also puts the opponent's shot on target.
    pub fn record_save(&mut self, keeper_side: Side) {
        self.side_mut(keeper_side).saves += 1;
        self.side_mut(keeper_side.opponent()).on_target += 1;
    }

    pub fn record_goal(&mut self, scorer: Side) {
        self.side_mut(scorer).on_target += 1;
    }

    pub fn record_tackle(&mut self, side: Side) {
        self.side_mut(side).tackles += 1;
    }

    pub fn record_possession(&mut self, holder: Option<Side>) {
        if let Some(side) = holder {
            self.side_mut(side).possession_ticks += 1;
        }
    }

    pub fn total_possession_ticks(&self) -> u64 {
        self.home.possession_ticks + self.away.possession_ticks
    }

    /// Home share of held-ball ticks, rounded; 50 before anyone touches it.
    pub fn possession_home_pct(&self) -> u32 {
        let total = self.total_possession_ticks();
        if total == 0 {
            return 50;
        }
        ((self.home.possession_ticks as f64 / total as f64) * 100.0).round() as u32
    }
}

/// Match summary for hosts and the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub home_score: u32,
    pub away_score: u32,
    /// Home possession %, away is the remainder
    pub possession: u32,
    pub home: SideStats,
    pub away: SideStats,
    pub minute: u32,
    pub phase: MatchPhase,
    pub events: Vec<MatchEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_possession_share() {
        let mut stats = StatsCalculator::default();
        assert_eq!(stats.possession_home_pct(), 50);

        for _ in 0..3 {
            stats.record_possession(Some(Side::Home));
        }
        stats.record_possession(Some(Side::Away));
        stats.record_possession(None);
        assert_eq!(stats.total_possession_ticks(), 4);
        assert_eq!(stats.possession_home_pct(), 75);
    }

    #[test]
    fn test_save_counts_on_target_for_shooter() {
        let mut stats = StatsCalculator::default();
        stats.record_shot(Side::Home);
        stats.record_save(Side::Away);
        stats.record_shot(Side::Home);
        stats.record_goal(Side::Home);

        assert_eq!(stats.home.shots, 2);
        assert_eq!(stats.home.on_target, 2);
        assert_eq!(stats.away.saves, 1);
        assert_eq!(stats.side(Side::Away).on_target, 0);
    }
}
