//! Hidden performance modifiers.
//!
//! Team-talk impacts arrive keyed by squad id. They only ever touch a
//! player's top speed; decision logic never reads them.

use fxhash::FxHashMap;
use tracing::warn;

use crate::models::HiddenImpact;

pub const PERFORMANCE_MOD_MIN: f32 = -5.0;
pub const PERFORMANCE_MOD_MAX: f32 = 5.0;

fn clamp_finite(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if !value.is_finite() {
        return default;
    }
    value.clamp(min, max)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HiddenImpactTable {
    mods: FxHashMap<String, f32>,
}

impl HiddenImpactTable {
    /// Later entries for the same player replace earlier ones.
    pub fn from_impacts(impacts: &[HiddenImpact]) -> Self {
        let mut table = Self::default();
        table.merge(impacts);
        table
    }

    pub fn merge(&mut self, impacts: &[HiddenImpact]) {
        for impact in impacts {
            if !impact.performance_mod.is_finite() {
                warn!(player_id = %impact.player_id, "non-finite performance modifier, using 0");
            }
            let value = clamp_finite(
                impact.performance_mod,
                PERFORMANCE_MOD_MIN,
                PERFORMANCE_MOD_MAX,
                0.0,
            );
            self.mods.insert(impact.player_id.clone(), value);
        }
    }

    /// Modifier for a squad id; players without an entry get 0.
    pub fn performance_mod(&self, roster_id: &str) -> f32 {
        self.mods.get(roster_id).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_player_defaults_to_zero() {
        let table = HiddenImpactTable::from_impacts(&[HiddenImpact::new("p1", 2.0)]);
        assert_eq!(table.performance_mod("p1"), 2.0);
        assert_eq!(table.performance_mod("p2"), 0.0);
    }

    #[test]
    fn test_values_are_clamped() {
        let table = HiddenImpactTable::from_impacts(&[
            HiddenImpact::new("hot", 12.0),
            HiddenImpact::new("cold", -9.0),
            HiddenImpact::new("nan", f32::NAN),
            HiddenImpact::new("inf", f32::INFINITY),
        ]);
        assert_eq!(table.performance_mod("hot"), 5.0);
        assert_eq!(table.performance_mod("cold"), -5.0);
        assert_eq!(table.performance_mod("nan"), 0.0);
        assert_eq!(table.performance_mod("inf"), 0.0);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_later_entry_wins() {
        let mut table = HiddenImpactTable::from_impacts(&[HiddenImpact::new("p1", 1.0)]);
        table.merge(&[HiddenImpact::new("p1", -3.0)]);
        assert_eq!(table.performance_mod("p1"), -3.0);
        assert!(!table.is_empty());
    }
}
