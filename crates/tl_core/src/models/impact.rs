use serde::{Deserialize, Serialize};

/// Pre-match modifier produced by a team talk. `performance_mod` is
/// nominally in [-5, 5]; the engine clamps it when building its table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HiddenImpact {
    pub player_id: String,
    #[serde(default)]
    pub performance_mod: f32,
    /// Short morale label ("Inspired", "Rattled"); presentational only.
    #[serde(default, rename = "moraleImpact")]
    pub morale_label: String,
}

impl HiddenImpact {
    pub fn new(player_id: impl Into<String>, performance_mod: f32) -> Self {
        Self { player_id: player_id.into(), performance_mod, morale_label: String::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let impact: HiddenImpact = serde_json::from_str(r#"{"playerId": "p4"}"#).unwrap();
        assert_eq!(impact.player_id, "p4");
        assert_eq!(impact.performance_mod, 0.0);
        assert!(impact.morale_label.is_empty());
    }

    #[test]
    fn test_wire_names() {
        let impact = HiddenImpact {
            player_id: "p1".into(),
            performance_mod: 2.5,
            morale_label: "Inspired".into(),
        };
        let json = serde_json::to_value(&impact).unwrap();
        assert_eq!(json["playerId"], "p1");
        assert_eq!(json["performanceMod"], 2.5);
        assert_eq!(json["moraleImpact"], "Inspired");
    }
}
