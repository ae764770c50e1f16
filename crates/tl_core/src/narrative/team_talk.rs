//! Pre-match team talk: the manager's speech goes out with a squad
//! summary, per-player hidden impacts come back.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::{parse_json_object, NarrativeError};
use crate::engine::match_modifiers::{PERFORMANCE_MOD_MAX, PERFORMANCE_MOD_MIN};
use crate::models::{HiddenImpact, Team};

/// Shown when the talk could not be analysed.
pub const NEUTRAL_REACTION: &str = "The players look at you, waiting for more clarity.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamTalkRequest {
    pub team_name: String,
    pub speech: String,
    /// One `SquadPlayer::summary_line` per player
    pub squad_lines: Vec<String>,
}

impl TeamTalkRequest {
    pub fn from_team(team: &Team, speech: impl Into<String>) -> Self {
        Self {
            team_name: team.name.clone(),
            speech: speech.into(),
            squad_lines: team.squad.iter().map(|p| p.summary_line()).collect(),
        }
    }

    pub fn prompt(&self) -> String {
        let mut prompt = String::new();
        prompt.push_str(&format!(
            "You are the squad of {}. The manager has just finished the pre-match talk:\n",
            self.team_name
        ));
        prompt.push_str(&format!("\"{}\"\n\n", self.speech));
        prompt.push_str("Decide how the talk lands with each player below. Some will be lifted, some will feel the pressure.\n");
        prompt.push_str("## Squad\n");
        for line in &self.squad_lines {
            prompt.push_str(line);
            prompt.push('\n');
        }
        prompt.push_str("\n## Reply format\n");
        prompt.push_str("A JSON object:\n");
        prompt.push_str("{\n");
        prompt.push_str("  \"generalReaction\": <a few sentences on the mood in the room>,\n");
        prompt.push_str("  \"impacts\": [\n");
        prompt.push_str("    {\"playerId\": <string>, \"performanceMod\": <number from -5 to 5>, \"moraleImpact\": <one word, e.g. Inspired, Anxious>}\n");
        prompt.push_str("  ]\n");
        prompt.push_str("}\n");
        prompt
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamTalkResponse {
    pub general_reaction: String,
    pub impacts: Vec<HiddenImpact>,
}

impl TeamTalkResponse {
    pub fn neutral() -> Self {
        Self { general_reaction: NEUTRAL_REACTION.to_string(), impacts: Vec::new() }
    }

    /// Lenient parse. `generalReaction` is required; impact entries without
    /// a `playerId` are skipped, a missing or non-numeric `performanceMod`
    /// counts as 0 and values are clamped to [-5, 5].
    pub fn from_json(raw: &str) -> Result<Self, NarrativeError> {
        let value = parse_json_object(raw)?;

        let general_reaction = value
            .get("generalReaction")
            .and_then(Value::as_str)
            .ok_or_else(|| NarrativeError::InvalidResponse("missing 'generalReaction'".into()))?
            .to_string();

        let impacts = match value.get("impacts") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries.iter().filter_map(parse_impact).collect(),
            Some(_) => {
                return Err(NarrativeError::InvalidResponse("'impacts' is not an array".into()))
            }
        };

        Ok(Self { general_reaction, impacts })
    }
}

fn parse_impact(entry: &Value) -> Option<HiddenImpact> {
    let Some(player_id) = entry.get("playerId").and_then(Value::as_str) else {
        warn!(entry = %entry, "impact without playerId skipped");
        return None;
    };

    let performance_mod = entry
        .get("performanceMod")
        .and_then(Value::as_f64)
        .map(|m| (m as f32).clamp(PERFORMANCE_MOD_MIN, PERFORMANCE_MOD_MAX))
        .unwrap_or(0.0);

    let morale_label = entry
        .get("moraleImpact")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(HiddenImpact { player_id: player_id.to_string(), performance_mod, morale_label })
}
