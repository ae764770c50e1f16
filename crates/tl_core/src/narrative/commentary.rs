//! In-match commentary: score, minute and the squad's hidden mood go out,
//! a line of commentary, goal probabilities and optional narrated events
//! come back. Narrated events are presentational; they never change the
//! score.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::{parse_json_object, NarrativeError};
use crate::engine::stats::MatchStats;
use crate::models::{EventKind, HiddenImpact, MatchEvent, Side, Team};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentaryRequest {
    pub minute: u32,
    pub home_name: String,
    pub away_name: String,
    pub home_score: u32,
    pub away_score: u32,
    /// Touchline shout currently active, if any
    pub shout: Option<String>,
    /// `"{name} is {morale} (mod: {value})"` per known impact
    pub mood_lines: Vec<String>,
}

impl CommentaryRequest {
    pub fn from_stats(
        stats: &MatchStats,
        home: &Team,
        away: &Team,
        shout: Option<&str>,
        impacts: &[HiddenImpact],
    ) -> Self {
        let mood_lines = impacts
            .iter()
            .filter_map(|impact| {
                let player = home
                    .find_player(&impact.player_id)
                    .or_else(|| away.find_player(&impact.player_id))?;
                Some(format!(
                    "{} is {} (mod: {})",
                    player.name, impact.morale_label, impact.performance_mod
                ))
            })
            .collect();

        Self {
            minute: stats.minute,
            home_name: home.name.clone(),
            away_name: away.name.clone(),
            home_score: stats.home_score,
            away_score: stats.away_score,
            shout: shout.map(str::to_string),
            mood_lines,
        }
    }

    pub fn prompt(&self) -> String {
        let mood = if self.mood_lines.is_empty() {
            "Normal".to_string()
        } else {
            self.mood_lines.join(", ")
        };
        let shout = self.shout.as_deref().unwrap_or("Quiet on the sideline");

        let mut prompt = String::new();
        prompt.push_str("You are commentating live on a league match.\n");
        prompt.push_str(&format!(
            "Match: {} ({}) vs {} ({}), minute {}.\n",
            self.home_name, self.home_score, self.away_name, self.away_score, self.minute
        ));
        prompt.push_str(&format!("Manager's shout: \"{}\"\n", shout));
        prompt.push_str(&format!("Squad mood (not public): {}\n\n", mood));
        prompt.push_str("Give one or two vivid sentences on the action. Mention the shout if there is one.\n");
        prompt.push_str("Estimate each side's chance of scoring next from team strength and mood.\n\n");
        prompt.push_str("## Reply format\n");
        prompt.push_str("{\"commentary\": <string>, \"homeGoalProb\": <0-100>, \"awayGoalProb\": <0-100>,\n");
        prompt.push_str(" \"events\": [{\"type\": \"GOAL\" | \"CHANCE\" | \"COMMENTARY\", \"description\": <string>, \"team\": \"HOME\" | \"AWAY\"}]}\n");
        prompt
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentaryResponse {
    pub commentary: String,
    /// Percent, 0-100
    pub home_goal_prob: f32,
    /// Percent, 0-100
    pub away_goal_prob: f32,
    pub events: Vec<MatchEvent>,
}

impl CommentaryResponse {
    /// Lenient parse; narrated events are stamped with `minute`. Missing or
    /// non-numeric probabilities count as 0, malformed events are skipped.
    pub fn from_json(raw: &str, minute: u32) -> Result<Self, NarrativeError> {
        let value = parse_json_object(raw)?;

        let commentary = value
            .get("commentary")
            .and_then(Value::as_str)
            .ok_or_else(|| NarrativeError::InvalidResponse("missing 'commentary'".into()))?
            .to_string();

        let events = value
            .get("events")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(|e| parse_event(e, minute)).collect())
            .unwrap_or_default();

        Ok(Self {
            commentary,
            home_goal_prob: probability(&value, "homeGoalProb"),
            away_goal_prob: probability(&value, "awayGoalProb"),
            events,
        })
    }
}

fn probability(value: &Value, field: &str) -> f32 {
    match value.get(field).and_then(Value::as_f64) {
        Some(p) if p.is_finite() => (p as f32).clamp(0.0, 100.0),
        _ => 0.0,
    }
}

fn parse_event(entry: &Value, minute: u32) -> Option<MatchEvent> {
    let kind = entry
        .get("type")
        .cloned()
        .and_then(|v| serde_json::from_value::<EventKind>(v).ok());
    let side = entry
        .get("team")
        .cloned()
        .and_then(|v| serde_json::from_value::<Side>(v).ok());
    let description = entry.get("description").and_then(Value::as_str);

    match (kind, side, description) {
        (Some(kind), Some(side), Some(description)) => {
            Some(MatchEvent::new(minute, kind, side, description))
        }
        _ => {
            warn!(entry = %entry, "malformed narrated event skipped");
            None
        }
    }
}
