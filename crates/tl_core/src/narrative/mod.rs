//! Narrative Service Boundary
//!
//! The team-talk analyser and the commentator are external text models. The
//! library owns the prompts and the response parsing; a host supplies the
//! transport by implementing [`NarrativeService`]. Any failure resolves to a
//! neutral result so a match never waits on, or breaks because of, the
//! narrative side.

pub mod commentary;
pub mod team_talk;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

pub use commentary::{CommentaryRequest, CommentaryResponse};
pub use team_talk::{TeamTalkRequest, TeamTalkResponse, NEUTRAL_REACTION};

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("Narrative service unavailable: {0}")]
    Unavailable(String),

    #[error("Narrative service timed out")]
    Timeout,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Response is not JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Transport to a text model: prompt in, raw reply out.
pub trait NarrativeService {
    fn complete(&mut self, prompt: &str) -> Result<String, NarrativeError>;

    fn is_ready(&self) -> bool {
        true
    }
}

/// Ask for a team-talk reaction.
pub fn analyze_team_talk<S: NarrativeService + ?Sized>(
    service: &mut S,
    request: &TeamTalkRequest,
) -> Result<TeamTalkResponse, NarrativeError> {
    if !service.is_ready() {
        return Err(NarrativeError::Unavailable("service not ready".into()));
    }
    let raw = service.complete(&request.prompt())?;
    TeamTalkResponse::from_json(&raw)
}

/// Team-talk reaction, or the neutral reaction with no impacts on failure.
pub fn resolve_team_talk<S: NarrativeService + ?Sized>(
    service: &mut S,
    request: &TeamTalkRequest,
) -> TeamTalkResponse {
    analyze_team_talk(service, request).unwrap_or_else(|err| {
        warn!(team = %request.team_name, error = %err, "team talk failed, using neutral reaction");
        TeamTalkResponse::neutral()
    })
}

pub fn generate_commentary<S: NarrativeService + ?Sized>(
    service: &mut S,
    request: &CommentaryRequest,
) -> Result<CommentaryResponse, NarrativeError> {
    if !service.is_ready() {
        return Err(NarrativeError::Unavailable("service not ready".into()));
    }
    let raw = service.complete(&request.prompt())?;
    CommentaryResponse::from_json(&raw, request.minute)
}

/// Commentary, or `None` on failure. Match state is never touched either way.
pub fn resolve_commentary<S: NarrativeService + ?Sized>(
    service: &mut S,
    request: &CommentaryRequest,
) -> Option<CommentaryResponse> {
    match generate_commentary(service, request) {
        Ok(response) => Some(response),
        Err(err) => {
            warn!(minute = request.minute, error = %err, "commentary failed");
            None
        }
    }
}

/// Parse a model reply as a JSON object, accepting a fenced code block
/// around it.
pub(crate) fn parse_json_object(raw: &str) -> Result<Value, NarrativeError> {
    let value: Value = match serde_json::from_str(raw.trim()) {
        Ok(value) => value,
        Err(err) => match extract_code_block(raw) {
            Some(inner) => serde_json::from_str(inner)?,
            None => return Err(err.into()),
        },
    };
    if !value.is_object() {
        return Err(NarrativeError::InvalidResponse("expected a JSON object".into()));
    }
    Ok(value)
}

fn extract_code_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let close = body.find("```")?;
    Some(body[..close].trim())
}


#[cfg(test)]
mod tests {
    use super::test_support::CannedService;
    use super::*;
    use crate::engine::match_sim::test_fixtures::create_test_team;

    #[test]
    fn test_parse_fenced_reply() {
        let raw = "Here you go:\n```json\n{\"generalReaction\": \"Fired up\", \"impacts\": []}\n```\n";
        let value = parse_json_object(raw).unwrap();
        assert_eq!(value["generalReaction"], "Fired up");
        assert!(parse_json_object("[1, 2]").is_err());
        assert!(parse_json_object("no json here").is_err());
    }

    #[test]
    fn test_failed_service_resolves_neutral() {
        let team = create_test_team("Rovers", "r");
        let request = TeamTalkRequest::from_team(&team, "Go out and win");
        let mut service = CannedService::failing("offline");

        assert!(matches!(
            analyze_team_talk(&mut service, &request),
            Err(NarrativeError::Unavailable(_))
        ));
        let response = resolve_team_talk(&mut service, &request);
        assert_eq!(response, TeamTalkResponse::neutral());
        assert_eq!(response.general_reaction, NEUTRAL_REACTION);
        assert!(response.impacts.is_empty());
    }

    #[test]
    fn test_malformed_reply_resolves_neutral() {
        let team = create_test_team("Rovers", "r");
        let request = TeamTalkRequest::from_team(&team, "Whatever happens, happens");
        let mut service = CannedService::replying("{\"impacts\": \"lots\"");
        let response = resolve_team_talk(&mut service, &request);
        assert!(response.impacts.is_empty());
        assert_eq!(service.prompts.len(), 1);
        assert!(service.prompts[0].contains("Whatever happens, happens"));
    }
}
