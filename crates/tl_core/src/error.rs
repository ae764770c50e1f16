use thiserror::Error;

use crate::narrative::NarrativeError;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Team '{team}' has an empty squad")]
    EmptySquad { team: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Narrative error: {0}")]
    Narrative(#[from] NarrativeError),
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatchError::EmptySquad { team: "Rovers".to_string() };
        assert_eq!(err.to_string(), "Team 'Rovers' has an empty squad");

        let err = MatchError::InvalidConfig("game_speed must be positive".to_string());
        assert!(err.to_string().contains("game_speed"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: MatchError = parse.unwrap_err().into();
        assert!(matches!(err, MatchError::Json(_)));
    }
}
