//! Match Setup
//!
//! Everything fixed before kickoff: both teams, their tactics and any hidden
//! impacts from the team talk. Read-only once the match is running.

use serde::{Deserialize, Serialize};

use super::impact::HiddenImpact;
use super::side::Side;
use super::team::Team;
use crate::error::{MatchError, Result};
use crate::tactics::Tactics;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSetup {
    pub home: Team,
    pub away: Team,
    #[serde(default)]
    pub home_tactics: Tactics,
    #[serde(default)]
    pub away_tactics: Tactics,
    #[serde(default)]
    pub hidden_impacts: Vec<HiddenImpact>,
}

impl MatchSetup {
    pub fn new(home: Team, away: Team) -> Self {
        Self {
            home,
            away,
            home_tactics: Tactics::default(),
            away_tactics: Tactics::default(),
            hidden_impacts: Vec::new(),
        }
    }

    pub fn with_tactics(mut self, home: Tactics, away: Tactics) -> Self {
        self.home_tactics = home;
        self.away_tactics = away;
        self
    }

    pub fn with_hidden_impacts(mut self, impacts: Vec<HiddenImpact>) -> Self {
        self.hidden_impacts = impacts;
        self
    }

    pub fn team(&self, side: Side) -> &Team {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn tactics(&self, side: Side) -> &Tactics {
        match side {
            Side::Home => &self.home_tactics,
            Side::Away => &self.away_tactics,
        }
    }

    /// Both squads must have at least one player; slots fall back to the
    /// first squad member when a squad is short.
    pub fn validate(&self) -> Result<()> {
        for team in [&self.home, &self.away] {
            if team.squad.is_empty() {
                return Err(MatchError::EmptySquad { team: team.name.clone() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::match_sim::test_fixtures::create_test_team;

    #[test]
    fn test_validate_rejects_empty_squad() {
        let mut away = create_test_team("Away", "a");
        away.squad.clear();
        let setup = MatchSetup::new(create_test_team("Home", "h"), away);

        match setup.validate() {
            Err(MatchError::EmptySquad { team }) => assert_eq!(team, "Away"),
            other => panic!("expected EmptySquad, got {:?}", other),
        }
    }

    #[test]
    fn test_side_accessors() {
        let setup = MatchSetup::new(create_test_team("Home", "h"), create_test_team("Away", "a"));
        assert_eq!(setup.team(Side::Home).name, "Home");
        assert_eq!(setup.team(Side::Away).name, "Away");
        assert!(setup.validate().is_ok());
    }
}
