//! Championship: teams, matches and the points policy they are scored with.

use crate::logic::{compute_standings, compute_top_scorers};
use crate::models::game::{GoalEvent, Match, MatchId, MatchStatus};
use crate::models::points::PointsPolicy;
use crate::models::standings::{ScorerEntry, StandingsRow};
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur while managing championships.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LeagueError {
    #[error("Championship {0} not found")]
    ChampionshipNotFound(ChampionshipId),
    #[error("Team {0} not found")]
    TeamNotFound(TeamId),
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    #[error("A team with id {0} already exists")]
    DuplicateTeam(TeamId),
    /// Names are unique, case-insensitive.
    #[error("A team named {0} already exists")]
    DuplicateTeamName(String),
    #[error("Name must not be empty")]
    EmptyName,
    #[error("A team cannot play against itself")]
    SameTeam,
    #[error("Team {0} does not play in this match")]
    GoalTeamNotInMatch(TeamId),
    #[error("Scores must be non-negative integers")]
    InvalidScore,
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("CSV export failed: {0}")]
    Export(String),
}

/// Unique identifier for a championship.
pub type ChampionshipId = Uuid;

/// A championship: the unit stored by the repository.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Championship {
    pub id: ChampionshipId,
    pub name: String,
    pub points_policy: PointsPolicy,
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
    pub created_at: DateTime<Utc>,
}

impl Championship {
    /// Create an empty championship. The name is trimmed and must not be empty.
    pub fn new(name: &str, points_policy: PointsPolicy) -> Result<Self, LeagueError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            points_policy,
            teams: Vec::new(),
            matches: Vec::new(),
            created_at: Utc::now(),
        })
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    fn match_mut(&mut self, id: MatchId) -> Result<&mut Match, LeagueError> {
        self.matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(LeagueError::MatchNotFound(id))
    }

    /// Add a team with a generated id.
    pub fn add_team(&mut self, name: &str) -> Result<TeamId, LeagueError> {
        self.add_team_with_id(Uuid::new_v4().to_string(), name)
    }

    /// Add a team with a caller-chosen id (e.g. imported seed data).
    pub fn add_team_with_id(
        &mut self,
        id: impl Into<TeamId>,
        name: &str,
    ) -> Result<TeamId, LeagueError> {
        let id = id.into();
        let name = name.trim();
        if name.is_empty() || id.trim().is_empty() {
            return Err(LeagueError::EmptyName);
        }
        if self.team(&id).is_some() {
            return Err(LeagueError::DuplicateTeam(id));
        }
        if self.teams.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(LeagueError::DuplicateTeamName(name.to_string()));
        }
        self.teams.push(Team::new(id.clone(), name));
        Ok(id)
    }

    /// Remove a team. Its matches stay in the history as orphan matches and no longer count.
    pub fn remove_team(&mut self, id: &str) -> Result<Team, LeagueError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LeagueError::TeamNotFound(id.to_string()))?;
        Ok(self.teams.remove(idx))
    }

    /// Schedule a match between two different, existing teams.
    pub fn schedule_match(
        &mut self,
        home_team_id: &str,
        away_team_id: &str,
        kickoff: Option<DateTime<Utc>>,
    ) -> Result<MatchId, LeagueError> {
        for id in [home_team_id, away_team_id] {
            if self.team(id).is_none() {
                return Err(LeagueError::TeamNotFound(id.to_string()));
            }
        }
        if home_team_id == away_team_id {
            return Err(LeagueError::SameTeam);
        }
        let mut game = Match::new(home_team_id, away_team_id);
        game.kickoff = kickoff;
        let id = game.id;
        self.matches.push(game);
        Ok(id)
    }

    /// Record the final score and mark the match finished.
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        score_home: u64,
        score_away: u64,
    ) -> Result<(), LeagueError> {
        let stored = |score: u64| i64::try_from(score).map_err(|_| LeagueError::InvalidScore);
        let (score_home, score_away) = (stored(score_home)?, stored(score_away)?);
        let game = self.match_mut(match_id)?;
        game.score_home = Some(score_home);
        game.score_away = Some(score_away);
        game.status = MatchStatus::Finished;
        Ok(())
    }

    /// Change the status. Leaving `Finished` clears the score.
    pub fn set_status(&mut self, match_id: MatchId, status: MatchStatus) -> Result<(), LeagueError> {
        let game = self.match_mut(match_id)?;
        if status != MatchStatus::Finished {
            game.score_home = None;
            game.score_away = None;
        }
        game.status = status;
        Ok(())
    }

    /// Append a goal event. The goal's team must be one of the two sides.
    pub fn add_goal(&mut self, match_id: MatchId, goal: GoalEvent) -> Result<(), LeagueError> {
        let game = self.match_mut(match_id)?;
        if !game.involves(&goal.team_id) {
            return Err(LeagueError::GoalTeamNotInMatch(goal.team_id));
        }
        game.goals.push(goal);
        Ok(())
    }

    pub fn remove_match(&mut self, match_id: MatchId) -> Result<Match, LeagueError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == match_id)
            .ok_or(LeagueError::MatchNotFound(match_id))?;
        Ok(self.matches.remove(idx))
    }

    /// Current table under this championship's points policy.
    pub fn standings(&self) -> Vec<StandingsRow> {
        compute_standings(&self.teams, &self.matches, self.points_policy)
    }

    pub fn top_scorers(&self, limit: usize) -> Vec<ScorerEntry> {
        compute_top_scorers(&self.teams, &self.matches, limit)
    }
}
