//! Match, goal events and match status.

use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Where a match is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
}

/// How a goal was scored.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    #[default]
    Goal,
    Penalty,
    OwnGoal,
}

impl GoalType {
    /// Own goals count for the team's score but never for the player.
    pub fn credits_scorer(self) -> bool {
        !matches!(self, GoalType::OwnGoal)
    }
}

/// A single goal inside a match. Informational: the match score fields are authoritative.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEvent {
    /// None once the player has been removed from the system. Numeric ids are read as strings.
    #[serde(default, deserialize_with = "lenient_id")]
    pub player_id: Option<String>,
    #[serde(default)]
    pub player_name: Option<String>,
    pub team_id: TeamId,
    /// Anything that is not a non-negative integer (e.g. `"90+2"`) reads as None.
    #[serde(default, deserialize_with = "lenient_minute")]
    pub minute: Option<u32>,
    #[serde(rename = "type", default)]
    pub kind: GoalType,
}

impl GoalEvent {
    pub fn new(
        player_id: impl Into<String>,
        player_name: impl Into<String>,
        team_id: impl Into<TeamId>,
        minute: u32,
        kind: GoalType,
    ) -> Self {
        Self {
            player_id: Some(player_id.into()),
            player_name: Some(player_name.into()),
            team_id: team_id.into(),
            minute: Some(minute),
            kind,
        }
    }
}

/// A match between two teams of a championship.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default = "Uuid::new_v4")]
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    #[serde(default)]
    pub status: MatchStatus,
    /// Raw score as entered. Anything that is not a JSON integer reads as None.
    #[serde(default, deserialize_with = "lenient_score")]
    pub score_home: Option<i64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score_away: Option<i64>,
    #[serde(default)]
    pub kickoff: Option<DateTime<Utc>>,
    /// Entries that do not parse as a goal event are dropped; the score stays authoritative.
    #[serde(default, deserialize_with = "lenient_goals")]
    pub goals: Vec<GoalEvent>,
}

impl Match {
    /// A scheduled match with no score and no goals.
    pub fn new(home_team_id: impl Into<TeamId>, away_team_id: impl Into<TeamId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team_id: home_team_id.into(),
            away_team_id: away_team_id.into(),
            status: MatchStatus::Scheduled,
            score_home: None,
            score_away: None,
            kickoff: None,
            goals: Vec::new(),
        }
    }

    /// A finished match with the given score.
    pub fn finished(
        home_team_id: impl Into<TeamId>,
        away_team_id: impl Into<TeamId>,
        score_home: i64,
        score_away: i64,
    ) -> Self {
        Self {
            status: MatchStatus::Finished,
            score_home: Some(score_home),
            score_away: Some(score_away),
            ..Self::new(home_team_id, away_team_id)
        }
    }

    pub fn with_kickoff(mut self, kickoff: DateTime<Utc>) -> Self {
        self.kickoff = Some(kickoff);
        self
    }

    pub fn with_goal(mut self, goal: GoalEvent) -> Self {
        self.goals.push(goal);
        self
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// `(home, away)` when the match is finished and both scores are non-negative integers.
    pub fn final_score(&self) -> Option<(u64, u64)> {
        if !self.is_finished() {
            return None;
        }
        let home = u64::try_from(self.score_home?).ok()?;
        let away = u64::try_from(self.score_away?).ok()?;
        Some((home, away))
    }

    /// True if `team_id` plays in this match.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_i64()))
}

fn lenient_minute<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_u64())
        .and_then(|m| u32::try_from(m).ok()))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(id)) => Some(id),
        Some(serde_json::Value::Number(id)) => Some(id.to_string()),
        _ => None,
    })
}

fn lenient_goals<'de, D>(deserializer: D) -> Result<Vec<GoalEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let Some(serde_json::Value::Array(entries)) = value else {
        return Ok(Vec::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}
