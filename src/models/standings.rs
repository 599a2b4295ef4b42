//! Derived views: standings rows and top-scorer entries (for API / display).

use crate::models::points::PointsPolicy;
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Result of one match from a team's point of view.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum FormResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl FormResult {
    pub fn as_char(self) -> char {
        match self {
            FormResult::Win => 'W',
            FormResult::Draw => 'D',
            FormResult::Loss => 'L',
        }
    }

    fn points(self, policy: PointsPolicy) -> i64 {
        let points = match self {
            FormResult::Win => policy.win,
            FormResult::Draw => policy.draw,
            FormResult::Loss => policy.loss,
        };
        i64::from(points)
    }
}

/// One team's line in the table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub team_name: String,
    /// 1-based rank; only meaningful once the table is sorted.
    pub position: u32,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: i64,
    /// Most recent results, oldest first.
    pub form: Vec<FormResult>,
}

impl StandingsRow {
    /// Zero row for a team that has not played yet.
    pub fn new(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            position: 0,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            form: Vec::new(),
        }
    }

    /// Add one match to the counters. `goal_difference` is left for [`Self::refresh_goal_difference`].
    ///
    /// Counters saturate instead of wrapping on absurd input.
    pub fn record(&mut self, scored: u64, conceded: u64, policy: PointsPolicy) {
        let result = match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => FormResult::Win,
            std::cmp::Ordering::Equal => FormResult::Draw,
            std::cmp::Ordering::Less => FormResult::Loss,
        };
        self.played = self.played.saturating_add(1);
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        let counter = match result {
            FormResult::Win => &mut self.wins,
            FormResult::Draw => &mut self.draws,
            FormResult::Loss => &mut self.losses,
        };
        *counter = counter.saturating_add(1);
        self.points = self.points.saturating_add(result.points(policy));
        self.form.push(result);
    }

    pub fn refresh_goal_difference(&mut self) {
        let diff = i128::from(self.goals_for) - i128::from(self.goals_against);
        self.goal_difference =
            i64::try_from(diff).unwrap_or(if diff > 0 { i64::MAX } else { i64::MIN });
    }

    /// Form as a compact string, e.g. `"WWDL"`.
    pub fn form_string(&self) -> String {
        self.form.iter().map(|r| r.as_char()).collect()
    }
}

/// A player's line in the top-scorer ranking.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerEntry {
    pub player_id: String,
    pub player_name: String,
    pub team_id: TeamId,
    /// None when the team is not part of the supplied team set.
    pub team_name: Option<String>,
    pub goals: u32,
}
