//! Standings table: aggregate finished matches into ranked rows.

use crate::models::{Match, PointsPolicy, StandingsRow, Team};
use std::cmp::Ordering;
use std::collections::HashMap;

/// How many recent results each row keeps in `form`.
pub const FORM_LENGTH: usize = 5;

/// Build the table for `teams` from `matches`.
///
/// 1. One zero row per team, in input order (duplicate ids keep the first).
/// 2. Only finished matches with both scores non-negative integers count; the rest are skipped.
/// 3. A match naming a team outside `teams` is skipped entirely.
/// 4. Rows are sorted by points, goal difference, wins, goals for (all descending).
///    Rows still tied keep input order.
///
/// Never fails: malformed or orphan matches are simply left out.
pub fn compute_standings(
    teams: &[Team],
    matches: &[Match],
    policy: PointsPolicy,
) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = Vec::with_capacity(teams.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(teams.len());
    for team in teams {
        if index.contains_key(team.id.as_str()) {
            continue;
        }
        index.insert(team.id.as_str(), rows.len());
        rows.push(StandingsRow::new(team));
    }

    // Kickoff only orders the form sequence; undated matches keep input order and come first.
    let mut counted: Vec<(&Match, usize, usize, u64, u64)> = matches
        .iter()
        .filter_map(|m| {
            let (score_home, score_away) = m.final_score()?;
            let home = *index.get(m.home_team_id.as_str())?;
            let away = *index.get(m.away_team_id.as_str())?;
            Some((m, home, away, score_home, score_away))
        })
        .collect();
    counted.sort_by_key(|(m, ..)| m.kickoff);

    for (_, home, away, score_home, score_away) in counted {
        rows[home].record(score_home, score_away, policy);
        rows[away].record(score_away, score_home, policy);
    }

    for row in &mut rows {
        row.refresh_goal_difference();
        let excess = row.form.len().saturating_sub(FORM_LENGTH);
        row.form.drain(..excess);
    }

    // slice::sort_by is stable, which is what keeps remaining ties in input order.
    rows.sort_by(compare_rows);
    for (i, row) in rows.iter_mut().enumerate() {
        row.position = u32::try_from(i + 1).unwrap_or(u32::MAX);
    }
    rows
}

/// Tie-break chain: points, goal difference, wins, goals for.
fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Number of matches that actually contributed to the table.
///
/// `matches.len() - count_counted_matches(..)` is how many were skipped as malformed or orphaned.
pub fn count_counted_matches(teams: &[Team], matches: &[Match]) -> usize {
    matches
        .iter()
        .filter(|m| m.final_score().is_some())
        .filter(|m| {
            let known = |id: &str| teams.iter().any(|t| t.id == id);
            known(m.home_team_id.as_str()) && known(m.away_team_id.as_str())
        })
        .count()
}
