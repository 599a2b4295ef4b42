//! Top scorers: goal events of finished matches, grouped by player.

use crate::models::{Match, ScorerEntry, Team};
use std::collections::HashMap;

/// Default length of the top-scorer list.
pub const DEFAULT_SCORER_LIMIT: usize = 10;

/// Rank players by goals over finished matches, best first, at most `limit` entries.
///
/// Own goals and goals without a player id are not credited. A player's name and team are
/// taken from the first goal seen for them; later goals only add to the count.
/// `teams` is only used to look up team names.
pub fn compute_top_scorers(teams: &[Team], matches: &[Match], limit: usize) -> Vec<ScorerEntry> {
    let mut team_names: HashMap<&str, &str> = HashMap::with_capacity(teams.len());
    for team in teams {
        team_names.entry(team.id.as_str()).or_insert(team.name.as_str());
    }

    let mut scorers: Vec<ScorerEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    let credited = matches
        .iter()
        .filter(|m| m.is_finished())
        .flat_map(|m| m.goals.iter())
        .filter(|g| g.kind.credits_scorer());

    for goal in credited {
        let Some(player_id) = goal.player_id.as_deref().filter(|id| !id.trim().is_empty()) else {
            continue;
        };
        match index.get(player_id) {
            Some(&i) => scorers[i].goals += 1,
            None => {
                index.insert(player_id, scorers.len());
                scorers.push(ScorerEntry {
                    player_id: player_id.to_string(),
                    player_name: goal.player_name.clone().unwrap_or_default(),
                    team_id: goal.team_id.clone(),
                    team_name: team_names.get(goal.team_id.as_str()).map(|n| n.to_string()),
                    goals: 1,
                });
            }
        }
    }

    // Stable: equal counts stay in first-seen order.
    scorers.sort_by(|a, b| b.goals.cmp(&a.goals));
    scorers.truncate(limit);
    scorers
}
