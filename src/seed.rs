//! Demo championship: the league's original seed data.

use crate::models::{Championship, GoalEvent, GoalType, LeagueError, PointsPolicy};
use chrono::{TimeZone, Utc};

/// Four teams, two finished matches with goal events and two scheduled ones.
pub fn demo_championship() -> Result<Championship, LeagueError> {
    let mut c = Championship::new("Copa Várzea", PointsPolicy::STANDARD)?;
    c.add_team_with_id("2", "FC Barcelona do Bairro")?;
    c.add_team_with_id("5", "Real Periferia")?;
    c.add_team_with_id("8", "Santos da Quebrada")?;
    c.add_team_with_id("9", "Corinthians do Povo")?;

    let opener = c.schedule_match("2", "5", Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).single())?;
    c.record_result(opener, 2, 1)?;
    c.add_goal(opener, GoalEvent::new("4", "Pedro Santos", "2", 15, GoalType::Goal))?;
    c.add_goal(opener, GoalEvent::new("6", "Carlos Rocha", "5", 38, GoalType::Goal))?;
    c.add_goal(opener, GoalEvent::new("4", "Pedro Santos", "2", 71, GoalType::Goal))?;

    let second = c.schedule_match("8", "9", Utc.with_ymd_and_hms(2024, 3, 10, 11, 0, 0).single())?;
    c.record_result(second, 1, 0)?;
    c.add_goal(second, GoalEvent::new("7", "Lucas Lima", "8", 52, GoalType::Penalty))?;

    c.schedule_match("2", "8", Utc.with_ymd_and_hms(2024, 3, 17, 9, 0, 0).single())?;
    c.schedule_match("5", "9", Utc.with_ymd_and_hms(2024, 3, 17, 11, 0, 0).single())?;

    Ok(c)
}
