//! CSV export of a standings table.

use crate::models::StandingsRow;
use std::io;

const HEADER: [&str; 12] = [
    "position",
    "team_id",
    "team",
    "played",
    "wins",
    "draws",
    "losses",
    "goals_for",
    "goals_against",
    "goal_difference",
    "points",
    "form",
];

/// Write `rows` as CSV (header + one record per row) to `writer`.
pub fn write_standings_csv<W: io::Write>(rows: &[StandingsRow], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record([
            row.position.to_string(),
            row.team_id.clone(),
            row.team_name.clone(),
            row.played.to_string(),
            row.wins.to_string(),
            row.draws.to_string(),
            row.losses.to_string(),
            row.goals_for.to_string(),
            row.goals_against.to_string(),
            row.goal_difference.to_string(),
            row.points.to_string(),
            row.form_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// The CSV export as an in-memory buffer.
pub fn standings_csv(rows: &[StandingsRow]) -> Result<Vec<u8>, csv::Error> {
    let mut buf = Vec::new();
    write_standings_csv(rows, &mut buf)?;
    Ok(buf)
}
