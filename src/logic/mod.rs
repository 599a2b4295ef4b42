//! League business logic: standings, top scorers, export.

mod export;
mod scorers;
mod standings;

pub use export::{standings_csv, write_standings_csv};
pub use scorers::{compute_top_scorers, DEFAULT_SCORER_LIMIT};
pub use standings::{compute_standings, count_counted_matches, FORM_LENGTH};
