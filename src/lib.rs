//! Várzea league organizer: library with models, standings logic and the REST API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod seed;
pub mod store;

pub use logic::{
    compute_standings, compute_top_scorers, count_counted_matches, standings_csv,
    write_standings_csv, DEFAULT_SCORER_LIMIT, FORM_LENGTH,
};
pub use models::{
    Championship, ChampionshipId, FormResult, GoalEvent, GoalType, LeagueError, Match, MatchId,
    MatchStatus, PointsPolicy, ScorerEntry, StandingsRow, Team, TeamId,
};
pub use store::{ChampionshipRepository, InMemoryRepository};
