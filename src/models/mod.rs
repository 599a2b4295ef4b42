//! Data structures for the league: teams, matches, championships and derived tables.

mod championship;
mod game;
mod points;
mod standings;
mod team;

pub use championship::{Championship, ChampionshipId, LeagueError};
pub use game::{GoalEvent, GoalType, Match, MatchId, MatchStatus};
pub use points::PointsPolicy;
pub use standings::{FormResult, ScorerEntry, StandingsRow};
pub use team::{Team, TeamId};
