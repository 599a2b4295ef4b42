//! REST API: championship management plus standings and top-scorer endpoints.
//!
//! Register with [`configure`] and provide an [`AppState`] as app data.

use crate::logic::{compute_standings, compute_top_scorers, standings_csv, DEFAULT_SCORER_LIMIT};
use crate::models::{
    Championship, ChampionshipId, GoalEvent, LeagueError, Match, MatchId, MatchStatus,
    PointsPolicy, Team, TeamId,
};
use crate::store::ChampionshipRepository;
use actix_web::{
    delete,
    error::InternalError,
    get,
    http::StatusCode,
    post, put,
    web::{self, Data, Json, Path, Query},
    HttpResponse, Responder, ResponseError,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared storage handed to every handler.
pub type AppState = Data<dyn ChampionshipRepository>;

impl ResponseError for LeagueError {
    fn status_code(&self) -> StatusCode {
        match self {
            LeagueError::ChampionshipNotFound(_)
            | LeagueError::TeamNotFound(_)
            | LeagueError::MatchNotFound(_) => StatusCode::NOT_FOUND,
            LeagueError::Storage(_) | LeagueError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("Rejected request: {}", self);
        }
        HttpResponse::build(status).json(serde_json::json!({ "error": self.to_string() }))
    }
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComputeStandingsBody {
    teams: Vec<Team>,
    #[serde(default)]
    matches: Vec<Match>,
    #[serde(default)]
    points_policy: PointsPolicy,
}

#[derive(Deserialize)]
struct ComputeScorersBody {
    #[serde(default)]
    teams: Vec<Team>,
    matches: Vec<Match>,
}

#[derive(Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

impl LimitQuery {
    fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_SCORER_LIMIT)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateChampionshipBody {
    name: String,
    #[serde(default)]
    points_policy: PointsPolicy,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
    /// Generated when absent.
    #[serde(default)]
    id: Option<TeamId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleMatchBody {
    home_team_id: TeamId,
    away_team_id: TeamId,
    #[serde(default)]
    kickoff: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordResultBody {
    score_home: i64,
    score_away: i64,
}

#[derive(Deserialize)]
struct SetStatusBody {
    status: MatchStatus,
}

/// Path segment: championship id (e.g. /api/championships/{id})
#[derive(Deserialize)]
struct ChampionshipPath {
    id: ChampionshipId,
}

/// Path segments: championship id and team id.
#[derive(Deserialize)]
struct ChampionshipTeamPath {
    id: ChampionshipId,
    team_id: TeamId,
}

/// Path segments: championship id and match id.
#[derive(Deserialize)]
struct ChampionshipMatchPath {
    id: ChampionshipId,
    match_id: MatchId,
}

fn score(value: i64) -> Result<u64, LeagueError> {
    u64::try_from(value).map_err(|_| LeagueError::InvalidScore)
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "varzea-league",
    })
}

/// Stateless: table for the posted teams and matches.
#[post("/api/standings")]
async fn api_compute_standings(body: Json<ComputeStandingsBody>) -> HttpResponse {
    HttpResponse::Ok().json(compute_standings(&body.teams, &body.matches, body.points_policy))
}

/// Stateless: top scorers for the posted matches.
#[post("/api/stats/top-scorers")]
async fn api_compute_top_scorers(
    query: Query<LimitQuery>,
    body: Json<ComputeScorersBody>,
) -> HttpResponse {
    HttpResponse::Ok().json(compute_top_scorers(&body.teams, &body.matches, query.limit()))
}

#[get("/api/championships")]
async fn api_list_championships(state: AppState) -> Result<HttpResponse, LeagueError> {
    Ok(HttpResponse::Ok().json(state.list()?))
}

#[post("/api/championships")]
async fn api_create_championship(
    state: AppState,
    body: Json<CreateChampionshipBody>,
) -> Result<HttpResponse, LeagueError> {
    let championship = state.create(Championship::new(&body.name, body.points_policy)?)?;
    log::info!("Created championship {} ({})", championship.name, championship.id);
    Ok(HttpResponse::Created().json(championship))
}

#[get("/api/championships/{id}")]
async fn api_get_championship(
    state: AppState,
    path: Path<ChampionshipPath>,
) -> Result<HttpResponse, LeagueError> {
    Ok(HttpResponse::Ok().json(state.get(path.id)?))
}

#[delete("/api/championships/{id}")]
async fn api_delete_championship(
    state: AppState,
    path: Path<ChampionshipPath>,
) -> Result<HttpResponse, LeagueError> {
    let removed = state.delete(path.id)?;
    log::info!("Deleted championship {} ({})", removed.name, removed.id);
    Ok(HttpResponse::NoContent().finish())
}

/// Replace the points policy. Standings are recomputed with it on the next read.
#[put("/api/championships/{id}/points-policy")]
async fn api_set_points_policy(
    state: AppState,
    path: Path<ChampionshipPath>,
    body: Json<PointsPolicy>,
) -> Result<HttpResponse, LeagueError> {
    let policy = body.into_inner();
    let updated = state.update(path.id, &mut |c: &mut Championship| {
        c.points_policy = policy;
        Ok(())
    })?;
    Ok(HttpResponse::Ok().json(updated))
}

#[post("/api/championships/{id}/teams")]
async fn api_add_team(
    state: AppState,
    path: Path<ChampionshipPath>,
    body: Json<AddTeamBody>,
) -> Result<HttpResponse, LeagueError> {
    let updated = state.update(path.id, &mut |c: &mut Championship| {
        let added = match &body.id {
            Some(id) => c.add_team_with_id(id.clone(), &body.name),
            None => c.add_team(&body.name),
        };
        added.map(|_| ())
    })?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/api/championships/{id}/teams/{team_id}")]
async fn api_remove_team(
    state: AppState,
    path: Path<ChampionshipTeamPath>,
) -> Result<HttpResponse, LeagueError> {
    let updated = state.update(path.id, &mut |c: &mut Championship| {
        c.remove_team(&path.team_id).map(|_| ())
    })?;
    Ok(HttpResponse::Ok().json(updated))
}

#[post("/api/championships/{id}/matches")]
async fn api_schedule_match(
    state: AppState,
    path: Path<ChampionshipPath>,
    body: Json<ScheduleMatchBody>,
) -> Result<HttpResponse, LeagueError> {
    let updated = state.update(path.id, &mut |c: &mut Championship| {
        c.schedule_match(&body.home_team_id, &body.away_team_id, body.kickoff)
            .map(|_| ())
    })?;
    Ok(HttpResponse::Ok().json(updated))
}

#[put("/api/championships/{id}/matches/{match_id}/result")]
async fn api_record_result(
    state: AppState,
    path: Path<ChampionshipMatchPath>,
    body: Json<RecordResultBody>,
) -> Result<HttpResponse, LeagueError> {
    let (score_home, score_away) = (score(body.score_home)?, score(body.score_away)?);
    let updated = state.update(path.id, &mut |c: &mut Championship| {
        c.record_result(path.match_id, score_home, score_away)
    })?;
    log::info!(
        "Recorded result {}-{} for match {} in championship {}",
        score_home,
        score_away,
        path.match_id,
        path.id
    );
    Ok(HttpResponse::Ok().json(updated))
}

#[put("/api/championships/{id}/matches/{match_id}/status")]
async fn api_set_match_status(
    state: AppState,
    path: Path<ChampionshipMatchPath>,
    body: Json<SetStatusBody>,
) -> Result<HttpResponse, LeagueError> {
    let updated = state.update(path.id, &mut |c: &mut Championship| {
        c.set_status(path.match_id, body.status)
    })?;
    Ok(HttpResponse::Ok().json(updated))
}

#[post("/api/championships/{id}/matches/{match_id}/goals")]
async fn api_add_goal(
    state: AppState,
    path: Path<ChampionshipMatchPath>,
    body: Json<GoalEvent>,
) -> Result<HttpResponse, LeagueError> {
    let goal = body.into_inner();
    let updated = state.update(path.id, &mut |c: &mut Championship| {
        c.add_goal(path.match_id, goal.clone())
    })?;
    Ok(HttpResponse::Ok().json(updated))
}

#[delete("/api/championships/{id}/matches/{match_id}")]
async fn api_remove_match(
    state: AppState,
    path: Path<ChampionshipMatchPath>,
) -> Result<HttpResponse, LeagueError> {
    let updated = state.update(path.id, &mut |c: &mut Championship| {
        c.remove_match(path.match_id).map(|_| ())
    })?;
    Ok(HttpResponse::Ok().json(updated))
}

#[get("/api/championships/{id}/standings")]
async fn api_standings(
    state: AppState,
    path: Path<ChampionshipPath>,
) -> Result<HttpResponse, LeagueError> {
    Ok(HttpResponse::Ok().json(state.get(path.id)?.standings()))
}

#[get("/api/championships/{id}/standings.csv")]
async fn api_standings_csv(
    state: AppState,
    path: Path<ChampionshipPath>,
) -> Result<HttpResponse, LeagueError> {
    let rows = state.get(path.id)?.standings();
    let body = standings_csv(&rows).map_err(|e| LeagueError::Export(e.to_string()))?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"standings-{}.csv\"", path.id),
        ))
        .body(body))
}

#[get("/api/championships/{id}/stats/top-scorers")]
async fn api_top_scorers(
    state: AppState,
    path: Path<ChampionshipPath>,
    query: Query<LimitQuery>,
) -> Result<HttpResponse, LeagueError> {
    Ok(HttpResponse::Ok().json(state.get(path.id)?.top_scorers(query.limit())))
}

/// Body, path and query parse failures use the same `{"error": ..}` shape as [`LeagueError`].
fn extractor_error<E>(err: E, status: StatusCode) -> actix_web::Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    log::warn!("Rejected request: {}", err);
    let response = HttpResponse::build(status).json(serde_json::json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}

/// Register every route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| extractor_error(err, StatusCode::BAD_REQUEST)),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| extractor_error(err, StatusCode::NOT_FOUND)),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| extractor_error(err, StatusCode::BAD_REQUEST)),
    );
    cfg.service(api_health)
        .service(api_compute_standings)
        .service(api_compute_top_scorers)
        .service(api_list_championships)
        .service(api_create_championship)
        .service(api_get_championship)
        .service(api_delete_championship)
        .service(api_set_points_policy)
        .service(api_add_team)
        .service(api_remove_team)
        .service(api_schedule_match)
        .service(api_record_result)
        .service(api_set_match_status)
        .service(api_add_goal)
        .service(api_remove_match)
        .service(api_standings_csv)
        .service(api_standings)
        .service(api_top_scorers);
}
