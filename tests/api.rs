//! HTTP API tests: run the routes against an in-memory repository.

use actix_web::{http::StatusCode, test, web::Data, App};
use serde_json::{json, Value};
use std::sync::Arc;
use varzea_league::api::{self, AppState};
use varzea_league::seed::demo_championship;
use varzea_league::{ChampionshipRepository, InMemoryRepository};

fn state_with(repo: InMemoryRepository) -> AppState {
    let repo: Arc<dyn ChampionshipRepository> = Arc::new(repo);
    Data::from(repo)
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test::init_service(App::new().configure(api::configure)).await;
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ok"], json!(true));
}

#[actix_web::test]
async fn stateless_standings_uses_default_policy() {
    let app = test::init_service(App::new().configure(api::configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/standings")
        .set_json(json!({
            "teams": [{"id": "2", "name": "FC Barcelona do Bairro"}, {"teamId": "5", "name": "Real Periferia"}],
            "matches": [
                {"homeTeamId": "2", "awayTeamId": "5", "status": "finished", "scoreHome": 2, "scoreAway": 1},
                {"homeTeamId": "2", "awayTeamId": "5", "status": "finished", "scoreHome": "?", "scoreAway": 1},
                {"homeTeamId": "2", "awayTeamId": "5", "status": "scheduled", "scoreHome": null, "scoreAway": null}
            ]
        }))
        .to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows[0]["teamId"], json!("2"));
    assert_eq!(rows[0]["points"], json!(3));
    assert_eq!(rows[0]["goalDifference"], json!(1));
    assert_eq!(rows[0]["position"], json!(1));
    assert_eq!(rows[0]["form"], json!(["W"]));
    assert_eq!(rows[1]["played"], json!(1));
    assert_eq!(rows[1]["goalsAgainst"], json!(2));
}

#[actix_web::test]
async fn stateless_top_scorers_honours_limit() {
    let app = test::init_service(App::new().configure(api::configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/stats/top-scorers?limit=1")
        .set_json(json!({
            "matches": [{
                "homeTeamId": "2", "awayTeamId": "5", "status": "finished", "scoreHome": 3, "scoreAway": 0,
                "goals": [
                    {"playerId": "4", "playerName": "Pedro Santos", "teamId": "2", "minute": 3, "type": "goal"},
                    {"playerId": "4", "playerName": "Pedro Santos", "teamId": "2", "minute": 9, "type": "goal"},
                    {"playerId": "6", "playerName": "Carlos Rocha", "teamId": "5", "minute": 30, "type": "own_goal"},
                    {"playerId": "1", "playerName": "Beto", "teamId": "2", "minute": 50, "type": "penalty"}
                ]
            }]
        }))
        .to_request();
    let scorers: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(scorers, json!([{
        "playerId": "4", "playerName": "Pedro Santos", "teamId": "2", "teamName": null, "goals": 2
    }]));
}

#[actix_web::test]
async fn championship_lifecycle() {
    let app = test::init_service(
        App::new()
            .app_data(state_with(InMemoryRepository::new()))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/championships")
        .set_json(json!({"name": "Copa da Vila", "pointsPolicy": {"win": 2}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["pointsPolicy"], json!({"win": 2, "draw": 1, "loss": 0}));

    for (team_id, name) in [("a", "Unidos"), ("b", "Estrela")] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/championships/{id}/teams"))
            .set_json(json!({"id": team_id, "name": name}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::post()
        .uri(&format!("/api/championships/{id}/matches"))
        .set_json(json!({"homeTeamId": "a", "awayTeamId": "b", "kickoff": "2024-03-10T15:00:00Z"}))
        .to_request();
    let with_match: Value = test::call_and_read_body_json(&app, req).await;
    let match_id = with_match["matches"][0]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/championships/{id}/matches/{match_id}/result"))
        .set_json(json!({"scoreHome": 1, "scoreAway": 0}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&format!("/api/championships/{id}/matches/{match_id}/goals"))
        .set_json(json!({"playerId": "10", "playerName": "Tico", "teamId": "a", "minute": 88, "type": "goal"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/championships/{id}/standings"))
        .to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows[0]["teamId"], json!("a"));
    assert_eq!(rows[0]["points"], json!(2));

    let req = test::TestRequest::get()
        .uri(&format!("/api/championships/{id}/stats/top-scorers"))
        .to_request();
    let scorers: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(scorers[0]["teamName"], json!("Unidos"));

    let req = test::TestRequest::get()
        .uri(&format!("/api/championships/{id}/standings.csv"))
        .to_request();
    let csv = test::call_and_read_body(&app, req).await;
    let csv = String::from_utf8(csv.to_vec()).unwrap();
    assert!(csv.starts_with("position,team_id,team"));
    assert!(csv.contains("1,a,Unidos,1,1,0,0,1,0,1,2,W"));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/championships/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/championships/{id}"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn invalid_requests_map_to_client_errors() {
    let repo = InMemoryRepository::new();
    let seeded = repo.create(demo_championship().unwrap()).unwrap();
    let id = seeded.id;
    let match_id = seeded.matches[2].id;
    let app = test::init_service(
        App::new()
            .app_data(state_with(repo))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/championships/{id}/matches/{match_id}/result"))
        .set_json(json!({"scoreHome": -1, "scoreAway": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Scores must be non-negative integers"));

    let req = test::TestRequest::post()
        .uri(&format!("/api/championships/{id}/teams"))
        .set_json(json!({"id": "2", "name": "Outro"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/championships/{id}/teams/404"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/championships")
        .set_json(json!({"name": "  "}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    // The failed calls changed nothing.
    let req = test::TestRequest::get()
        .uri(&format!("/api/championships/{id}/standings"))
        .to_request();
    let rows: Value = test::call_and_read_body_json(&app, req).await;
    let order: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["teamId"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["2", "8", "5", "9"]);
}

#[actix_web::test]
async fn malformed_requests_still_answer_with_json_errors() {
    let repo = InMemoryRepository::new();
    let id = repo.create(demo_championship().unwrap()).unwrap().id;
    let app = test::init_service(
        App::new()
            .app_data(state_with(repo))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/standings")
        .set_json(json!({"teams": "nope"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::get()
        .uri("/api/championships/not-a-uuid/standings")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::get()
        .uri(&format!("/api/championships/{id}/stats/top-scorers?limit=abc"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn stateless_standings_tolerates_bad_goal_entries() {
    let app = test::init_service(App::new().configure(api::configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/standings")
        .set_json(json!({
            "teams": [{"id": "a", "name": "Unidos"}, {"id": "b", "name": "Estrela"}],
            "matches": [{
                "homeTeamId": "a", "awayTeamId": "b", "status": "finished", "scoreHome": 1, "scoreAway": 0,
                "goals": [{"playerId": "9", "teamId": null, "minute": "90+2", "type": "bicycle"}]
            }]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let rows: Value = test::read_body_json(resp).await;
    assert_eq!(rows[0]["teamId"], json!("a"));
    assert_eq!(rows[0]["points"], json!(3));
}
