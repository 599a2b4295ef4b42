//! Single binary web server for the league API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! Set SEED_DEMO=1 to start with the demo championship loaded.

use actix_web::{web::Data, App, HttpServer};
use std::sync::Arc;
use varzea_league::api::{self, AppState};
use varzea_league::config::ServerConfig;
use varzea_league::seed::demo_championship;
use varzea_league::{ChampionshipRepository, InMemoryRepository};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();

    let repo = InMemoryRepository::new();
    if config.seed_demo {
        match demo_championship().and_then(|c| repo.create(c)) {
            Ok(c) => log::info!("Loaded demo championship {} ({})", c.name, c.id),
            Err(e) => log::error!("Could not load demo championship: {}", e),
        }
    }
    let repo: Arc<dyn ChampionshipRepository> = Arc::new(repo);
    let state: AppState = Data::from(repo);

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
