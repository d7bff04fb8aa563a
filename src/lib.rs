pub mod artdb;
pub mod awards;
pub mod config;
pub mod meta;
pub mod models;
pub mod repository;
mod routes;
pub mod slug;

use artdb::ArtDbClient;
use axum::Router;
use config::Config;
use repository::{GameRepository, LobbyRepository, PlayerRepository};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared handles constructed once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub artdb: Arc<ArtDbClient>,
    pub games: GameRepository,
    pub lobbies: LobbyRepository,
    pub players: PlayerRepository,
}

pub fn app(pool: SqlitePool, config: Config) -> Router {
    let state = AppState {
        artdb: Arc::new(ArtDbClient::new(&config.artdb_url, &config.artdb_api_key)),
        games: GameRepository::new(pool.clone()),
        lobbies: LobbyRepository::new(pool.clone()),
        players: PlayerRepository::new(pool),
        config: Arc::new(config),
    };

    routes::router()
        .layer(CorsLayer::permissive())
        .with_state(state)
}
