mod artdb;
mod pages;
mod robots;

use crate::AppState;
use axum::{routing::get, Router};

async fn health() -> &'static str {
    "ok"
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/robots.txt", get(robots::serve))
        .route("/api/artdb/search", get(artdb::search))
        .route("/api/artdb/games/:id", get(artdb::get_game))
        .route("/api/lobbies", get(pages::list_lobbies))
        .route("/api/awards", get(pages::list_awards))
        .route("/api/pages/games/:slug", get(pages::game_page))
        .route("/api/pages/lobbies/:id", get(pages::lobby_page))
        .route("/api/pages/players/:username", get(pages::player_page))
}
