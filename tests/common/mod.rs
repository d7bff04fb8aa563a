use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use matchhub::config::Config;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub struct TestServer {
    base_url: String,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Spawn the service on an ephemeral port against a migrated in-memory
/// database.
pub async fn spawn_test_server(config: Config) -> TestServer {
    let pool = sqlx::SqlitePool::connect(":memory:").await.unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let app = matchhub::app(pool, config);
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{}", addr),
    }
}

pub fn test_config(artdb_url: &str) -> Config {
    Config {
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        site_url: "https://matchhub.test".to_string(),
        site_name: "MatchHub".to_string(),
        indexing_enabled: true,
        artdb_url: artdb_url.to_string(),
        artdb_api_key: "test-key".to_string(),
    }
}

/// Stub of the upstream art database, counting the requests it serves.
pub struct StubArtDb {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl StubArtDb {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
struct StubState {
    hits: Arc<AtomicUsize>,
    fail: bool,
}

async fn stub_search(State(state): State<StubState>) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if state.fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "errors": ["backend unavailable"] })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": [
                { "id": 101, "name": "Rocket League", "verified": true },
                { "id": 102, "name": "Rocket Arena" },
            ],
        })),
    )
}

async fn stub_get_game(
    State(state): State<StubState>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if state.fail {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "errors": ["backend unavailable"] })),
        );
    }
    if id == 404 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "errors": ["Game not found"] })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": { "id": id, "name": "Rocket League", "verified": true },
        })),
    )
}

/// Spawn the stub upstream; `fail` makes every endpoint return HTTP 500.
pub async fn spawn_stub_artdb(fail: bool) -> StubArtDb {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = StubState {
        hits: hits.clone(),
        fail,
    };

    let router = Router::new()
        .route("/search/autocomplete", get(stub_search))
        .route("/games/id/:id", get(stub_get_game))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    StubArtDb {
        base_url: format!("http://{}", addr),
        hits,
    }
}
