use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

/// Queries shorter than this never reach the upstream art database.
const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<Value>) {
    if params.query.chars().count() < MIN_QUERY_LEN {
        return (StatusCode::OK, Json(json!({ "results": [] })));
    }

    match state.artdb.search(&params.query).await {
        Ok(results) => (StatusCode::OK, Json(json!({ "results": results }))),
        Err(e) => {
            error!(error = %e, query = %params.query, "art database search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "results": [], "error": "Failed to search games" })),
            )
        }
    }
}

pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let Ok(id) = id.parse::<i64>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid game id" })),
        );
    };

    match state.artdb.get_game(id).await {
        Ok(Some(game)) => (StatusCode::OK, Json(json!(game))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Game not found" })),
        ),
        Err(e) => {
            error!(error = %e, id, "art database lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch game" })),
            )
        }
    }
}
