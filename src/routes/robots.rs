use crate::meta::robots_txt;
use crate::AppState;
use axum::extract::State;

pub async fn serve(State(state): State<AppState>) -> String {
    robots_txt(&state.config)
}
