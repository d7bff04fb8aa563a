use crate::awards::AwardType;
use crate::meta::{build_meta, PageMeta};
use crate::slug::slug_to_name;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

/// The static endorsement registry, for client-side rendering.
pub async fn list_awards() -> Json<Value> {
    let awards: Vec<_> = AwardType::ALL.iter().map(|award| award.config()).collect();
    Json(json!({ "awards": awards }))
}

/// Public lobbies only, newest first.
pub async fn list_lobbies(State(state): State<AppState>) -> Json<Value> {
    let lobbies = state.lobbies.list_public().await;
    Json(json!({ "lobbies": lobbies }))
}

/// Game page payload: the game (if known) plus its SEO tag set. Unknown
/// slugs still render a page shell with a title derived from the slug.
pub async fn game_page(State(state): State<AppState>, Path(slug): Path<String>) -> Json<Value> {
    let game = state.games.get_by_slug(&slug).await;

    let page = match &game {
        Some(game) => PageMeta::new(
            game.name.clone(),
            format!("Find lobbies and players for {}.", game.name),
            format!("/games/{}", game.slug),
        ),
        None => PageMeta::new(
            slug_to_name(&slug),
            "Browse games, lobbies, and players.",
            format!("/games/{slug}"),
        ),
    };

    Json(json!({ "game": game, "meta": build_meta(&state.config, &page) }))
}

/// Lobby page payload. Private and missing lobbies stay out of search
/// indexes.
pub async fn lobby_page(State(state): State<AppState>, Path(id): Path<String>) -> Json<Value> {
    let lobby = state.lobbies.get(&id).await;

    let mut page = match &lobby {
        Some(lobby) => {
            let title = match &lobby.game_name {
                Some(game_name) => format!("{game_name} Lobby"),
                None => "Lobby".to_string(),
            };
            PageMeta::new(
                title,
                "Join this lobby and find your next match.",
                format!("/lobbies/{}", lobby.id),
            )
        }
        None => PageMeta::new(
            "Lobby",
            "This lobby is no longer available.",
            format!("/lobbies/{id}"),
        ),
    };

    if !lobby.as_ref().is_some_and(|l| l.is_public) {
        page = page.noindex();
    }

    Json(json!({ "lobby": lobby, "meta": build_meta(&state.config, &page) }))
}

/// Player page payload. Private profiles are no-indexed and their
/// endorsement tallies are withheld.
pub async fn player_page(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<Value> {
    let player = state.players.get(&username).await;

    let (page, awards) = match &player {
        Some(player) => {
            let shown_name = player
                .display_name
                .clone()
                .unwrap_or_else(|| player.username.clone());
            let page = PageMeta::new(
                shown_name.clone(),
                format!("{shown_name}'s profile, endorsements, and lobbies."),
                format!("/players/{}", player.username),
            );

            if player.is_public {
                let tallies = state.players.award_tallies(&player.username).await;
                (page, Some(tallies))
            } else {
                (page.noindex(), None)
            }
        }
        None => (
            PageMeta::new(
                "Player",
                "This player could not be found.",
                format!("/players/{username}"),
            )
            .noindex(),
            None,
        ),
    };

    Json(json!({
        "player": player,
        "awards": awards,
        "meta": build_meta(&state.config, &page),
    }))
}
