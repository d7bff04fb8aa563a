use crate::models::GameData;
use crate::slug::slug_matches_game_name;
use sqlx::SqlitePool;
use tracing::warn;

#[derive(Clone)]
pub struct GameRepository {
    pool: SqlitePool,
}

impl GameRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch a game by slug. Tries the stored slug column first, then falls
    /// back to matching the slug against game names, since stored slugs can
    /// lag behind a renamed game.
    pub async fn get_by_slug(&self, slug: &str) -> Option<GameData> {
        let direct = sqlx::query_as::<_, GameData>(
            "SELECT name, slug, cover_url, updated_at FROM games WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await;

        match direct {
            Ok(Some(game)) => return Some(game),
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, slug, "game lookup failed");
                return None;
            }
        }

        let all = sqlx::query_as::<_, GameData>(
            "SELECT name, slug, cover_url, updated_at FROM games",
        )
        .fetch_all(&self.pool)
        .await;

        match all {
            Ok(games) => games
                .into_iter()
                .find(|game| slug_matches_game_name(slug, &game.name)),
            Err(e) => {
                warn!(error = %e, slug, "game name scan failed");
                None
            }
        }
    }
}
