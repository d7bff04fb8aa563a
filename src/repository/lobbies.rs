use crate::models::{LobbyData, LobbyRow};
use sqlx::SqlitePool;
use tracing::warn;

#[derive(Clone)]
pub struct LobbyRepository {
    pool: SqlitePool,
}

impl LobbyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: &str) -> Option<LobbyData> {
        let row = sqlx::query_as::<_, LobbyRow>(
            "SELECT id, game_name, visibility, updated_at FROM lobbies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        match row {
            Ok(row) => row.map(LobbyData::from),
            Err(e) => {
                warn!(error = %e, id, "lobby lookup failed");
                None
            }
        }
    }

    /// Public lobbies only, newest first. The SQL filter mirrors the
    /// visibility rule in `LobbyData::from`: NULL counts as public.
    pub async fn list_public(&self) -> Vec<LobbyData> {
        let rows = sqlx::query_as::<_, LobbyRow>(
            "SELECT id, game_name, visibility, updated_at FROM lobbies \
             WHERE visibility IS NULL OR visibility = 'public' \
             ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await;

        match rows {
            Ok(rows) => rows.into_iter().map(LobbyData::from).collect(),
            Err(e) => {
                warn!(error = %e, "lobby listing failed");
                Vec::new()
            }
        }
    }
}
