use crate::awards::AwardType;
use crate::models::{AwardTally, PlayerData, PlayerRow};
use sqlx::SqlitePool;
use tracing::warn;

#[derive(Clone)]
pub struct PlayerRepository {
    pool: SqlitePool,
}

impl PlayerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, username: &str) -> Option<PlayerData> {
        let row = sqlx::query_as::<_, PlayerRow>(
            "SELECT username, display_name, is_private, updated_at FROM players \
             WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await;

        match row {
            Ok(row) => row.map(PlayerData::from),
            Err(e) => {
                warn!(error = %e, username, "player lookup failed");
                None
            }
        }
    }

    /// Endorsement counts for a profile, highest first. Rows with a key
    /// outside the current registry (retired categories) are skipped.
    pub async fn award_tallies(&self, username: &str) -> Vec<AwardTally> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT award_type, count FROM player_awards WHERE username = $1 \
             ORDER BY count DESC",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await;

        let rows = match rows {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, username, "award tally query failed");
                return Vec::new();
            }
        };

        rows.into_iter()
            .filter_map(|(key, count)| {
                let Some(award_type) = AwardType::from_key(&key) else {
                    warn!(username, key, "skipping unknown award type");
                    return None;
                };
                Some(AwardTally { award_type, count })
            })
            .collect()
    }
}
