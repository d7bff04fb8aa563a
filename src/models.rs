use crate::awards::AwardType;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A game from the catalog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameData {
    pub name: String,
    pub slug: String,
    pub cover_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Raw lobby row; `visibility` is the stored tri-state field.
#[derive(Debug, Clone, FromRow)]
pub struct LobbyRow {
    pub id: String,
    pub game_name: Option<String>,
    pub visibility: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A joinable lobby as presented to clients.
#[derive(Debug, Clone, Serialize)]
pub struct LobbyData {
    pub id: String,
    pub game_name: Option<String>,
    pub is_public: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<LobbyRow> for LobbyData {
    fn from(row: LobbyRow) -> Self {
        // NULL visibility is treated as public.
        let is_public = matches!(row.visibility.as_deref(), None | Some("public"));
        Self {
            id: row.id,
            game_name: row.game_name,
            is_public,
            updated_at: row.updated_at,
        }
    }
}

/// Raw player row; `is_private` is the stored flag.
#[derive(Debug, Clone, FromRow)]
pub struct PlayerRow {
    pub username: String,
    pub display_name: Option<String>,
    pub is_private: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A player profile as presented to clients.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerData {
    pub username: String,
    pub display_name: Option<String>,
    pub is_public: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<PlayerRow> for PlayerData {
    fn from(row: PlayerRow) -> Self {
        Self {
            username: row.username,
            display_name: row.display_name,
            is_public: !row.is_private,
            updated_at: row.updated_at,
        }
    }
}

/// Endorsement count for one award category on a profile.
#[derive(Debug, Clone, Serialize)]
pub struct AwardTally {
    #[serde(rename = "type")]
    pub award_type: AwardType,
    pub count: i64,
}
