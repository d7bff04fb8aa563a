use std::time::Duration;

use super::error::ArtDbError;
use super::types::{ArtGame, Envelope};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the external game-art database.
///
/// Built once at startup and shared through `AppState`; all requests carry
/// the API key as a bearer token.
pub struct ArtDbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ArtDbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Search the art database by name fragment.
    pub async fn search(&self, query: &str) -> Result<Vec<ArtGame>, ArtDbError> {
        let resp = self
            .http
            .get(format!("{}/search/autocomplete", self.base_url))
            .bearer_auth(&self.api_key)
            .query(&[("term", query)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ArtDbError::Status(status.as_u16()));
        }

        let envelope: Envelope<Vec<ArtGame>> = resp.json().await?;
        if !envelope.success {
            return Err(ArtDbError::Api(envelope.error_message()));
        }

        Ok(envelope.data.unwrap_or_default())
    }

    /// Look up a single game by its art-database id. Returns None when the
    /// id is unknown upstream.
    pub async fn get_game(&self, id: i64) -> Result<Option<ArtGame>, ArtDbError> {
        let resp = self
            .http
            .get(format!("{}/games/id/{}", self.base_url, id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ArtDbError::Status(status.as_u16()));
        }

        let envelope: Envelope<ArtGame> = resp.json().await?;
        if !envelope.success {
            return Err(ArtDbError::Api(envelope.error_message()));
        }

        Ok(envelope.data)
    }
}
