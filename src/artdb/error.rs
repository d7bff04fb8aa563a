/// Errors from the game-art database client.
#[derive(Debug, thiserror::Error)]
pub enum ArtDbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("art database rejected the request (HTTP {0})")]
    Status(u16),

    #[error("art database reported failure: {0}")]
    Api(String),
}
