mod client;
mod error;
mod types;

pub use client::ArtDbClient;
pub use error::ArtDbError;
pub use types::ArtGame;
