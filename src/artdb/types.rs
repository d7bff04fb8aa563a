use serde::{Deserialize, Serialize};

/// One game record from the art database.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtGame {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<i64>,
}

/// Response envelope wrapping every art database payload.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl<T> Envelope<T> {
    pub(crate) fn error_message(&self) -> String {
        if self.errors.is_empty() {
            "unknown error".to_string()
        } else {
            self.errors.join("; ")
        }
    }
}
