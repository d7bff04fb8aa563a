use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    /// Public origin of the site, used for canonical and sitemap URLs.
    pub site_url: String,
    pub site_name: String,
    /// Global toggle for search-engine indexing (robots.txt and meta robots).
    pub indexing_enabled: bool,
    pub artdb_url: String,
    pub artdb_api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:matchhub.db?mode=rwc".to_string()),
            site_url: env::var("SITE_URL").unwrap_or_else(|_| "https://matchhub.gg".to_string()),
            site_name: env::var("SITE_NAME").unwrap_or_else(|_| "MatchHub".to_string()),
            indexing_enabled: env::var("INDEXING_ENABLED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            artdb_url: env::var("ARTDB_URL")
                .unwrap_or_else(|_| "https://artdb.example.com/api/v2".to_string()),
            artdb_api_key: env::var("ARTDB_API_KEY").unwrap_or_default(),
        }
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
