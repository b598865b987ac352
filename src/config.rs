use serde::Deserialize;

use crate::models::DEFAULT_PRICE_CEILING;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// PostgreSQL connection URL; when unset the catalog is held in memory
    #[serde(default)]
    pub database_url: Option<String>,

    /// JSON file used to seed the in-memory catalog
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Redis connection URL; when unset search history is held in memory
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound of the price filter slider
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: f64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_price_ceiling() -> f64 {
    DEFAULT_PRICE_CEILING
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
