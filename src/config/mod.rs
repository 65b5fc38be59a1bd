//! Application configuration module
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub nasa_api_url: String,
    pub nasa_api_key: String,
    pub bind_addr: String,
    pub cors_origins: Vec<String>,
    pub http_timeout_seconds: u64,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let nasa_api_url = env::var("NASA_API_URL")
            .unwrap_or_else(|_| "https://api.nasa.gov/neo/rest/v1".to_string());

        let nasa_api_key = env::var("NASA_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://localhost:3001".to_string()),
        );

        Ok(Self {
            nasa_api_url,
            nasa_api_key,
            bind_addr,
            cors_origins,
            http_timeout_seconds: env_u64("HTTP_TIMEOUT_SECONDS", 30),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
