use std::env;

use poem::middleware::Cors;

const DEFAULT_ORIGINS: &str = "http://localhost:8080";

/// Cross-origin settings for browser clients.
///
/// `CORS_ALLOWED_ORIGINS` holds a comma-separated origin list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let raw = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());
        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Self {
        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Self { allowed_origins }
    }

    pub fn middleware(&self) -> Cors {
        Cors::new()
            .allow_origins(self.allowed_origins.iter().map(String::as_str))
            .allow_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allow_headers(vec!["content-type"])
            .expose_headers(vec!["location"])
    }
}
