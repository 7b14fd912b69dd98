use poem::middleware::Cors;

use super::{cors_config::CorsConfig, server_config::ServerConfig};

/// Settings read once at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }

    pub fn cors_middleware(&self) -> Cors {
        self.cors.middleware()
    }
}
