use std::env;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "8080";

/// Address the catalog HTTP listener binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Reads `SERVICE_IP` and `SERVICE_PORT`, falling back to `127.0.0.1:8080`.
    pub fn from_env() -> Self {
        Self::from_values(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> Self {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Self {
            ip: non_blank(ip).unwrap_or_else(|| DEFAULT_IP.to_string()),
            port: non_blank(port).unwrap_or_else(|| DEFAULT_PORT.to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}
