//! Server configuration from environment variables.
//!
//! - `HOST` (default `0.0.0.0`) and `PORT` (default `8080`): bind address.
//! - `SEED_DEMO` (`1`/`true`/`yes`): load the demo championship at startup.
//!
//! Log filtering is `RUST_LOG`, handled by env_logger.

/// Settings for the web binary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed_demo: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_demo: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(default_host);
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or_else(default_port);
        let seed_demo = lookup("SEED_DEMO")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self {
            host,
            port,
            seed_demo,
        }
    }
}
