use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Per-source HTTP timeout for one aggregation pass.
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    /// Freshness window of the aggregated-news cache.
    pub cache_ttl_secs: u64,
    /// Upper bound on simultaneous source fetches in one pass.
    pub max_concurrent_fetches: usize,
}
