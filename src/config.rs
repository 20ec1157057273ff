use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CHAT_UPSTREAM: &str = "https://www.messageapi.com/message";
pub const DEFAULT_STATS_UPSTREAM: &str = "https://leetcode.com/graphql";
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

/// Runtime settings, read from the environment (and `.env` in development).
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub chat_upstream_url: String,
    pub stats_upstream_url: String,
    pub static_dir: PathBuf,
    pub upstream_timeout: Duration,
    /// Extra origin allowed to call the API, e.g. the trunk dev server.
    pub cors_allow_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            chat_upstream_url: DEFAULT_CHAT_UPSTREAM.to_string(),
            stats_upstream_url: DEFAULT_STATS_UPSTREAM.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            cors_allow_origin: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            port: text("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            chat_upstream_url: text("CHAT_UPSTREAM_URL").unwrap_or(defaults.chat_upstream_url),
            stats_upstream_url: text("STATS_UPSTREAM_URL").unwrap_or(defaults.stats_upstream_url),
            static_dir: text("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            upstream_timeout: text("UPSTREAM_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.upstream_timeout),
            cors_allow_origin: text("CORS_ALLOW_ORIGIN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(ServerConfig::from_lookup(lookup(&[])), ServerConfig::default());
    }

    #[test]
    fn reads_every_setting() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("CHAT_UPSTREAM_URL", "http://chat.internal/message"),
            ("STATS_UPSTREAM_URL", "http://stats.internal/graphql"),
            ("STATIC_DIR", "/srv/site"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
            ("CORS_ALLOW_ORIGIN", "http://localhost:8081"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.chat_upstream_url, "http://chat.internal/message");
        assert_eq!(config.stats_upstream_url, "http://stats.internal/graphql");
        assert_eq!(config.static_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert_eq!(config.cors_allow_origin.as_deref(), Some("http://localhost:8081"));
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORT", "eighty"),
            ("UPSTREAM_TIMEOUT_SECS", "0"),
            ("CORS_ALLOW_ORIGIN", "  "),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
        assert!(config.cors_allow_origin.is_none());
    }
}
