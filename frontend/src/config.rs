use leptos::prelude::*;

/// Chat endpoint used when no build-time override is given.
pub const DEFAULT_CHAT_ENDPOINT: &str = "https://www.messageapi.com/message";
/// Public relay that forwards the stats query around the browser's origin checks.
pub const DEFAULT_STATS_PROXY: &str = "https://api.allorigins.win/raw?url=";
pub const DEFAULT_STATS_TARGET: &str = "https://leetcode.com/graphql";
pub const DEFAULT_LEETCODE_USER: &str = "priyansh";
/// Assumed size of the ranked population for the percentile estimate.
pub const DEFAULT_POPULATION: u64 = 1_000_000;
pub const DEFAULT_TIMEOUT_MS: u32 = 15_000;

#[derive(Clone, Debug, PartialEq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub timeout_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsConfig {
    pub username: String,
    pub target_url: String,
    /// Forwarding prefix; the URL-encoded target is appended to it.
    /// `None` posts to `target_url` directly (e.g. the same-origin `/api/leetcode`).
    pub proxy_prefix: Option<String>,
    pub population: u64,
    pub timeout_ms: u32,
}

impl StatsConfig {
    pub fn request_url(&self) -> String {
        match &self.proxy_prefix {
            Some(prefix) => format!("{prefix}{}", urlencoding::encode(&self.target_url)),
            None => self.target_url.clone(),
        }
    }
}

/// Everything the page needs to reach the outside world, provided through
/// Leptos context.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub chat: ChatConfig,
    pub stats: StatsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig {
                endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
                timeout_ms: DEFAULT_TIMEOUT_MS,
            },
            stats: StatsConfig {
                username: DEFAULT_LEETCODE_USER.to_string(),
                target_url: DEFAULT_STATS_TARGET.to_string(),
                proxy_prefix: Some(DEFAULT_STATS_PROXY.to_string()),
                population: DEFAULT_POPULATION,
                timeout_ms: DEFAULT_TIMEOUT_MS,
            },
        }
    }
}

impl SiteConfig {
    /// Reads `PORTFOLIO_*` variables captured when the wasm bundle was built.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "PORTFOLIO_CHAT_ENDPOINT" => option_env!("PORTFOLIO_CHAT_ENDPOINT"),
            "PORTFOLIO_STATS_PROXY" => option_env!("PORTFOLIO_STATS_PROXY"),
            "PORTFOLIO_STATS_TARGET" => option_env!("PORTFOLIO_STATS_TARGET"),
            "PORTFOLIO_LEETCODE_USER" => option_env!("PORTFOLIO_LEETCODE_USER"),
            "PORTFOLIO_STATS_POPULATION" => option_env!("PORTFOLIO_STATS_POPULATION"),
            "PORTFOLIO_TIMEOUT_MS" => option_env!("PORTFOLIO_TIMEOUT_MS"),
            _ => None,
        })
    }

    /// Builds a config from an arbitrary key lookup, falling back to the
    /// defaults for missing or unparsable values. A proxy of `none` disables
    /// the forwarding prefix.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let mut config = Self::default();
        let text = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());

        if let Some(endpoint) = text("PORTFOLIO_CHAT_ENDPOINT") {
            config.chat.endpoint = endpoint.to_string();
        }
        if let Some(proxy) = text("PORTFOLIO_STATS_PROXY") {
            config.stats.proxy_prefix = if proxy.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(proxy.to_string())
            };
        }
        if let Some(target) = text("PORTFOLIO_STATS_TARGET") {
            config.stats.target_url = target.to_string();
        }
        if let Some(user) = text("PORTFOLIO_LEETCODE_USER") {
            config.stats.username = user.to_string();
        }
        if let Some(population) = text("PORTFOLIO_STATS_POPULATION")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|p| *p > 0)
        {
            config.stats.population = population;
        }
        if let Some(timeout) = text("PORTFOLIO_TIMEOUT_MS").and_then(|v| v.parse::<u32>().ok()) {
            config.chat.timeout_ms = timeout;
            config.stats.timeout_ms = timeout;
        }
        config
    }

    pub fn provide(self) -> Self {
        provide_context(self.clone());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_url_goes_through_the_relay() {
        let config = SiteConfig::default();
        assert_eq!(
            config.stats.request_url(),
            "https://api.allorigins.win/raw?url=https%3A%2F%2Fleetcode.com%2Fgraphql"
        );
    }

    #[test]
    fn lookup_overrides_defaults() {
        let config = SiteConfig::from_lookup(|key| match key {
            "PORTFOLIO_CHAT_ENDPOINT" => Some("/api/chat"),
            "PORTFOLIO_STATS_PROXY" => Some("none"),
            "PORTFOLIO_STATS_TARGET" => Some("/api/leetcode"),
            "PORTFOLIO_STATS_POPULATION" => Some("5000000"),
            "PORTFOLIO_TIMEOUT_MS" => Some("2500"),
            _ => None,
        });
        assert_eq!(config.chat.endpoint, "/api/chat");
        assert_eq!(config.stats.request_url(), "/api/leetcode");
        assert_eq!(config.stats.population, 5_000_000);
        assert_eq!(config.stats.username, DEFAULT_LEETCODE_USER);
        assert_eq!(config.chat.timeout_ms, 2_500);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = SiteConfig::from_lookup(|key| match key {
            "PORTFOLIO_STATS_POPULATION" => Some("0"),
            "PORTFOLIO_TIMEOUT_MS" => Some("soon"),
            "PORTFOLIO_LEETCODE_USER" => Some("   "),
            _ => None,
        });
        assert_eq!(config, SiteConfig::default());
    }
}
