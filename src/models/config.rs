//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and endpoint settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let scraper = &self.scraper;
        if scraper.auth_token.trim().is_empty() {
            return Err(AppError::validation("scraper.auth_token is empty"));
        }
        if scraper.user_agents.is_empty() {
            return Err(AppError::validation("scraper.user_agents is empty"));
        }
        if scraper.user_agents.iter().any(|ua| ua.trim().is_empty()) {
            return Err(AppError::validation(
                "scraper.user_agents contains an empty entry",
            ));
        }
        if scraper.timeout_secs == 0 {
            return Err(AppError::validation("scraper.timeout_secs must be > 0"));
        }
        if scraper.max_concurrent == 0 {
            return Err(AppError::validation("scraper.max_concurrent must be > 0"));
        }
        for (name, value) in [
            ("scraper.topic_base_url", &scraper.topic_base_url),
            ("scraper.comment_api", &scraper.comment_api),
            ("scraper.search_api", &scraper.search_api),
        ] {
            Url::parse(value)
                .map_err(|e| AppError::validation(format!("{name} is not a valid URL: {e}")))?;
        }
        Ok(())
    }
}

/// HTTP client and endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Value sent in the `ptauthorize` header
    #[serde(default = "defaults::auth_token")]
    pub auth_token: String,

    /// User-Agent strings rotated across requests
    #[serde(default = "defaults::user_agents")]
    pub user_agents: Vec<String>,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum comment pages fetched at once
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,

    /// Base URL of topic pages; the topic id is appended
    #[serde(default = "defaults::topic_base_url")]
    pub topic_base_url: String,

    /// Endpoint rendering a page of comments
    #[serde(default = "defaults::comment_api")]
    pub comment_api: String,

    /// Endpoint of the search service
    #[serde(default = "defaults::search_api")]
    pub search_api: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            auth_token: defaults::auth_token(),
            user_agents: defaults::user_agents(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
            topic_base_url: defaults::topic_base_url(),
            comment_api: defaults::comment_api(),
            search_api: defaults::search_api(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: "debug", "info", "warn" or "error"
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn auth_token() -> String {
        "Basic dGVzdGVyOnRlc3Rlcg==".into()
    }

    pub fn user_agents() -> Vec<String> {
        [
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_5) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.1.1 Safari/605.1.15",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:77.0) Gecko/20100101 Firefox/77.0",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_5) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.97 Safari/537.36",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:77.0) Gecko/20100101 Firefox/77.0",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.97 Safari/537.36",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    pub fn timeout() -> u64 {
        4
    }
    pub fn max_concurrent() -> usize {
        4
    }

    // Endpoints
    pub fn topic_base_url() -> String {
        "https://pantip.com/topic/".into()
    }
    pub fn comment_api() -> String {
        "https://pantip.com/forum/topic/render_comments".into()
    }
    pub fn search_api() -> String {
        "https://pantip.com/api/search-service/search/getresult".into()
    }

    pub fn log_level() -> String {
        "info".into()
    }
}
