use std::{path::PathBuf, time::Duration};

use url::Url;

use crate::EngineError;

pub const PRODUCT_HUNT_FEED: &str = "https://www.producthunt.com/feed/category/artificial-intelligence";
pub const HACKER_NEWS_API: &str = "https://hacker-news.firebaseio.com/v0/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Hacker News stories are kept when their title mentions one of these.
pub const HACKER_NEWS_KEYWORDS: &[&str] =
    &["Show HN", "Launch", "Tool", "App", "Open Source", "GPT", "LLM"];

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub out: PathBuf,
    pub offline: bool,
    /// News count the filler tops the harvest up to.
    pub target_news: usize,
    /// Most items taken from any one source.
    pub per_source_limit: usize,
    /// How many Hacker News top stories are looked at.
    pub hacker_news_scan: usize,
    pub request_timeout: Duration,
    pub summary_timeout: Duration,
    pub product_hunt_feed: Url,
    pub hacker_news_api: Url,
    pub keywords: Vec<String>,
    pub user_agent: String,
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.request_timeout.is_zero() || self.summary_timeout.is_zero() {
            return Err(EngineError::InvalidConfiguration(
                "timeouts must be greater than zero".into(),
            ));
        }
        if !self.hacker_news_api.path().ends_with('/') {
            return Err(EngineError::InvalidConfiguration(format!(
                "Hacker News API base `{}` must end with `/`",
                self.hacker_news_api
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            out: PathBuf::from("data.js"),
            offline: false,
            target_news: 40,
            per_source_limit: 15,
            hacker_news_scan: 60,
            request_timeout: Duration::from_secs(10),
            summary_timeout: Duration::from_secs(6),
            product_hunt_feed: Url::parse(PRODUCT_HUNT_FEED).expect("feed URL is valid"),
            hacker_news_api: Url::parse(HACKER_NEWS_API).expect("API URL is valid"),
            keywords: HACKER_NEWS_KEYWORDS
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
            user_agent: USER_AGENT.into(),
            seed: None,
        }
    }
}
