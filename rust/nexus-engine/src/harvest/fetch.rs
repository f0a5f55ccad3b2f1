use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE},
    Client,
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{EngineConfig, EngineError};

/// Shared HTTP client for feeds, APIs and article pages.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: Client,
    page_timeout: Duration,
}

impl Fetcher {
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Fetcher {
            client,
            page_timeout: config.summary_timeout,
        })
    }

    pub async fn text(&self, url: &Url) -> Result<String, EngineError> {
        trace!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        Ok(response.error_for_status()?.text().await?)
    }

    pub async fn json<T>(&self, url: &Url) -> Result<T, EngineError>
    where
        T: DeserializeOwned,
    {
        trace!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;
        Ok(response.error_for_status()?.json::<T>().await?)
    }

    /// An article page, with the shorter page timeout. Anything but a 200
    /// counts as no page.
    pub async fn page(&self, url: &Url) -> Result<Option<String>, EngineError> {
        let response = self
            .client
            .get(url.clone())
            .timeout(self.page_timeout)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            debug!("Skipping {} ({})", url, response.status());
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }
}
