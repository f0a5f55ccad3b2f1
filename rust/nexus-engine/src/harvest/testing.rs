use std::collections::HashSet;

use anyhow::Result;
use axum::Router;
use chrono::{TimeZone, Utc};
use tokio::net::TcpListener;
use url::Url;

use super::{Fetcher, HarvestContext};
use crate::EngineConfig;

/// A loopback HTTP server standing in for feeds, APIs and article pages.
/// Bind first so canned bodies can link back to it, then serve.
pub struct Upstream {
    listener: TcpListener,
    base: Url,
}

impl Upstream {
    pub async fn bind() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base = Url::parse(&format!("http://{}/", listener.local_addr()?))?;
        Ok(Upstream { listener, base })
    }

    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    pub fn serve(self, router: Router) {
        let Upstream { listener, .. } = self;
        tokio::spawn(async move { axum::serve(listener, router.into_make_service()).await });
    }
}

/// A context at 2025-01-23 02:07 UTC with `seen` already taken.
pub fn context(seen: &[&str]) -> Result<HarvestContext> {
    Ok(HarvestContext {
        fetcher: Fetcher::new(&EngineConfig::default())?,
        now: Utc.with_ymd_and_hms(2025, 1, 23, 2, 7, 0).unwrap(),
        seen: seen.iter().map(|title| title.to_string()).collect::<HashSet<_>>(),
    })
}
