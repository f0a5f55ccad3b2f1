mod fetch;
mod hacker_news;
mod product_hunt;
mod summary;

#[cfg(test)]
pub mod testing;

pub use fetch::*;
pub use hacker_news::*;
pub use product_hunt::*;
pub use summary::*;

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nexus::{NewsItem, NewsKind};
use url::Url;

use crate::EngineError;

/// A news item before it has been given its place (and id) in the
/// snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Headline {
    pub src: String,
    pub kind: NewsKind,
    pub title: String,
    pub desc: String,
    pub url: String,
    pub time: String,
}

impl Headline {
    pub fn into_news_item(self, id: usize) -> NewsItem {
        NewsItem {
            id: id.to_string(),
            src: self.src,
            kind: self.kind,
            title: self.title,
            desc: self.desc,
            url: self.url,
            time: self.time,
        }
    }
}

/// A source link: the text exactly as the source gave it, which is what
/// gets stored, and its parsed form for fetching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: Url,
}

impl Link {
    pub fn parse(text: &str) -> Option<Link> {
        let url = Url::parse(text).ok()?;
        Some(Link {
            text: text.to_owned(),
            url,
        })
    }
}

pub struct HarvestContext {
    pub fetcher: Fetcher,
    pub now: DateTime<Utc>,
    /// Titles already taken by an earlier source in this run.
    pub seen: HashSet<String>,
}

#[async_trait]
pub trait Harvest: Send + Sync {
    fn name(&self) -> &str;

    async fn harvest(&self, context: &HarvestContext) -> Result<Vec<Headline>, EngineError>;
}
