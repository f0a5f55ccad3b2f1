use async_trait::async_trait;
use nexus::NewsKind;
use serde::Deserialize;
use tokio::task::JoinSet;
use url::Url;

use super::{summarize, Fetcher, Harvest, HarvestContext, Headline, Link};
use crate::{clock::display_unix_time, EngineError};

const SOURCE: &str = "Hacker News";
const DISCUSSION_URL: &str = "https://news.ycombinator.com/item";
/// Stories fetched concurrently per round.
const BATCH: usize = 10;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Story {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub url: Option<String>,
    #[serde(default)]
    pub time: i64,
}

impl Story {
    /// The linked article, or the discussion thread for text posts.
    pub fn link(&self) -> Result<Link, EngineError> {
        if let Some(link) = self.url.as_deref().and_then(Link::parse) {
            return Ok(link);
        }

        let text = format!("{DISCUSSION_URL}?id={}", self.id);
        let url = Url::parse(&text)?;
        Ok(Link { text, url })
    }
}

pub fn matches_keywords(title: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| title.contains(keyword.as_str()))
}

/// Top stories whose titles look like product or tooling news.
pub struct HackerNews {
    api: Url,
    scan: usize,
    limit: usize,
    keywords: Vec<String>,
}

impl HackerNews {
    pub fn new(api: Url, scan: usize, limit: usize, keywords: Vec<String>) -> Self {
        HackerNews {
            api,
            scan,
            limit,
            keywords,
        }
    }

    async fn stories(&self, fetcher: &Fetcher, ids: &[u64]) -> Result<Vec<Story>, EngineError> {
        let mut requests = JoinSet::new();

        for (position, id) in ids.iter().enumerate() {
            let url = self.api.join(&format!("item/{id}.json"))?;
            let fetcher = fetcher.clone();
            requests.spawn(async move { (position, fetcher.json::<Option<Story>>(&url).await) });
        }

        let mut stories: Vec<(usize, Story)> = Vec::with_capacity(ids.len());
        while let Some(joined) = requests.join_next().await {
            match joined? {
                (position, Ok(Some(story))) => stories.push((position, story)),
                (_, Ok(None)) => {}
                (position, Err(error)) => {
                    debug!("Skipping story {}: {}", ids[position], error)
                }
            }
        }

        stories.sort_by_key(|(position, _)| *position);
        Ok(stories.into_iter().map(|(_, story)| story).collect())
    }
}

#[async_trait]
impl Harvest for HackerNews {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn harvest(&self, context: &HarvestContext) -> Result<Vec<Headline>, EngineError> {
        let top = self.api.join("topstories.json")?;
        let mut ids: Vec<u64> = context.fetcher.json(&top).await?;
        ids.truncate(self.scan);

        let mut headlines: Vec<Headline> = Vec::new();
        'scan: for batch in ids.chunks(BATCH) {
            for story in self.stories(&context.fetcher, batch).await? {
                if headlines.len() >= self.limit {
                    break 'scan;
                }

                let title = story.title.trim();
                if title.is_empty()
                    || context.seen.contains(title)
                    || headlines.iter().any(|headline| headline.title == title)
                    || !matches_keywords(title, &self.keywords)
                {
                    continue;
                }

                let link = story.link()?;
                let desc = summarize(&context.fetcher, &link.url, title).await;

                headlines.push(Headline {
                    src: SOURCE.into(),
                    kind: NewsKind::Dev,
                    title: title.to_owned(),
                    desc,
                    url: link.text,
                    time: display_unix_time(story.time, context.now),
                });
            }
        }

        Ok(headlines)
    }
}
