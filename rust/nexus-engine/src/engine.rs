use std::{collections::HashSet, io::Write, path::Path};

use chrono::{DateTime, Utc};
use nexus::Snapshot;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tempfile::NamedTempFile;

use crate::{
    catalog::{prompt_library, FILLER_NEWS},
    clock::display_time,
    harvest::{Fetcher, HackerNews, Harvest, HarvestContext, Headline, ProductHunt},
    ranking::build_leaderboards,
    EngineConfig, EngineError,
};

/// How many times the filler catalog may be walked while topping up.
const FILLER_PASSES: usize = 5;

/// Builds one snapshot: harvested news topped up with filler, freshly
/// scored leaderboards and the prompt library.
pub struct Engine {
    config: EngineConfig,
    fetcher: Fetcher,
    harvesters: Vec<Box<dyn Harvest>>,
}

impl Engine {
    /// An engine with the Product Hunt and Hacker News harvesters, or none
    /// when the configuration is offline.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let fetcher = Fetcher::new(&config)?;

        let mut harvesters: Vec<Box<dyn Harvest>> = Vec::new();
        if !config.offline {
            harvesters.push(Box::new(ProductHunt::new(
                config.product_hunt_feed.clone(),
                config.per_source_limit,
            )));
            harvesters.push(Box::new(HackerNews::new(
                config.hacker_news_api.clone(),
                config.hacker_news_scan,
                config.per_source_limit,
                config.keywords.clone(),
            )));
        }

        Ok(Engine {
            config,
            fetcher,
            harvesters,
        })
    }

    pub fn with_harvester(mut self, harvester: Box<dyn Harvest>) -> Self {
        self.harvesters.push(harvester);
        self
    }

    /// Run every harvester in turn. A failing source is logged and
    /// skipped; titles are unique across sources.
    pub async fn harvest(&self, now: DateTime<Utc>) -> (Vec<Headline>, HashSet<String>) {
        let mut context = HarvestContext {
            fetcher: self.fetcher.clone(),
            now,
            seen: HashSet::new(),
        };
        let mut headlines = Vec::new();

        for harvester in &self.harvesters {
            info!("Harvesting {}", harvester.name());
            match harvester.harvest(&context).await {
                Ok(found) => {
                    let before = headlines.len();
                    for headline in found {
                        if context.seen.insert(headline.title.clone()) {
                            headlines.push(headline);
                        }
                    }
                    info!(
                        "{} contributed {} items",
                        harvester.name(),
                        headlines.len() - before
                    );
                }
                Err(error) => warn!("{} failed: {}", harvester.name(), error),
            }
        }

        (headlines, context.seen)
    }

    /// Build a snapshot. `rng` drives the leaderboard score noise.
    pub async fn build<R>(&self, now: DateTime<Utc>, rng: &mut R) -> Snapshot
    where
        R: Rng + ?Sized,
    {
        let ranks = build_leaderboards(rng);
        let (mut headlines, mut seen) = self.harvest(now).await;

        if headlines.len() < self.config.target_news {
            let added = top_up(
                &mut headlines,
                &mut seen,
                self.config.target_news,
                &display_time(&now),
            );
            info!("Added {} filler items", added);
        }

        Snapshot {
            news: headlines
                .into_iter()
                .enumerate()
                .map(|(id, headline)| headline.into_news_item(id))
                .collect(),
            ranks,
            prompts: prompt_library(),
        }
    }

    /// Build a snapshot and write it to the configured output.
    pub async fn refresh(&self) -> Result<Snapshot, EngineError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let now = Utc::now();
        let snapshot = self.build(now, &mut rng).await;
        write_snapshot(&snapshot, &self.config.out)?;

        info!(
            "[{}] Snapshot written to {} (news: {}, prompts: {})",
            display_time(&now),
            self.config.out.display(),
            snapshot.news.len(),
            snapshot.prompts.len()
        );

        Ok(snapshot)
    }
}

/// Append filler items with unseen titles until `target` is reached or
/// the catalog runs out. Returns how many were added.
pub fn top_up(
    headlines: &mut Vec<Headline>,
    seen: &mut HashSet<String>,
    target: usize,
    time: &str,
) -> usize {
    let wanted = target.saturating_sub(headlines.len());
    let before = headlines.len();

    let filler = FILLER_NEWS
        .iter()
        .cycle()
        .take(FILLER_NEWS.len() * FILLER_PASSES)
        .filter(|news| seen.insert(news.title.to_owned()))
        .take(wanted)
        .map(|news| Headline {
            src: news.src.to_owned(),
            kind: news.kind(),
            title: news.title.to_owned(),
            desc: news.desc.to_owned(),
            url: news.url.to_owned(),
            time: time.to_owned(),
        });
    headlines.extend(filler);

    headlines.len() - before
}

/// Write `snapshot` in script form. The file is replaced in one step so
/// readers never see a partial snapshot.
pub fn write_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), EngineError> {
    let script = snapshot.to_script()?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(script.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path)?;

    debug!("Wrote {} bytes to {}", script.len(), path.display());
    Ok(())
}

#[cfg(test)]
pub mod tests {
    use std::collections::HashSet;

    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use nexus::{ContentSource, NewsKind};
    use rand::{rngs::StdRng, SeedableRng};

    use super::{top_up, write_snapshot, Engine};
    use crate::{
        catalog::FILLER_NEWS,
        harvest::{Harvest, HarvestContext, Headline},
        EngineConfig, EngineError,
    };

    struct Fixed(Vec<Headline>);

    #[async_trait]
    impl Harvest for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn harvest(&self, context: &HarvestContext) -> Result<Vec<Headline>, EngineError> {
            Ok(self
                .0
                .iter()
                .filter(|headline| !context.seen.contains(&headline.title))
                .cloned()
                .collect())
        }
    }

    struct Broken;

    #[async_trait]
    impl Harvest for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        async fn harvest(&self, _context: &HarvestContext) -> Result<Vec<Headline>, EngineError> {
            Err(EngineError::Http("connection refused".into()))
        }
    }

    fn headline(title: &str) -> Headline {
        Headline {
            src: "Hacker News".into(),
            kind: NewsKind::Dev,
            title: title.into(),
            desc: format!("{title} desc"),
            url: "https://news.ycombinator.com/item?id=1".into(),
            time: "01-23 09:00".into(),
        }
    }

    fn offline() -> EngineConfig {
        EngineConfig {
            offline: true,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn it_tops_up_without_repeating_titles() {
        let mut headlines = vec![headline(FILLER_NEWS[0].title)];
        let mut seen: HashSet<String> = headlines.iter().map(|h| h.title.clone()).collect();

        let added = top_up(&mut headlines, &mut seen, 40, "01-23 10:07");

        assert_eq!(added, FILLER_NEWS.len() - 1);
        assert_eq!(headlines.len(), FILLER_NEWS.len());
        let titles: HashSet<&str> = headlines.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles.len(), headlines.len());
    }

    #[test]
    fn it_stops_topping_up_at_the_target() {
        let mut headlines = vec![headline("a"), headline("b")];
        let mut seen = HashSet::new();

        assert_eq!(top_up(&mut headlines, &mut seen, 5, "01-23 10:07"), 3);
        assert_eq!(headlines.len(), 5);
        assert_eq!(headlines[2].title, FILLER_NEWS[0].title);
        assert_eq!(top_up(&mut headlines, &mut seen, 5, "01-23 10:07"), 0);
    }

    #[tokio::test]
    async fn it_builds_an_offline_snapshot() -> Result<()> {
        let engine = Engine::new(offline())?;
        let now = Utc.with_ymd_and_hms(2025, 1, 23, 2, 7, 0).unwrap();
        let snapshot = engine.build(now, &mut StdRng::seed_from_u64(1)).await;

        assert_eq!(snapshot.news.len(), FILLER_NEWS.len());
        assert_eq!(snapshot.news[0].id, "0");
        assert_eq!(snapshot.news[9].id, "9");
        assert!(snapshot.news.iter().all(|item| item.time == "01-23 10:07"));
        assert_eq!(snapshot.ranks.len(), 4);
        assert_eq!(snapshot.prompts.len(), 12);
        assert!(snapshot.audit().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn it_puts_harvested_news_first_and_skips_failures() -> Result<()> {
        let engine = Engine::new(offline())?
            .with_harvester(Box::new(Broken))
            .with_harvester(Box::new(Fixed(vec![headline("Show HN: one"), headline("Show HN: one")])))
            .with_harvester(Box::new(Fixed(vec![
                headline("Show HN: one"),
                headline("Launch: two"),
            ])));
        let now = Utc.with_ymd_and_hms(2025, 1, 23, 2, 7, 0).unwrap();
        let snapshot = engine.build(now, &mut StdRng::seed_from_u64(1)).await;

        let titles: Vec<&str> = snapshot.news.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(&titles[..2], &["Show HN: one", "Launch: two"]);
        assert_eq!(snapshot.news.len(), 2 + FILLER_NEWS.len());
        assert_eq!(snapshot.news[1].id, "1");
        assert_eq!(snapshot.news[1].time, "01-23 09:00");
        Ok(())
    }

    #[tokio::test]
    async fn it_writes_a_loadable_snapshot() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("data.js");
        let engine = Engine::new(EngineConfig {
            out: out.clone(),
            seed: Some(9),
            ..offline()
        })?;

        let snapshot = engine.refresh().await?;
        let store = ContentSource::Path(out.clone()).load()?;

        assert_eq!(store.snapshot(), &snapshot);
        assert!(std::fs::read_to_string(&out)?.starts_with("window.AI_DATA = {"));
        Ok(())
    }

    #[test]
    fn it_replaces_an_existing_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("data.js");
        std::fs::write(&out, "stale")?;

        let snapshot = nexus::Snapshot::bundled()?;
        write_snapshot(&snapshot, &out)?;

        assert_eq!(nexus::Snapshot::read(&out)?, snapshot);
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }
}
