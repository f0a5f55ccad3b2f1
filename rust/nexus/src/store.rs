use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
};

use crate::{NewsItem, NewsKind, NexusError, PromptTemplate, RankEntry, Snapshot, SnapshotDigest};

static GLOBAL: OnceLock<ContentStore> = OnceLock::new();

/// Where a store's data comes from. This is the unloaded state: nothing
/// is read until [`ContentSource::load`] is called.
#[derive(Clone, Debug)]
pub enum ContentSource {
    Path(PathBuf),
    Text(String),
    Bundled,
}

impl ContentSource {
    /// Read and parse the source. A failure leaves the source untouched
    /// so the caller may try again.
    pub fn load(&self) -> Result<ContentStore, NexusError> {
        let snapshot = match self {
            ContentSource::Path(path) => Snapshot::read(path)?,
            ContentSource::Text(text) => Snapshot::parse(text)?,
            ContentSource::Bundled => Snapshot::bundled()?,
        };

        info!(
            source = ?self,
            news = snapshot.news.len(),
            categories = snapshot.ranks.len(),
            prompts = snapshot.prompts.len(),
            "Content loaded"
        );

        Ok(ContentStore::from(snapshot))
    }
}

impl From<PathBuf> for ContentSource {
    fn from(value: PathBuf) -> Self {
        ContentSource::Path(value)
    }
}

/// A loaded, immutable snapshot. Cloning shares the same data.
#[derive(Clone, Debug)]
pub struct ContentStore {
    snapshot: Arc<Snapshot>,
}

impl ContentStore {
    pub fn news(&self) -> &[NewsItem] {
        &self.snapshot.news
    }

    /// The leaderboard for `category`, empty when there is no such
    /// category.
    pub fn ranks(&self, category: &str) -> &[RankEntry] {
        self.snapshot.ranks.get(category).unwrap_or_default()
    }

    pub fn prompts(&self) -> &[PromptTemplate] {
        &self.snapshot.prompts
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.snapshot.ranks.categories()
    }

    pub fn news_of_kind<'a>(&'a self, kind: &'a NewsKind) -> impl Iterator<Item = &'a NewsItem> {
        self.snapshot
            .news
            .iter()
            .filter(move |item| &item.kind == kind)
    }

    pub fn prompts_tagged<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a PromptTemplate> {
        self.snapshot
            .prompts
            .iter()
            .filter(move |prompt| prompt.tag == tag)
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn digest(&self) -> Result<SnapshotDigest, NexusError> {
        self.snapshot.digest()
    }
}

impl From<Snapshot> for ContentStore {
    fn from(value: Snapshot) -> Self {
        ContentStore {
            snapshot: Arc::new(value),
        }
    }
}

/// Load `source` into the process-wide store. Once a store is installed,
/// later calls return it without reading `source`.
pub fn init(source: &ContentSource) -> Result<&'static ContentStore, NexusError> {
    if let Some(store) = GLOBAL.get() {
        debug!("Content already loaded; ignoring {:?}", source);
        return Ok(store);
    }

    let store = source.load()?;
    Ok(GLOBAL.get_or_init(|| store))
}

/// The process-wide store, if [`init`] has succeeded.
pub fn global() -> Option<&'static ContentStore> {
    GLOBAL.get()
}

#[cfg(test)]
pub mod tests {
    use std::thread;

    use anyhow::Result;

    use super::{global, init, ContentSource};
    use crate::{NewsKind, NexusError};

    #[test]
    fn it_reads_all_three_collections() -> Result<()> {
        let store = ContentSource::Bundled.load()?;

        assert_eq!(store.news().len(), 10);
        assert_eq!(store.news()[0].src, "OpenAI");
        assert_eq!(store.ranks("LLM").len(), 20);
        assert_eq!(store.ranks("LLM")[0].name, "ChatGPT (GPT-4o)");
        assert_eq!(store.prompts().len(), 12);
        assert_eq!(store.prompts()[0].title, "RTF 标准提问法");
        Ok(())
    }

    #[test]
    fn it_returns_nothing_for_an_unknown_category() -> Result<()> {
        let store = ContentSource::Bundled.load()?;
        assert!(store.ranks("NonexistentCategory").is_empty());
        Ok(())
    }

    #[test]
    fn it_returns_the_same_items_on_every_read() -> Result<()> {
        let store = ContentSource::Bundled.load()?;
        let first: Vec<_> = store.news().iter().map(|item| item.id.clone()).collect();
        let second: Vec<_> = store.news().iter().map(|item| item.id.clone()).collect();
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn it_filters_by_kind_and_tag() -> Result<()> {
        let store = ContentSource::Bundled.load()?;

        let videos: Vec<_> = store
            .news_of_kind(&NewsKind::Video)
            .map(|item| item.src.as_str())
            .collect();
        assert_eq!(videos, vec!["Runway", "Kuaishou"]);
        assert_eq!(store.prompts_tagged("Video Gen").count(), 2);
        assert_eq!(store.prompts_tagged("Nonexistent").count(), 0);
        Ok(())
    }

    #[test]
    fn it_loads_from_a_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("data.js");
        std::fs::write(&path, ContentSource::Bundled.load()?.snapshot().to_script()?)?;

        let store = ContentSource::from(path).load()?;
        assert_eq!(store.categories().count(), 4);
        Ok(())
    }

    #[test]
    fn it_can_retry_a_failed_load() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("data.js");
        std::fs::write(&path, r#"{"news": [], "ranks": {"LLM": [{}]}, "prompts": []}"#)?;

        let source = ContentSource::Path(path.clone());
        assert!(matches!(source.load(), Err(NexusError::MalformedData(_))));

        std::fs::write(&path, r#"{"news": [], "ranks": {}, "prompts": []}"#)?;
        assert!(source.load()?.news().is_empty());
        Ok(())
    }

    #[test]
    fn it_shares_one_store_across_threads() -> Result<()> {
        let store = ContentSource::Bundled.load()?;

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || store.ranks("Video").len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().ok(), Some(20));
        }
        Ok(())
    }

    #[test]
    fn it_installs_the_global_store_once() -> Result<()> {
        let installed = init(&ContentSource::Bundled)?;
        let again = init(&ContentSource::Text("not data".into()))?;

        assert!(std::ptr::eq(installed, again));
        assert!(global().is_some());
        assert_eq!(installed.prompts().len(), 12);
        Ok(())
    }
}
