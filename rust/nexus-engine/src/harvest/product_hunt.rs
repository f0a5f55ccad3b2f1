use async_trait::async_trait;
use nexus::NewsKind;
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use url::Url;

use super::{plain_text, summarize, Harvest, HarvestContext, Headline, Link};
use crate::{clock::display_feed_time, EngineError};

const SOURCE: &str = "Product Hunt";
/// Feed summaries shorter than this are replaced by a page summary.
const SHORT_SUMMARY_CHARS: usize = 30;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtomEntry {
    pub title: String,
    pub summary: String,
    pub link: Option<String>,
    pub published: Option<String>,
    pub updated: Option<String>,
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Summary,
    Published,
    Updated,
}

/// Entries of an Atom document, in document order. Namespace prefixes are
/// ignored.
pub fn parse_atom(xml: &str) -> Result<Vec<AtomEntry>, EngineError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut entries = Vec::new();
    let mut entry: Option<AtomEntry> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.local_name().as_ref() {
                b"entry" => entry = Some(AtomEntry::default()),
                b"title" => field = Some(Field::Title),
                b"summary" | b"content" => field = Some(Field::Summary),
                b"published" => field = Some(Field::Published),
                b"updated" => field = Some(Field::Updated),
                b"link" => take_link(&element, entry.as_mut())?,
                _ => {}
            },
            Event::Empty(element) if element.local_name().as_ref() == b"link" => {
                take_link(&element, entry.as_mut())?
            }
            Event::Text(text) => {
                if let (Some(entry), Some(field)) = (entry.as_mut(), field) {
                    append(entry, field, &text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let (Some(entry), Some(field)) = (entry.as_mut(), field) {
                    append(entry, field, &String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(element) => match element.local_name().as_ref() {
                b"entry" => {
                    entries.extend(entry.take());
                    field = None;
                }
                b"title" | b"summary" | b"content" | b"published" | b"updated" => field = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

fn append(entry: &mut AtomEntry, field: Field, text: &str) {
    let target = match field {
        Field::Title => &mut entry.title,
        Field::Summary => &mut entry.summary,
        Field::Published => entry.published.get_or_insert_with(String::new),
        Field::Updated => entry.updated.get_or_insert_with(String::new),
    };
    target.push_str(text);
}

/// Keep the first `alternate` (or untyped) link of an entry.
fn take_link(element: &BytesStart, entry: Option<&mut AtomEntry>) -> Result<(), EngineError> {
    let Some(entry) = entry else {
        return Ok(());
    };
    if entry.link.is_some() {
        return Ok(());
    }

    let mut href = None;
    let mut alternate = true;
    for attribute in element.attributes() {
        let attribute = attribute?;
        match attribute.key.local_name().as_ref() {
            b"href" => href = Some(attribute.unescape_value()?.into_owned()),
            b"rel" => alternate = attribute.unescape_value()?.as_ref() == "alternate",
            _ => {}
        }
    }

    if alternate {
        entry.link = href;
    }
    Ok(())
}

/// Launches from the Product Hunt AI category feed.
pub struct ProductHunt {
    feed: Url,
    limit: usize,
}

impl ProductHunt {
    pub fn new(feed: Url, limit: usize) -> Self {
        ProductHunt { feed, limit }
    }
}

#[async_trait]
impl Harvest for ProductHunt {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn harvest(&self, context: &HarvestContext) -> Result<Vec<Headline>, EngineError> {
        let xml = context.fetcher.text(&self.feed).await?;
        let entries = parse_atom(&xml)?;
        debug!("{} entries in the Product Hunt feed", entries.len());

        let mut headlines: Vec<Headline> = Vec::new();
        for entry in entries.into_iter().take(self.limit) {
            let title = entry.title.trim().to_owned();
            if title.is_empty()
                || context.seen.contains(&title)
                || headlines.iter().any(|headline| headline.title == title)
            {
                continue;
            }

            let Some(link) = entry.link.as_deref().and_then(Link::parse) else {
                debug!("Skipping `{}` without a usable link", title);
                continue;
            };

            let summary = plain_text(&entry.summary);
            let desc = if summary.chars().count() < SHORT_SUMMARY_CHARS {
                summarize(&context.fetcher, &link.url, &title).await
            } else {
                summary
            };
            let published = entry.published.or(entry.updated).unwrap_or_default();

            headlines.push(Headline {
                src: SOURCE.into(),
                kind: NewsKind::App,
                title,
                desc,
                url: link.text,
                time: display_feed_time(&published, context.now),
            });
        }

        Ok(headlines)
    }
}

#[cfg(test)]
pub mod tests {
    use anyhow::Result;
    use axum::{response::Html, routing::get, Router};

    use super::{parse_atom, AtomEntry, ProductHunt};
    use crate::harvest::{
        testing::{context, Upstream},
        Harvest,
    };

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xml:lang="en-US" xmlns="http://www.w3.org/2005/Atom">
  <id>tag:www.producthunt.com,2005:/feed</id>
  <title>Product Hunt - Artificial Intelligence</title>
  <link rel="self" href="https://www.producthunt.com/feed"/>
  <entry>
    <id>tag:www.producthunt.com,2005:Post/1</id>
    <published>2025-01-22T18:07:00-08:00</published>
    <updated>2025-01-23T01:00:00-08:00</updated>
    <link rel="alternate" type="text/html" href="https://www.producthunt.com/posts/notebook?utm=feed&amp;ref=ai"/>
    <title>Notebook &amp; Friends</title>
    <content type="html">&lt;p&gt;Turn any PDF into a podcast&lt;/p&gt;</content>
  </entry>
  <entry>
    <title><![CDATA[Composer]]></title>
    <link rel="related" href="https://example.com/related"/>
    <link href="https://www.producthunt.com/posts/composer"/>
    <updated>2025-01-23T02:07:00Z</updated>
  </entry>
</feed>"#;

    #[test]
    fn it_reads_atom_entries() -> Result<()> {
        let entries = parse_atom(FEED)?;

        assert_eq!(
            entries,
            vec![
                AtomEntry {
                    title: "Notebook & Friends".into(),
                    summary: "<p>Turn any PDF into a podcast</p>".into(),
                    link: Some("https://www.producthunt.com/posts/notebook?utm=feed&ref=ai".into()),
                    published: Some("2025-01-22T18:07:00-08:00".into()),
                    updated: Some("2025-01-23T01:00:00-08:00".into()),
                },
                AtomEntry {
                    title: "Composer".into(),
                    summary: String::new(),
                    link: Some("https://www.producthunt.com/posts/composer".into()),
                    published: None,
                    updated: Some("2025-01-23T02:07:00Z".into()),
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn it_rejects_broken_xml() {
        assert!(parse_atom("<feed><entry><title>x</entry></feed>").is_err());
    }

    fn entry(title: &str, summary: &str, link: &str) -> String {
        format!(
            r#"<entry>
    <title>{title}</title>
    <summary type="html">{summary}</summary>
    <link rel="alternate" type="text/html" href="{link}"/>
    <published>2025-01-22T18:07:00-08:00</published>
  </entry>"#
        )
    }

    #[tokio::test]
    async fn it_harvests_the_feed() -> Result<()> {
        let upstream = Upstream::bind().await?;
        let feed = upstream.url("feed")?;
        let short = upstream.url("posts/short")?;
        let gone = upstream.url("posts/gone")?;

        let entries = [
            entry("Already Here", "&lt;p&gt;Tiny&lt;/p&gt;", short.as_str()),
            entry("Short Pitch", "&lt;p&gt;Tiny&lt;/p&gt;", short.as_str()),
            entry("Gone Page", "Tiny", gone.as_str()),
            entry(
                "Long Pitch",
                "&lt;p&gt;An assistant that drafts, edits and ships your release notes&lt;/p&gt;",
                "https://Example.COM",
            ),
            entry("Past The Limit", "Tiny", short.as_str()),
        ];
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  {}
</feed>"#,
            entries.join("\n  ")
        );

        upstream.serve(
            Router::new()
                .route("/feed", get(move || async move { xml }))
                .route(
                    "/posts/short",
                    get(|| async {
                        Html(r#"<meta property="og:description" content="Turns meeting notes into tidy weekly digests">"#)
                    }),
                ),
        );

        let headlines = ProductHunt::new(feed, 4)
            .harvest(&context(&["Already Here"])?)
            .await?;

        let titles: Vec<&str> = headlines.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["Short Pitch", "Gone Page", "Long Pitch"]);

        assert_eq!(headlines[0].desc, "Turns meeting notes into tidy weekly digests");
        assert_eq!(headlines[0].url, short.as_str());
        assert_eq!(headlines[1].desc, "Gone Page");
        assert_eq!(
            headlines[2].desc,
            "An assistant that drafts, edits and ships your release notes"
        );
        assert_eq!(headlines[2].url, "https://Example.COM");
        assert!(headlines.iter().all(|h| h.src == "Product Hunt"));
        assert!(headlines.iter().all(|h| h.time == "01-23 10:07"));
        Ok(())
    }
}
