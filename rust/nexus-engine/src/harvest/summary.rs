use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::Fetcher;

const META_MIN_CHARS: usize = 20;
const PARAGRAPH_MIN_CHARS: usize = 50;
const PARAGRAPH_MAX_CHARS: usize = 300;

static OG_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<meta\s+property=["']og:description["']\s+content=(?:"([^"]*)"|'([^']*)')"#,
    )
    .unwrap()
});
static META_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\s+name=["']description["']\s+content=(?:"([^"]*)"|'([^']*)')"#)
        .unwrap()
});
static NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<!--.*?-->").unwrap()
});
static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);").unwrap());

/// Which part of the page a summary came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummarySource {
    OpenGraph,
    MetaDescription,
    Paragraph,
}

/// Best available one-paragraph summary of an HTML page: the Open Graph
/// description, then the meta description, then the first paragraph that
/// reads like body text.
pub fn extract_summary(html: &str) -> Option<(SummarySource, String)> {
    if let Some(text) = meta_content(&OG_DESCRIPTION, html) {
        return Some((SummarySource::OpenGraph, text));
    }
    if let Some(text) = meta_content(&META_DESCRIPTION, html) {
        return Some((SummarySource::MetaDescription, text));
    }
    first_paragraph(html).map(|text| (SummarySource::Paragraph, text))
}

fn meta_content(pattern: &Regex, html: &str) -> Option<String> {
    let captures = pattern.captures(html)?;
    let raw = captures.get(1).or_else(|| captures.get(2))?.as_str();
    let text = clean_text(raw);
    (text.chars().count() > META_MIN_CHARS).then_some(text)
}

fn first_paragraph(html: &str) -> Option<String> {
    let html = NOISE.replace_all(html, "");

    PARAGRAPH
        .captures_iter(&html)
        .filter_map(|captures| captures.get(1))
        .map(|inner| clean_text(&TAG.replace_all(inner.as_str(), "")))
        .find(|text| text.chars().count() > PARAGRAPH_MIN_CHARS)
        .map(|text| {
            let mut excerpt: String = text.chars().take(PARAGRAPH_MAX_CHARS).collect();
            excerpt.push_str("...");
            excerpt
        })
}

/// Decode entities and collapse runs of whitespace. Entities that are
/// not recognized are left as written.
pub fn clean_text(raw: &str) -> String {
    let decoded = ENTITY.replace_all(raw, |captures: &regex::Captures| {
        let entity = &captures[0];
        match quick_xml::escape::unescape_with(entity, resolve_html_entity) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => entity.to_owned(),
        }
    });
    WHITESPACE.replace_all(decoded.trim(), " ").into_owned()
}

/// The XML entities plus the HTML named entities common in page
/// descriptions.
fn resolve_html_entity(name: &str) -> Option<&'static str> {
    let text = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "ensp" | "emsp" | "thinsp" => " ",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "sbquo" => "\u{201A}",
        "ldquo" => "\u{201C}",
        "rdquo" => "\u{201D}",
        "bdquo" => "\u{201E}",
        "laquo" => "\u{00AB}",
        "raquo" => "\u{00BB}",
        "hellip" => "\u{2026}",
        "middot" => "\u{00B7}",
        "bull" => "\u{2022}",
        "copy" => "\u{00A9}",
        "reg" => "\u{00AE}",
        "trade" => "\u{2122}",
        "deg" => "\u{00B0}",
        "times" => "\u{00D7}",
        "euro" => "\u{20AC}",
        "pound" => "\u{00A3}",
        "yen" => "\u{00A5}",
        "cent" => "\u{00A2}",
        "sect" => "\u{00A7}",
        "para" => "\u{00B6}",
        "larr" => "\u{2190}",
        "rarr" => "\u{2192}",
        _ => return None,
    };
    Some(text)
}

/// Strip markup from a feed summary.
pub fn plain_text(html: &str) -> String {
    clean_text(&TAG.replace_all(html, " "))
}

/// Fetch `url` and summarize it, falling back to `title` when the page
/// is unreachable or has nothing usable.
pub async fn summarize(fetcher: &Fetcher, url: &Url, title: &str) -> String {
    match fetcher.page(url).await {
        Ok(Some(html)) => match extract_summary(&html) {
            Some((source, text)) => {
                debug!(?source, "Summarized {}", url);
                text
            }
            None => {
                debug!("No summary found in {}", url);
                title.to_owned()
            }
        },
        Ok(None) => title.to_owned(),
        Err(error) => {
            debug!("Could not summarize {}: {}", url, error);
            title.to_owned()
        }
    }
}
