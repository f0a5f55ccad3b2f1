use std::{fmt::Display, num::NonZeroU32};

use serde::{Deserialize, Serialize};

/// Category code of a news item. The set of codes is open: anything
/// other than the four known codes is carried through untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NewsKind {
    App,
    Dev,
    Video,
    Image,
    Other(String),
}

impl NewsKind {
    pub fn as_str(&self) -> &str {
        match self {
            NewsKind::App => "APP",
            NewsKind::Dev => "DEV",
            NewsKind::Video => "VIDEO",
            NewsKind::Image => "IMAGE",
            NewsKind::Other(code) => code.as_str(),
        }
    }
}

impl From<String> for NewsKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "APP" => NewsKind::App,
            "DEV" => NewsKind::Dev,
            "VIDEO" => NewsKind::Video,
            "IMAGE" => NewsKind::Image,
            _ => NewsKind::Other(value),
        }
    }
}

impl From<&str> for NewsKind {
    fn from(value: &str) -> Self {
        NewsKind::from(value.to_owned())
    }
}

impl From<NewsKind> for String {
    fn from(value: NewsKind) -> Self {
        match value {
            NewsKind::Other(code) => code,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for NewsKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported AI industry event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub src: String,
    #[serde(rename = "type")]
    pub kind: NewsKind,
    pub title: String,
    pub desc: String,
    pub url: String,
    /// Display timestamp, `MM-DD HH:MM`.
    pub time: String,
}

/// One placement on a category leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub rank: NonZeroU32,
    pub name: String,
    pub desc: String,
    pub url: String,
    pub score: String,
}

impl RankEntry {
    /// The score as a number, if the stored text is one.
    pub fn score_value(&self) -> Option<f64> {
        self.score
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|score| score.is_finite())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub tag: String,
    pub title: String,
    pub content: String,
    pub desc: String,
}

impl PromptTemplate {
    /// Labels written as `[Label]` inside the template body, in order of
    /// appearance. These are fill-in hints for a human reader only.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut labels = Vec::new();
        let mut rest = self.content.as_str();

        while let Some(open) = rest.find('[') {
            let after = &rest[open + 1..];
            let Some(close) = after.find(']') else {
                break;
            };
            let label = after[..close].trim();
            if !label.is_empty() && !label.contains('[') {
                labels.push(label);
            }
            rest = &after[close + 1..];
        }

        labels
    }
}

#[cfg(test)]
pub mod tests {
    use anyhow::Result;

    use super::{NewsItem, NewsKind, PromptTemplate, RankEntry};

    #[test]
    fn it_keeps_unknown_news_kinds_verbatim() -> Result<()> {
        let kind: NewsKind = serde_json::from_str("\"AUDIO\"")?;
        assert_eq!(kind, NewsKind::Other("AUDIO".into()));
        assert_eq!(serde_json::to_string(&kind)?, "\"AUDIO\"");

        let kind: NewsKind = serde_json::from_str("\"VIDEO\"")?;
        assert_eq!(kind, NewsKind::Video);
        Ok(())
    }

    #[test]
    fn it_reads_the_type_field_as_kind() -> Result<()> {
        let item: NewsItem = serde_json::from_str(
            r#"{"id":"0","src":"OpenAI","type":"APP","title":"X","desc":"Y","url":"https://openai.com","time":"01-23 10:07"}"#,
        )?;
        assert_eq!(item.kind, NewsKind::App);
        assert!(serde_json::to_string(&item)?.contains("\"type\":\"APP\""));
        Ok(())
    }

    #[test]
    fn it_rejects_a_zero_rank() {
        let entry = serde_json::from_str::<RankEntry>(
            r#"{"rank":0,"name":"n","desc":"d","url":"u","score":"99.0"}"#,
        );
        assert!(entry.is_err());
    }

    #[test]
    fn it_parses_numeric_scores_only() -> Result<()> {
        let mut entry: RankEntry = serde_json::from_str(
            r#"{"rank":1,"name":"n","desc":"d","url":"u","score":" 98.5 "}"#,
        )?;
        assert_eq!(entry.score_value(), Some(98.5));

        entry.score = "n/a".into();
        assert_eq!(entry.score_value(), None);
        Ok(())
    }

    #[test]
    fn it_lists_bracketed_placeholders() {
        let prompt = PromptTemplate {
            tag: "Coding".into(),
            title: "Debug".into(),
            content: "You are a [Language] expert.\n[Paste code] and [ ] [unclosed".into(),
            desc: String::new(),
        };
        assert_eq!(prompt.placeholders(), vec!["Language", "Paste code"]);
    }
}
