use std::{fmt::Display, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Leaderboards, NewsItem, NexusError, PromptTemplate};

/// Global the data file assigns the snapshot to when written as a script.
pub const SCRIPT_GLOBAL: &str = "window.AI_DATA";

const BUNDLED: &str = include_str!("../fixtures/data.js");

/// The three collections that make up one capture of the feed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub news: Vec<NewsItem>,
    pub ranks: Leaderboards,
    pub prompts: Vec<PromptTemplate>,
}

impl Snapshot {
    /// Parse a data file, either a bare JSON document or the script form
    /// `window.AI_DATA = {...};`. Any malformed record fails the whole
    /// parse.
    pub fn parse(text: &str) -> Result<Self, NexusError> {
        let body = strip_assignment(text)?;
        let snapshot: Snapshot = serde_json::from_str(body)?;

        debug!(
            news = snapshot.news.len(),
            categories = snapshot.ranks.len(),
            prompts = snapshot.prompts.len(),
            "Parsed snapshot"
        );

        Ok(snapshot)
    }

    pub fn read(path: &Path) -> Result<Self, NexusError> {
        let text = std::fs::read_to_string(path)?;
        Snapshot::parse(&text).map_err(|error| match error {
            NexusError::MalformedData(reason) => {
                NexusError::MalformedData(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })
    }

    /// The snapshot shipped with this crate.
    pub fn bundled() -> Result<Self, NexusError> {
        Snapshot::parse(BUNDLED)
    }

    pub fn to_json(&self) -> Result<String, NexusError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Script form, loadable by a browser page with a plain `<script>` tag.
    pub fn to_script(&self) -> Result<String, NexusError> {
        Ok(format!("{} = {};", SCRIPT_GLOBAL, self.to_json()?))
    }

    pub fn digest(&self) -> Result<SnapshotDigest, NexusError> {
        let canonical = serde_json::to_vec(self)?;
        Ok(SnapshotDigest(blake3::hash(&canonical)))
    }
}

impl FromStr for Snapshot {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snapshot::parse(s)
    }
}

/// Content hash of a snapshot's canonical JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SnapshotDigest(blake3::Hash);

impl Display for SnapshotDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

fn strip_assignment(text: &str) -> Result<&str, NexusError> {
    let text = text.trim_start_matches('\u{feff}').trim();
    if text.starts_with('{') {
        return Ok(text);
    }

    let (target, body) = text.split_once('=').ok_or_else(|| {
        NexusError::MalformedData(
            "expected a JSON object or a `name = {...}` assignment".into(),
        )
    })?;

    let target = target.trim();
    let target = ["var ", "let ", "const "]
        .iter()
        .find_map(|keyword| target.strip_prefix(keyword))
        .unwrap_or(target)
        .trim();
    let is_path = !target.is_empty()
        && target
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(is_identifier_char));
    if !is_path {
        return Err(NexusError::MalformedData(format!(
            "unexpected assignment target `{target}`"
        )));
    }

    let body = body.trim();
    Ok(body.strip_suffix(';').unwrap_or(body).trim_end())
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
