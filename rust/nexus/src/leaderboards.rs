use std::fmt;

use serde::{
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::RankEntry;

/// A named, ordered leaderboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    pub category: String,
    pub entries: Vec<RankEntry>,
}

/// Category name to leaderboard mapping. Categories keep the order they
/// were loaded or inserted in, which is the order they are written back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboards(Vec<Leaderboard>);

impl Leaderboards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: &str) -> Option<&[RankEntry]> {
        self.0
            .iter()
            .find(|board| board.category == category)
            .map(|board| board.entries.as_slice())
    }

    /// Insert or replace the leaderboard for `category`. A replaced
    /// category keeps its original position.
    pub fn insert(&mut self, category: impl Into<String>, entries: Vec<RankEntry>) {
        let category = category.into();
        match self.0.iter_mut().find(|board| board.category == category) {
            Some(board) => board.entries = entries,
            None => self.0.push(Leaderboard { category, entries }),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|board| board.category.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Leaderboard> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Leaderboards {
    type Item = &'a Leaderboard;
    type IntoIter = std::slice::Iter<'a, Leaderboard>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Leaderboards {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for board in &self.0 {
            map.serialize_entry(&board.category, &board.entries)?;
        }
        map.end()
    }
}

struct LeaderboardsVisitor;

impl<'de> Visitor<'de> for LeaderboardsVisitor {
    type Value = Leaderboards;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of category names to ranked entries")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut boards = Vec::with_capacity(access.size_hint().unwrap_or(4));

        while let Some((category, entries)) = access.next_entry::<String, Vec<RankEntry>>()? {
            if boards
                .iter()
                .any(|board: &Leaderboard| board.category == category)
            {
                return Err(de::Error::custom(format!(
                    "duplicate leaderboard category `{category}`"
                )));
            }
            boards.push(Leaderboard { category, entries });
        }

        Ok(Leaderboards(boards))
    }
}

impl<'de> Deserialize<'de> for Leaderboards {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(LeaderboardsVisitor)
    }
}
