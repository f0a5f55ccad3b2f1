use std::{collections::HashSet, fmt::Display};

use crate::{NewsItem, RankEntry, Snapshot};

/// A record that breaks one of the conventions the feed is generated
/// with. Findings never stop a snapshot from loading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Finding {
    DuplicateNewsId {
        id: String,
    },
    MalformedTime {
        id: String,
        time: String,
    },
    RankOutOfSequence {
        category: String,
        position: usize,
        rank: u32,
    },
    NonNumericScore {
        category: String,
        rank: u32,
        score: String,
    },
    ScoreIncreases {
        category: String,
        rank: u32,
        score: String,
        previous: String,
    },
}

impl Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::DuplicateNewsId { id } => write!(f, "news: id `{id}` is used more than once"),
            Finding::MalformedTime { id, time } => {
                write!(f, "news {id}: time `{time}` is not shaped MM-DD HH:MM")
            }
            Finding::RankOutOfSequence {
                category,
                position,
                rank,
            } => write!(
                f,
                "ranks.{category}: entry {position} has rank {rank}, expected {}",
                position + 1
            ),
            Finding::NonNumericScore {
                category,
                rank,
                score,
            } => write!(f, "ranks.{category} #{rank}: score `{score}` is not a number"),
            Finding::ScoreIncreases {
                category,
                rank,
                score,
                previous,
            } => write!(
                f,
                "ranks.{category} #{rank}: score {score} is above the previous {previous}"
            ),
        }
    }
}

impl Snapshot {
    /// Check the ordering and uniqueness conventions of every collection.
    pub fn audit(&self) -> Vec<Finding> {
        let mut findings = audit_news(&self.news);

        for board in &self.ranks {
            findings.extend(audit_leaderboard(&board.category, &board.entries));
        }

        findings
    }
}

fn audit_news(news: &[NewsItem]) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut seen = HashSet::with_capacity(news.len());
    let mut reported = HashSet::new();

    for item in news {
        if !seen.insert(item.id.as_str()) && reported.insert(item.id.as_str()) {
            findings.push(Finding::DuplicateNewsId {
                id: item.id.clone(),
            });
        }

        if !is_display_time(&item.time) {
            findings.push(Finding::MalformedTime {
                id: item.id.clone(),
                time: item.time.clone(),
            });
        }
    }

    findings
}

fn audit_leaderboard(category: &str, entries: &[RankEntry]) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut previous: Option<(f64, &str)> = None;

    for (position, entry) in entries.iter().enumerate() {
        let rank = entry.rank.get();
        if rank as usize != position + 1 {
            findings.push(Finding::RankOutOfSequence {
                category: category.to_owned(),
                position,
                rank,
            });
        }

        let Some(score) = entry.score_value() else {
            findings.push(Finding::NonNumericScore {
                category: category.to_owned(),
                rank,
                score: entry.score.clone(),
            });
            continue;
        };

        if let Some((previous_score, previous_text)) = previous {
            if score > previous_score {
                findings.push(Finding::ScoreIncreases {
                    category: category.to_owned(),
                    rank,
                    score: entry.score.clone(),
                    previous: previous_text.to_owned(),
                });
            }
        }
        previous = Some((score, entry.score.as_str()));
    }

    findings
}

/// `MM-DD HH:MM` with each field in range. Day is not checked against
/// the month.
pub fn is_display_time(time: &str) -> bool {
    let bytes = time.as_bytes();
    if bytes.len() != 11 || bytes[2] != b'-' || bytes[5] != b' ' || bytes[8] != b':' {
        return false;
    }

    let field = |start: usize| -> Option<u32> {
        let pair = &bytes[start..start + 2];
        if pair.iter().all(u8::is_ascii_digit) {
            Some(u32::from(pair[0] - b'0') * 10 + u32::from(pair[1] - b'0'))
        } else {
            None
        }
    };

    matches!(
        (field(0), field(3), field(6), field(9)),
        (Some(1..=12), Some(1..=31), Some(0..=23), Some(0..=59))
    )
}

#[cfg(test)]
pub mod tests {
    use anyhow::Result;

    use super::{is_display_time, Finding};
    use crate::Snapshot;

    #[test]
    fn it_finds_nothing_wrong_with_the_bundled_snapshot() -> Result<()> {
        let snapshot = Snapshot::bundled()?;
        assert_eq!(snapshot.audit(), Vec::<Finding>::new());

        for board in &snapshot.ranks {
            let ranks: Vec<u32> = board.entries.iter().map(|entry| entry.rank.get()).collect();
            let expected: Vec<u32> = (1..=board.entries.len() as u32).collect();
            assert_eq!(ranks, expected, "category {}", board.category);
        }
        Ok(())
    }

    #[test]
    fn it_reports_broken_conventions() -> Result<()> {
        let snapshot = Snapshot::parse(
            r#"{
                "news": [
                    {"id":"0","src":"a","type":"APP","title":"t","desc":"d","url":"u","time":"01-23 10:07"},
                    {"id":"0","src":"b","type":"DEV","title":"t","desc":"d","url":"u","time":"13-01 10:07"}
                ],
                "ranks": {"LLM": [
                    {"rank":1,"name":"a","desc":"d","url":"u","score":"90.0"},
                    {"rank":3,"name":"b","desc":"d","url":"u","score":"95.5"},
                    {"rank":4,"name":"c","desc":"d","url":"u","score":"soon"}
                ]},
                "prompts": []
            }"#,
        )?;

        assert_eq!(
            snapshot.audit(),
            vec![
                Finding::DuplicateNewsId { id: "0".into() },
                Finding::MalformedTime {
                    id: "0".into(),
                    time: "13-01 10:07".into()
                },
                Finding::RankOutOfSequence {
                    category: "LLM".into(),
                    position: 1,
                    rank: 3
                },
                Finding::ScoreIncreases {
                    category: "LLM".into(),
                    rank: 3,
                    score: "95.5".into(),
                    previous: "90.0".into()
                },
                Finding::RankOutOfSequence {
                    category: "LLM".into(),
                    position: 2,
                    rank: 4
                },
                Finding::NonNumericScore {
                    category: "LLM".into(),
                    rank: 4,
                    score: "soon".into()
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn it_checks_display_time_shape() {
        assert!(is_display_time("01-23 10:07"));
        assert!(is_display_time("12-31 23:59"));
        assert!(!is_display_time("00-10 10:07"));
        assert!(!is_display_time("01-23 24:00"));
        assert!(!is_display_time("1-23 10:07"));
        assert!(!is_display_time("2025-01-23"));
        assert!(!is_display_time("01-2３ 10:07"));
    }
}
