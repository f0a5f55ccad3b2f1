use std::{fmt::Display, path::Path};

use nexus::{ContentSource, Finding, SnapshotDigest};

use crate::EngineError;

/// What `nexus check` reports about a data file.
#[derive(Debug)]
pub struct CheckReport {
    pub news: usize,
    pub categories: Vec<(String, usize)>,
    pub prompts: usize,
    pub digest: SnapshotDigest,
    pub findings: Vec<Finding>,
}

/// Load the data file at `path`. Malformed data is an error; convention
/// findings are only reported.
pub fn check(path: &Path) -> Result<CheckReport, EngineError> {
    let store = ContentSource::Path(path.to_owned()).load()?;
    let snapshot = store.snapshot();

    let report = CheckReport {
        news: snapshot.news.len(),
        categories: snapshot
            .ranks
            .iter()
            .map(|board| (board.category.clone(), board.entries.len()))
            .collect(),
        prompts: snapshot.prompts.len(),
        digest: store.digest()?,
        findings: snapshot.audit(),
    };

    for finding in &report.findings {
        warn!("{}", finding);
    }

    Ok(report)
}

impl Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "news:    {}", self.news)?;
        for (category, entries) in &self.categories {
            writeln!(f, "ranks:   {category} ({entries})")?;
        }
        writeln!(f, "prompts: {}", self.prompts)?;
        writeln!(f, "digest:  {}", self.digest)?;

        if self.findings.is_empty() {
            write!(f, "no findings")
        } else {
            write!(f, "{} findings:", self.findings.len())?;
            for finding in &self.findings {
                write!(f, "\n  {finding}")?;
            }
            Ok(())
        }
    }
}
