use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};

use crate::EngineConfig;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Harvest the feeds and write a fresh snapshot
    Refresh(RefreshArgs),
    /// Load a data file and report what it contains
    Check {
        /// Path to a `data.js` or JSON snapshot
        path: PathBuf,
    },
}

#[derive(Args)]
pub struct RefreshArgs {
    /// Where to write the snapshot
    #[arg(short, long, env = "NEXUS_OUT", default_value = "data.js")]
    pub out: PathBuf,

    /// Skip harvesting and use only the built-in catalog
    #[arg(long)]
    pub offline: bool,

    /// Number of news items to top up to
    #[arg(long, env = "NEXUS_TARGET_NEWS", default_value_t = 40)]
    pub target: usize,

    /// Request timeout in seconds
    #[arg(long, env = "NEXUS_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout: u64,

    /// Seed for leaderboard score noise
    #[arg(long)]
    pub seed: Option<u64>,
}

impl From<RefreshArgs> for EngineConfig {
    fn from(value: RefreshArgs) -> Self {
        EngineConfig {
            out: value.out,
            offline: value.offline,
            target_news: value.target,
            request_timeout: Duration::from_secs(value.timeout),
            seed: value.seed,
            ..EngineConfig::default()
        }
    }
}
