use std::num::NonZeroU32;

use nexus::{Leaderboards, RankEntry};
use rand::Rng;

use crate::catalog::{RankSeed, LEADERBOARD_SEEDS};

const TOP_SCORE: f64 = 99.9;
const SCORE_STEP: f64 = 0.5;
const SCORE_JITTER: f64 = 0.1;

/// Rank seeds in the order given. Each step down the table costs half a
/// point, with a little noise so captures differ.
pub fn score_leaderboard<R>(seeds: &[RankSeed], rng: &mut R) -> Vec<RankEntry>
where
    R: Rng + ?Sized,
{
    seeds
        .iter()
        .enumerate()
        .map(|(position, seed)| {
            let score = TOP_SCORE - position as f64 * SCORE_STEP
                + rng.gen_range(-SCORE_JITTER..=SCORE_JITTER);
            RankEntry {
                rank: NonZeroU32::MIN.saturating_add(position as u32),
                name: seed.name.to_owned(),
                desc: seed.desc.to_owned(),
                url: seed.url.to_owned(),
                score: format!("{score:.1}"),
            }
        })
        .collect()
}

pub fn build_leaderboards<R>(rng: &mut R) -> Leaderboards
where
    R: Rng + ?Sized,
{
    let mut boards = Leaderboards::new();
    for (category, seeds) in LEADERBOARD_SEEDS {
        boards.insert(*category, score_leaderboard(seeds, rng));
    }
    boards
}
