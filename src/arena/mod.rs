use anyhow::{bail, Context, Result};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Outcome, Side};
use crate::game::{AgentKind, Game, GameRecord, Unattended};
use crate::search::SearchParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaParams {
    pub games: usize,
    pub x: AgentKind,
    pub o: AgentKind,
    pub seed: u64,
    pub random_opening: bool,
    pub threads: usize,
}

impl Default for ArenaParams {
    fn default() -> Self {
        Self { games: 100, x: AgentKind::OptimalAgent, o: AgentKind::RandomAgent, seed: 42, random_opening: true, threads: 1 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
}

/// Play `params.games` unattended games. Game `i` seeds its engine with
/// `seed ^ i`, so results do not depend on the thread count.
pub fn play_games(params: &ArenaParams) -> Result<Vec<GameRecord>> {
    play_games_with(params, |_| {})
}

/// Like `play_games`, calling `on_done` with each finished record (from worker threads).
pub fn play_games_with<F>(params: &ArenaParams, on_done: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Sync,
{
    if params.x == AgentKind::Human || params.o == AgentKind::Human {
        bail!("arena games are unattended: human seats are not allowed");
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(params.threads.max(1))
        .build()
        .context("building arena thread pool")?;
    pool.install(|| {
        (0..params.games).into_par_iter().map(|gi| -> Result<GameRecord> {
            let search = SearchParams { random_opening: params.random_opening, seed: Some(params.seed ^ gi as u64) };
            let mut game = Game::new(params.x, params.o, search);
            let record = game.play(&mut Unattended).with_context(|| format!("arena game {gi}"))?;
            debug!("game={} outcome={:?} moves={:?}", gi, record.outcome, record.moves);
            on_done(&record);
            Ok(record)
        }).collect()
    })
}

pub fn summarize(records: &[GameRecord]) -> ArenaSummary {
    let mut s = ArenaSummary { games: records.len(), ..ArenaSummary::default() };
    for r in records {
        match r.outcome {
            Outcome::Win(Side::X) => s.x_wins += 1,
            Outcome::Win(Side::O) => s.o_wins += 1,
            Outcome::Tie => s.ties += 1,
            Outcome::InProgress => {}
        }
    }
    s
}
