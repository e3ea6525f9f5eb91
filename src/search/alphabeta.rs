use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Side, NUM_CELLS};
use crate::error::GameError;
use crate::search::eval::{terminal_score, SCORE_INF, TIE_SCORE};
use crate::search::noise;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Play a random cell instead of searching when the board is empty.
    pub random_opening: bool,
    /// Fixed RNG seed; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self { Self { random_opening: true, seed: None } }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub cell: Option<usize>,
    pub score: i32,
    pub nodes: u64,
}

pub struct SearchEngine {
    params: SearchParams,
    rng: SmallRng,
    pub(crate) nodes: u64,
}

impl Default for SearchEngine {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl SearchEngine {
    pub fn new(params: SearchParams) -> Self {
        let rng = match params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { params, rng, nodes: 0 }
    }

    pub fn params(&self) -> SearchParams { self.params }

    pub fn set_random_opening(&mut self, on: bool) { self.params.random_opening = on; }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn random_move(&mut self, board: &Board) -> Result<usize, GameError> {
        noise::choose_uniform(board.legal_moves(), &mut self.rng)
            .ok_or(GameError::InvalidState("no legal moves to choose from"))
    }

    /// Minimax-optimal cell for `side`, lowest index among equal scores.
    ///
    /// The board is borrowed mutably for the duration of the search and is
    /// left exactly as it was handed in, on success and on error.
    pub fn best_move(&mut self, board: &mut Board, side: Side) -> Result<SearchResult, GameError> {
        if board.outcome().is_terminal() {
            return Err(GameError::InvalidState("position is already decided"));
        }
        if board.legal_moves().is_empty() {
            return Err(GameError::InvalidState("no legal moves to search"));
        }
        if side != board.side_to_move() {
            return Err(GameError::InvalidState("side is not the one to move"));
        }
        if self.params.random_opening && board.empty_count() == NUM_CELLS {
            let cell = self.random_move(board)?;
            self.nodes = 0;
            debug!("opening bypass: random cell {cell}");
            return Ok(SearchResult { cell: Some(cell), score: TIE_SCORE, nodes: 0 });
        }
        // One more than the empty cells so a win on the last cell still scores 1.
        let depth = board.empty_count() as u32 + 1;
        self.search(board, side, depth)
    }

    /// Full-window minimax from `side`'s turn. `depth` must be at least one
    /// more than the deepest terminal position and may not exceed
    /// `empty_count() + 1`; either violation is an `Internal` error.
    pub fn search(&mut self, board: &mut Board, side: Side, depth: u32) -> Result<SearchResult, GameError> {
        let bound = board.empty_count() as u32 + 1;
        if depth > bound {
            return Err(GameError::Internal(format!("depth {depth} exceeds remaining-cell bound {bound}")));
        }
        self.nodes = 0;
        let (cell, score) = self.minimax(board, side, depth, -SCORE_INF, SCORE_INF)?;
        debug!("search side={side} depth={depth} cell={cell:?} score={score} nodes={}", self.nodes);
        Ok(SearchResult { cell, score, nodes: self.nodes })
    }

    fn minimax(&mut self, board: &mut Board, side: Side, depth: u32, mut alpha: i32, mut beta: i32) -> Result<(Option<usize>, i32), GameError> {
        if depth == 0 {
            return Err(GameError::Internal("depth exhausted before reaching a decided position".to_string()));
        }
        self.nodes += 1;
        if let Some(score) = terminal_score(board.outcome(), depth) { return Ok((None, score)); }

        let maximizing = side == Side::X;
        let mut best_cell = None;
        let mut best_score = if maximizing { -SCORE_INF } else { SCORE_INF };

        for cell in board.legal_moves() {
            board.apply_move(cell, side)?;
            let child = self.minimax(board, side.other(), depth - 1, alpha, beta);
            board.undo_move(cell)?;
            let (_, score) = child?;

            if (maximizing && score > best_score) || (!maximizing && score < best_score) {
                best_score = score;
                best_cell = Some(cell);
            }
            if maximizing { alpha = alpha.max(score); } else { beta = beta.min(score); }
            if beta <= alpha { break; }
        }
        Ok((best_cell, best_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SearchEngine {
        SearchEngine::new(SearchParams { random_opening: false, seed: Some(1) })
    }

    #[test]
    fn nodes_are_counted_per_search() {
        let mut b: Board = "XO.XO....".parse().unwrap();
        let mut e = engine();
        let r = e.best_move(&mut b, Side::X).unwrap();
        assert!(r.nodes > 0);
        assert_eq!(e.nodes(), r.nodes);
    }

    #[test]
    fn bypass_reports_zero_nodes() {
        let mut b = Board::new();
        let mut e = SearchEngine::new(SearchParams { random_opening: true, seed: Some(3) });
        let r = e.best_move(&mut b, Side::X).unwrap();
        assert_eq!(r.nodes, 0);
        assert_eq!(r.score, TIE_SCORE);
        assert!(r.cell.map_or(false, |c| c < NUM_CELLS));
    }

    #[test]
    fn seeded_random_moves_repeat() {
        let b: Board = "X...O....".parse().unwrap();
        let mut e1 = SearchEngine::new(SearchParams { random_opening: true, seed: Some(99) });
        let mut e2 = SearchEngine::new(SearchParams { random_opening: true, seed: Some(99) });
        for _ in 0..20 {
            assert_eq!(e1.random_move(&b).unwrap(), e2.random_move(&b).unwrap());
        }
    }
}
