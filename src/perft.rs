// Game-tree counting using apply/undo on a single board (no cloning)
use crate::board::{Board, Side};
use crate::error::GameError;

/// Positions reachable in exactly `depth` plies. Decided positions are not
/// expanded, so games that end early drop out of deeper counts.
pub fn perft(board: &mut Board, side: Side, depth: u32) -> Result<u64, GameError> {
    if depth == 0 { return Ok(1); }
    if board.outcome().is_terminal() { return Ok(0); }
    let mut nodes = 0u64;
    for cell in board.legal_moves() {
        board.apply_move(cell, side)?;
        let sub = perft(board, side.other(), depth - 1);
        board.undo_move(cell)?;
        nodes += sub?;
    }
    Ok(nodes)
}

/// Number of distinct complete games playable from this position.
pub fn count_games(board: &mut Board, side: Side) -> Result<u64, GameError> {
    if board.outcome().is_terminal() { return Ok(1); }
    let mut games = 0u64;
    for cell in board.legal_moves() {
        board.apply_move(cell, side)?;
        let sub = count_games(board, side.other());
        board.undo_move(cell)?;
        games += sub?;
    }
    Ok(games)
}
