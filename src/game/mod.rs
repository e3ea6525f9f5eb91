//! Turn loop: alternates sides, asks each side's agent for a cell, applies
//! it and checks the outcome after every move.

mod player;

pub use player::{AgentKind, Player};

use anyhow::{bail, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome, Side};
use crate::error::GameError;
use crate::search::{SearchEngine, SearchParams};

/// A human's answer to a move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanMove {
    Cell(usize),
    Quit,
}

/// Source of moves for `AgentKind::Human` sides. The cell returned does not
/// have to be legal; the game checks it and asks again.
pub trait HumanInput {
    fn choose_cell(&mut self, board: &Board, side: Side) -> Result<HumanMove>;

    /// Called with a cell the game refused, before asking again.
    fn rejected(&mut self, _cell: usize, _board: &Board) {}
}

/// Input for games without a human seat. Asking it for a move is an error.
pub struct Unattended;

impl HumanInput for Unattended {
    fn choose_cell(&mut self, _board: &Board, side: Side) -> Result<HumanMove> {
        bail!("side {side} is human but no input is attached")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Moved(usize),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub outcome: Outcome,
    pub quit: bool,
}

pub struct Game {
    board: Board,
    players: [Player; 2],
    to_move: Side,
    engine: SearchEngine,
    moves: Vec<usize>,
}

impl Game {
    pub fn new(x: AgentKind, o: AgentKind, params: SearchParams) -> Self {
        Self {
            board: Board::new(),
            players: [Player::new(Side::X, x), Player::new(Side::O, o)],
            to_move: Side::X,
            engine: SearchEngine::new(params),
            moves: Vec::new(),
        }
    }

    /// Continue from an existing position; the side to move follows the mark counts.
    pub fn from_board(board: Board, x: AgentKind, o: AgentKind, params: SearchParams) -> Self {
        let mut game = Self::new(x, o, params);
        game.to_move = board.side_to_move();
        game.board = board;
        game
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn to_move(&self) -> Side { self.to_move }

    pub fn moves(&self) -> &[usize] { &self.moves }

    pub fn outcome(&self) -> Outcome { self.board.outcome() }

    pub fn player(&self, side: Side) -> &Player {
        match side { Side::X => &self.players[0], Side::O => &self.players[1] }
    }

    pub fn set_name(&mut self, side: Side, name: impl Into<String>) {
        let idx = match side { Side::X => 0, Side::O => 1 };
        self.players[idx].name = name.into();
    }

    /// Play one move for the side on turn.
    pub fn step(&mut self, human: &mut dyn HumanInput) -> Result<Turn> {
        if self.outcome().is_terminal() {
            bail!(GameError::InvalidState("game is already over"));
        }
        let side = self.to_move;
        let kind = self.player(side).kind;
        let cell = match kind {
            AgentKind::Human => match self.human_cell(human, side)? {
                Some(c) => c,
                None => {
                    info!("{side} quit after {} moves", self.moves.len());
                    return Ok(Turn::Quit);
                }
            },
            AgentKind::RandomAgent => self.engine.random_move(&self.board)?,
            AgentKind::OptimalAgent => {
                let res = self.engine.best_move(&mut self.board, side)?;
                res.cell.ok_or_else(|| GameError::Internal("search returned no cell for a live position".to_string()))?
            }
        };
        self.board.apply_move(cell, side)?;
        self.moves.push(cell);
        info!("{} ({}) plays cell {}", self.player(side).name, kind, cell);
        self.to_move = side.other();
        Ok(Turn::Moved(cell))
    }

    fn human_cell(&mut self, human: &mut dyn HumanInput, side: Side) -> Result<Option<usize>> {
        loop {
            match human.choose_cell(&self.board, side)? {
                HumanMove::Quit => return Ok(None),
                HumanMove::Cell(c) if self.board.legal_moves().contains(c) => return Ok(Some(c)),
                HumanMove::Cell(c) => {
                    warn!("rejected cell {c} for {side}: not a legal move");
                    human.rejected(c, &self.board);
                }
            }
        }
    }

    /// Run the loop until the game is decided or a human quits.
    pub fn play(&mut self, human: &mut dyn HumanInput) -> Result<GameRecord> {
        while !self.outcome().is_terminal() {
            if self.step(human)? == Turn::Quit { return Ok(self.record(true)); }
        }
        Ok(self.record(false))
    }

    pub fn record(&self, quit: bool) -> GameRecord {
        GameRecord { moves: self.moves.clone(), outcome: self.outcome(), quit }
    }
}
