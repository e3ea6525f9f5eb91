// 3x3 board state: cells, sides, outcomes and the fixed winning lines
mod lines;
mod position;

pub use lines::{WIN_LINES, NUM_CELLS};
pub use position::{Board, MoveList};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    pub fn other(self) -> Side {
        match self { Side::X => Side::O, Side::O => Side::X }
    }

    pub fn marker(self) -> char {
        match self { Side::X => 'X', Side::O => 'O' }
    }

    pub fn to_cell(self) -> Cell {
        match self { Side::X => Cell::X, Side::O => Cell::O }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn side(self) -> Option<Side> {
        match self { Cell::Empty => None, Cell::X => Some(Side::X), Cell::O => Some(Side::O) }
    }

    pub fn marker(self) -> char {
        match self { Cell::Empty => '.', Cell::X => 'X', Cell::O => 'O' }
    }
}

/// Result of inspecting a board. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Side),
    Tie,
}

impl Outcome {
    pub fn is_terminal(self) -> bool { self != Outcome::InProgress }

    pub fn winner(self) -> Option<Side> {
        match self { Outcome::Win(s) => Some(s), _ => None }
    }
}
