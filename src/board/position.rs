use std::fmt;
use std::str::FromStr;

use super::lines::{NUM_CELLS, WIN_LINES};
use super::{Cell, Outcome, Side};
use crate::error::GameError;

/// Ascending set of empty cells. Copy it to iterate again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveList {
    mask: u16,
}

impl MoveList {
    pub fn contains(&self, cell: usize) -> bool {
        cell < NUM_CELLS && self.mask & (1 << cell) != 0
    }

    pub fn is_empty(&self) -> bool { self.mask == 0 }

    pub fn to_vec(self) -> Vec<usize> { self.collect() }
}

impl Iterator for MoveList {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.mask == 0 { return None; }
        let cell = self.mask.trailing_zeros() as usize;
        self.mask &= self.mask - 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.mask.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for MoveList {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    pub fn new() -> Self { Self::default() }

    /// Build a board from raw cells, rejecting mark counts that no game can reach.
    pub fn from_cells(cells: [Cell; NUM_CELLS]) -> Result<Self, GameError> {
        let board = Self { cells };
        let (x, o) = (board.count(Side::X), board.count(Side::O));
        if o > x || x - o > 1 {
            return Err(GameError::Parse(format!("mark counts X={x} O={o} are not reachable with X moving first")));
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[Cell; NUM_CELLS] { &self.cells }

    pub fn get(&self, cell: usize) -> Option<Cell> { self.cells.get(cell).copied() }

    pub fn count(&self, side: Side) -> usize {
        let target = side.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    pub fn is_empty(&self) -> bool { self.empty_count() == NUM_CELLS }

    /// X moves whenever both sides have placed the same number of marks.
    pub fn side_to_move(&self) -> Side {
        if self.count(Side::X) > self.count(Side::O) { Side::O } else { Side::X }
    }

    pub fn apply_move(&mut self, cell: usize, side: Side) -> Result<(), GameError> {
        match self.cells.get(cell).copied() {
            None => Err(GameError::InvalidMove { cell, reason: "cell is out of range" }),
            Some(Cell::Empty) => { self.cells[cell] = side.to_cell(); Ok(()) }
            Some(_) => Err(GameError::InvalidMove { cell, reason: "cell is occupied" }),
        }
    }

    pub fn undo_move(&mut self, cell: usize) -> Result<(), GameError> {
        match self.cells.get(cell).copied() {
            None => Err(GameError::InvalidMove { cell, reason: "cell is out of range" }),
            Some(Cell::Empty) => Err(GameError::InvalidMove { cell, reason: "cell is already empty" }),
            Some(_) => { self.cells[cell] = Cell::Empty; Ok(()) }
        }
    }

    pub fn legal_moves(&self) -> MoveList {
        let mut mask = 0u16;
        for (i, &c) in self.cells.iter().enumerate() {
            if c == Cell::Empty { mask |= 1 << i; }
        }
        MoveList { mask }
    }

    fn holds_line(&self, side: Side) -> bool {
        let target = side.to_cell();
        WIN_LINES.iter().any(|line| line.iter().all(|&i| self.cells[i] == target))
    }

    /// X lines are checked before O lines.
    pub fn outcome(&self) -> Outcome {
        for side in [Side::X, Side::O] {
            if self.holds_line(side) { return Outcome::Win(side); }
        }
        if self.legal_moves().is_empty() { Outcome::Tie } else { Outcome::InProgress }
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Nine marks in row-major order: `X`, `O`, and `.`/`-`/`_` for empty.
    /// Whitespace and `/` row separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks: Vec<char> = s.chars().filter(|c| !c.is_whitespace() && *c != '/').collect();
        if marks.len() != NUM_CELLS {
            return Err(GameError::Parse(format!("expected {NUM_CELLS} cells, found {}", marks.len())));
        }
        let mut cells = [Cell::Empty; NUM_CELLS];
        for (i, ch) in marks.into_iter().enumerate() {
            cells[i] = match ch {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '-' | '_' => Cell::Empty,
                other => return Err(GameError::Parse(format!("unexpected mark '{other}' at cell {i}"))),
            };
        }
        Board::from_cells(cells)
    }
}

impl fmt::Display for Board {
    // Row 0 is printed last so cells 1-9 line up with a numeric keypad.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..3).rev() {
            let r = &self.cells[row * 3..row * 3 + 3];
            writeln!(f, "{} {} {}", r[0].marker(), r[1].marker(), r[2].marker())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_list_iterates_ascending() {
        let b: Board = "X.O.X.O..".parse().unwrap();
        assert_eq!(b.legal_moves().to_vec(), vec![1, 3, 5, 7, 8]);
        assert_eq!(b.legal_moves().len(), 5);
    }

    #[test]
    fn move_list_restarts_by_copy() {
        let moves = Board::new().legal_moves();
        let first: Vec<usize> = moves.collect();
        let second: Vec<usize> = moves.collect();
        assert_eq!(first, second);
        assert!(moves.contains(8));
        assert!(!moves.contains(9));
    }

    #[test]
    fn side_to_move_follows_counts() {
        assert_eq!(Board::new().side_to_move(), Side::X);
        let b: Board = "X........".parse().unwrap();
        assert_eq!(b.side_to_move(), Side::O);
    }

    #[test]
    fn display_puts_row_zero_last() {
        let b: Board = "XO.......".parse().unwrap();
        assert_eq!(b.to_string(), ". . .\n. . .\nX O .\n");
    }
}
