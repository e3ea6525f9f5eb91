pub const NUM_CELLS: usize = 9;

/// Rows, columns, then the two diagonals, over row-major cell indices.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_is_on_a_line() {
        for cell in 0..NUM_CELLS {
            assert!(WIN_LINES.iter().any(|l| l.contains(&cell)), "cell {cell} not covered");
        }
    }

    #[test]
    fn center_is_on_four_lines() {
        assert_eq!(WIN_LINES.iter().filter(|l| l.contains(&4)).count(), 4);
    }
}
