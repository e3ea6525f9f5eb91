use tictacbot::board::{Board, Side};
use tictacbot::perft::{count_games, perft};

#[test]
fn perft_empty_board_all_depths() {
    let expected = [9u64, 72, 504, 3024, 15120, 54720, 148176, 200448, 127872];
    let mut b = Board::new();
    for (i, &n) in expected.iter().enumerate() {
        assert_eq!(perft(&mut b, Side::X, i as u32 + 1).unwrap(), n, "depth {}", i + 1);
    }
    assert_eq!(b, Board::new());
}

#[test]
fn complete_games_from_empty_board() {
    let mut b = Board::new();
    assert_eq!(count_games(&mut b, Side::X).unwrap(), 255_168);
    assert_eq!(b, Board::new());
}

#[test]
fn decided_positions_do_not_expand() {
    let mut won: Board = "XXXOO....".parse().unwrap();
    assert_eq!(perft(&mut won, Side::O, 0).unwrap(), 1);
    assert_eq!(perft(&mut won, Side::O, 1).unwrap(), 0);
    assert_eq!(count_games(&mut won, Side::O).unwrap(), 1);
}
