// Tic-tac-toe engine: board model, minimax alpha-beta search, turn loop
pub mod arena;
pub mod board;
pub mod error;
pub mod game;
pub mod perft;
pub mod search;

pub use board::{Board, Outcome, Side};
pub use error::GameError;
pub use search::{SearchEngine, SearchParams, SearchResult};
