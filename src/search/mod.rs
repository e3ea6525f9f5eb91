pub mod alphabeta;
pub mod eval;
pub mod noise;

pub use alphabeta::{SearchEngine, SearchParams, SearchResult};
