/// Errors raised by the board, the search engine and agent parsing.
///
/// All of these are contract violations by the caller (or, for `Internal`,
/// by the engine itself). None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move at cell {cell}: {reason}")]
    InvalidMove { cell: usize, reason: &'static str },

    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    #[error("internal search error: {0}")]
    Internal(String),

    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_move_display() {
        let err = GameError::InvalidMove { cell: 4, reason: "cell is occupied" };
        assert_eq!(err.to_string(), "invalid move at cell 4: cell is occupied");
    }

    #[test]
    fn internal_display() {
        let err = GameError::Internal("depth exhausted at 0".to_string());
        assert_eq!(err.to_string(), "internal search error: depth exhausted at 0");
    }
}
