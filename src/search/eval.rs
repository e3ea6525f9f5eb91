use crate::board::{Outcome, Side};

// Window bounds; negating either stays in range.
pub const SCORE_INF: i32 = i32::MAX;
pub const TIE_SCORE: i32 = 0;

/// Score of a decided position from X's point of view, scaled by the depth
/// still remaining so that quicker wins and slower losses rank higher.
/// `None` while the game is still in progress.
pub fn terminal_score(outcome: Outcome, depth: u32) -> Option<i32> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Tie => Some(TIE_SCORE),
        Outcome::Win(Side::X) => Some(depth as i32),
        Outcome::Win(Side::O) => Some(-(depth as i32)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_are_signed_by_winner() {
        assert_eq!(terminal_score(Outcome::Win(Side::X), 4), Some(4));
        assert_eq!(terminal_score(Outcome::Win(Side::O), 4), Some(-4));
        assert_eq!(terminal_score(Outcome::Tie, 7), Some(TIE_SCORE));
        assert_eq!(terminal_score(Outcome::InProgress, 7), None);
    }
}
