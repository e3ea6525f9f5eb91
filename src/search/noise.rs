use rand::Rng;
use rand::rngs::SmallRng;

use crate::board::MoveList;

/// Pick one of `moves` uniformly. `None` when there is nothing to pick.
pub fn choose_uniform(moves: MoveList, rng: &mut SmallRng) -> Option<usize> {
    if moves.is_empty() { return None; }
    let idx = rng.gen_range(0..moves.len());
    moves.into_iter().nth(idx)
}
