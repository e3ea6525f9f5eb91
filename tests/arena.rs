use tictacbot::arena::{play_games, summarize, ArenaParams};
use tictacbot::board::Outcome;
use tictacbot::game::AgentKind;

#[test]
fn arena_is_deterministic_by_seed() {
    let params = ArenaParams { games: 12, x: AgentKind::RandomAgent, o: AgentKind::RandomAgent, seed: 42, random_opening: true, threads: 1 };
    let g1 = play_games(&params).unwrap();
    let g2 = play_games(&ArenaParams { threads: 3, ..params.clone() }).unwrap();
    assert_eq!(g1.len(), 12);
    assert_eq!(g1, g2, "thread count must not change results");
}

#[test]
fn arena_seed_changes_games() {
    let mut params = ArenaParams { games: 8, x: AgentKind::RandomAgent, o: AgentKind::RandomAgent, seed: 100, random_opening: true, threads: 2 };
    let g1 = play_games(&params).unwrap();
    params.seed = 200;
    let g2 = play_games(&params).unwrap();
    assert_ne!(g1, g2, "different seeds should sample different games");
}

#[test]
fn optimal_pair_only_ties() {
    let params = ArenaParams { games: 10, x: AgentKind::OptimalAgent, o: AgentKind::OptimalAgent, seed: 9, random_opening: true, threads: 2 };
    let records = play_games(&params).unwrap();
    let s = summarize(&records);
    assert_eq!((s.games, s.x_wins, s.o_wins, s.ties), (10, 0, 0, 10));
    assert!(records.iter().all(|r| r.outcome == Outcome::Tie && !r.quit));
}

#[test]
fn humans_are_rejected() {
    let params = ArenaParams { x: AgentKind::Human, ..ArenaParams::default() };
    assert!(play_games(&params).is_err());
}
