use rayon::prelude::*;
use std::time::Instant;
use tictacbot::board::Board;
use tictacbot::GameError;
use tictacbot::perft::{count_games, perft};

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the tic-tac-toe board")]
struct Args {
    /// Depth in plies
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board as nine marks (X, O, '.') or "empty"
    #[arg(value_name = "BOARD", default_value = "empty")]
    board: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Also count complete games from the position
    #[arg(long, default_value_t = false)]
    games: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    env_logger::init();

    let args = Args::parse();
    let base = if args.board == "empty" { Board::new() } else { args.board.parse::<Board>()? };
    let side = base.side_to_move();

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = pool.install(|| -> anyhow::Result<u64> {
        if args.threads <= 1 || args.depth == 0 || base.outcome().is_terminal() {
            let mut b = base;
            return Ok(perft(&mut b, side, args.depth)?);
        }
        let roots: Vec<usize> = base.legal_moves().collect();
        let per_root: Result<Vec<u64>, GameError> = roots.par_iter().map(|&cell| -> Result<u64, GameError> {
            let mut b = base;
            b.apply_move(cell, side)?;
            perft(&mut b, side.other(), args.depth - 1)
        }).collect();
        Ok(per_root?.into_iter().sum())
    })?;
    let dt = t0.elapsed().as_secs_f64();

    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    if args.games {
        let mut b = base;
        println!("games: {}", count_games(&mut b, side)?);
    }
    Ok(())
}
