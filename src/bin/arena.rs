use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tictacbot::arena::{play_games_with, summarize, ArenaParams};
use tictacbot::game::AgentKind;

#[derive(Parser, Debug)]
#[command(name = "tictacbot-arena", about = "Play many unattended games between two agent kinds")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,
    /// Agent for X: random or optimal
    #[arg(long, default_value = "optimal")]
    x: AgentKind,
    /// Agent for O: random or optimal
    #[arg(long, default_value = "random")]
    o: AgentKind,
    /// Base seed; game i uses seed ^ i
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Worker threads
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Search the opening move instead of picking it at random
    #[arg(long, default_value_t = false)]
    full_search: bool,
    /// Optional: write the summary as JSON to this path
    #[arg(long)]
    json_out: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = ArenaParams {
        games: a.games,
        x: a.x,
        o: a.o,
        seed: a.seed,
        random_opening: !a.full_search,
        threads: a.threads,
    };
    eprintln!("Playing {} games (x={}, o={}, threads={}, seed={})", a.games, a.x, a.o, a.threads, a.seed);

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games ({elapsed})")?);
    let t0 = Instant::now();
    let records = play_games_with(&params, |_| pb.inc(1))?;
    pb.finish_and_clear();
    let elapsed = t0.elapsed().as_secs_f64();

    let summary = summarize(&records);
    println!("summary: games={} x_wins={} o_wins={} ties={} time={:.3}s",
        summary.games, summary.x_wins, summary.o_wins, summary.ties, elapsed);

    if let Some(path) = a.json_out.as_deref() {
        let payload = serde_json::json!({
            "params": params,
            "summary": summary,
            "time_s": elapsed,
        });
        if let Err(e) = std::fs::write(path, serde_json::to_string_pretty(&payload)?) {
            eprintln!("warn: failed to write json_out: {}", e);
        }
    }
    Ok(())
}
