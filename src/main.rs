use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tictacbot::board::{Board, Outcome, Side};
use tictacbot::game::{AgentKind, Game, HumanInput, HumanMove, Turn};
use tictacbot::search::SearchParams;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play tic-tac-toe against humans, a random agent or the minimax engine", long_about = None)]
struct Args {
    /// Agent for X: human, random or optimal (also 1, 2, 3)
    #[arg(long, default_value = "human")]
    x: AgentKind,

    /// Agent for O: human, random or optimal (also 1, 2, 3)
    #[arg(long, default_value = "optimal")]
    o: AgentKind,

    /// Seed for the engine's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Search the opening move instead of picking it at random
    #[arg(long)]
    full_search: bool,

    /// Starting position, nine marks of X, O or '.' in row-major order
    #[arg(long)]
    start: Option<Board>,
}

/// Reads cells 1-9 from stdin; cell 1 is the bottom-left corner.
struct StdinHuman;

impl HumanInput for StdinHuman {
    fn choose_cell(&mut self, _board: &Board, side: Side) -> Result<HumanMove> {
        let stdin = io::stdin();
        loop {
            print!("{side}'s turn [Choose a cell between 1-9]: >>> ");
            io::stdout().flush()?;

            let mut input = String::new();
            // EOF ends the game the same way as typing quit
            if stdin.lock().read_line(&mut input)? == 0 { return Ok(HumanMove::Quit); }
            let input = input.trim();
            if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") { return Ok(HumanMove::Quit); }

            match input.parse::<usize>() {
                Ok(n) if (1..=9).contains(&n) => return Ok(HumanMove::Cell(n - 1)),
                _ => println!("Invalid entry"),
            }
        }
    }

    fn rejected(&mut self, cell: usize, _board: &Board) {
        println!("Invalid. Cell {} is taken.", cell + 1);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = SearchParams { random_opening: !args.full_search, seed: args.seed };
    let mut game = match args.start {
        Some(board) => Game::from_board(board, args.x, args.o, params),
        None => Game::new(args.x, args.o, params),
    };
    let mut human = StdinHuman;

    println!("X: {}, O: {}", args.x, args.o);
    while !game.outcome().is_terminal() {
        println!("------------");
        print!("{}", game.board());
        if game.step(&mut human)? == Turn::Quit {
            println!("\nGame closed");
            return Ok(());
        }
    }

    println!("------------");
    print!("{}", game.board());
    match game.outcome() {
        Outcome::Win(side) => println!("{side} won"),
        Outcome::Tie => println!("TIE"),
        Outcome::InProgress => {}
    }
    Ok(())
}
