//! Play against the engine from a terminal.
//!
//! `cargo run --release -- --opponent minimax --depth 4`

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use chessy::engines::engine_minimax::MinimaxEngine;
use chessy::engines::engine_random::RandomEngine;
use chessy::engines::engine_trait::{Engine, GoParams};
use chessy::game::{GameOutcome, GameSession};
use chessy::game_state::chess_rules::STARTING_POSITION_FEN;
use chessy::search::minimax::DEFAULT_SEARCH_DEPTH;
use chessy::utils::long_algebraic::move_to_text;
use chessy::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Minimax,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "chessy")]
#[command(about = "Play chess against a fixed-depth alpha-beta engine")]
struct Args {
    /// Starting position in FEN
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Search depth for the minimax opponent
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: u8,

    /// Engine playing the other side
    #[arg(short, long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Write the game record here when the game ends
    #[arg(long)]
    pgn: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut session = GameSession::from_fen(&args.fen)
        .with_context(|| format!("could not parse starting FEN {:?}", args.fen))?;
    let mut engine: Box<dyn Engine> = match args.opponent {
        Opponent::Minimax => Box::new(MinimaxEngine::with_depth(args.depth)),
        Opponent::Random => Box::new(RandomEngine::new()),
    };
    let params = GoParams {
        depth: Some(args.depth),
    };

    let human = session.current().side_to_move();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}\n", render_game_state(session.current()));
        if session.outcome() != GameOutcome::Ongoing {
            break;
        }

        print!("Enter move: ");
        io::stdout().flush().context("flushing prompt")?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading move from stdin")?;
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }
        if let Err(err) = session.play_text(&line) {
            println!("{err}");
            println!("Enter moves in from-to form, e.g. e2e4; append q, r, b or n to promote, e.g. e7e8q");
            continue;
        }

        println!("\n{}\n", render_game_state(session.current()));
        println!("{}", session.current().get_fen());
        if session.outcome() != GameOutcome::Ongoing {
            break;
        }

        let output = session
            .play_engine(engine.as_mut(), &params)
            .with_context(|| format!("{} failed to move", engine.name()))?;
        for info in &output.info_lines {
            tracing::info!("{info}");
        }
        if let Some(key) = output.best_move {
            println!("{} plays {}", engine.name(), move_to_text(&key));
        }
    }

    match session.outcome() {
        GameOutcome::Checkmate { winner } if winner == human => println!("You win :-)"),
        GameOutcome::Checkmate { .. } => println!("You lost :-("),
        GameOutcome::Stalemate => println!("Stalemate."),
        GameOutcome::Ongoing => println!("Game abandoned."),
    }

    if let Some(path) = &args.pgn {
        let record = session.to_pgn("Human", engine.name());
        fs::write(path, record).with_context(|| format!("writing PGN to {}", path.display()))?;
    }

    Ok(())
}
