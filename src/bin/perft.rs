//! Perft divide from the command line.
//!
//! `cargo run --release --bin perft -- <depth> [<FEN>] ["<move> <move> ..."]`
//!
//! Prints one `<move> <count>` line per root move, a blank line, then the total,
//! so the output can be diffed against another engine's divide.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chessy::game_state::chess_rules::STARTING_POSITION_FEN;
use chessy::move_generation::perft::perft_from_moves;

#[derive(Parser, Debug)]
#[command(name = "perft")]
#[command(about = "Count leaf nodes of the legal move tree, split by root move")]
struct Args {
    /// Plies to search below the root
    depth: u8,

    /// Root position in FEN
    #[arg(default_value = STARTING_POSITION_FEN)]
    fen: String,

    /// Space separated moves played from the FEN before counting
    #[arg(default_value = "")]
    moves: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let moves: Vec<&str> = args.moves.split_whitespace().collect();
    let lines = perft_from_moves(&args.fen, args.depth, &moves)
        .with_context(|| format!("perft {} from {:?} after {:?}", args.depth, args.fen, args.moves))?;

    let mut total = 0u64;
    for (text, count) in &lines {
        println!("{text} {count}");
        total += count;
    }
    println!("\n{total}");
    Ok(())
}
