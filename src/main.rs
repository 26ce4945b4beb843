//! gorules: a Go rules engine.
//!
//! ## Usage
//!
//! - `gorules` - Show a demo
//! - `gorules gtp` - Start a GTP server for GUI integration
//! - `gorules playout` - Play and score a random game
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gorules::board::{Board, Color};
use gorules::constants::{DEFAULT_SEED, DEFAULT_SIZE, PLAYOUT_LEN_FACTOR};
use gorules::gtp::GtpEngine;
use gorules::playout::random_playout;
use gorules::point::Point;

/// gorules: a Go rules engine
#[derive(Parser)]
#[command(name = "gorules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server on stdin/stdout
    Gtp {
        /// Initial board size
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
    },
    /// Run a short demo of captures and scoring
    Demo,
    /// Play a random game and print the final board and score
    Playout {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Random seed
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Move limit (defaults to three times the board area)
        #[arg(long)]
        max_moves: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp { size }) => {
            let mut engine = GtpEngine::new(size).context("unsupported GTP board size")?;
            engine
                .run(io::stdin().lock(), io::stdout().lock())
                .context("GTP session failed")?;
        }
        Some(Commands::Playout {
            size,
            seed,
            max_moves,
        }) => {
            let mut rng = fastrand::Rng::with_seed(seed);
            let limit = max_moves.unwrap_or(size * size * PLAYOUT_LEN_FACTOR);
            let result = random_playout(&Board::new(size), Color::Black, &mut rng, limit);
            println!("{}", result.board);
            println!(
                "{} moves, Black {} White {} ({})",
                result.moves, result.score.black, result.score.white, result.score
            );
        }
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("gorules: Go rules engine\n");

    println!("=== Capture ===");
    let board = Board::new(5)
        .play(Color::Black, Point::new(1, 2))?
        .play(Color::Black, Point::new(2, 1))?
        .play(Color::Black, Point::new(2, 3))?
        .play(Color::White, Point::new(2, 2))?;
    println!("{board}");
    let outcome = board.play_move(Color::Black, Point::new(3, 2))?;
    println!("Black at (3, 2) captures {:?}", outcome.captured);
    println!("{}", outcome.board);

    println!("=== Suicide ===");
    let outcome = outcome.board.play_move(Color::White, Point::new(2, 2))?;
    println!("White at (2, 2): suicide = {}", outcome.suicide);

    println!("\n=== Area score ===");
    let score = outcome.board.area_score();
    println!("Black {} White {} ({score})", score.black, score.white);
    Ok(())
}
