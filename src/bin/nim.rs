//! Command-line competition runner.
//!
//! ```text
//! nim <PLAYER1> <PLAYER2> <ROUNDS> [--config board.toml] [--seed N]
//! ```
//!
//! Players are given by code (1 Random, 2 Heuristic, 3 Smart, 4 Human) or
//! by name.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use misere_nim::core::{BoardConfig, CompetitionConfig, GameRng};
use misere_nim::game::{Competition, PromptedInput, RoundObserver, Silent, TextTranscript};
use misere_nim::strategy::PlayerKind;

#[derive(Debug, Parser)]
#[command(name = "nim", version, about = "Misère Nim competitions on rows of sticks")]
struct Cli {
    /// First player: 1 Random, 2 Heuristic, 3 Smart, 4 Human
    player1: PlayerKind,

    /// Second player, same codes as the first
    player2: PlayerKind,

    /// Number of rounds to play
    rounds: u32,

    /// TOML file with the board layout; the pyramid is used if missing
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible random players
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let board = match &cli.config {
        Some(path) => BoardConfig::load_or_default(path)
            .with_context(|| format!("loading board layout from {}", path.display()))?,
        None => BoardConfig::default(),
    };
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), rows = ?board.rows, "starting competition");

    let display = cli.player1.is_human() || cli.player2.is_human();
    let config = CompetitionConfig::new()
        .with_board(board)
        .with_rounds(cli.rounds)
        .with_display_messages(display);
    let mut competition = Competition::new(cli.player1, cli.player2, config, rng);

    println!("{}", competition.banner());

    let stdin = io::stdin();
    let mut input = PromptedInput::new(stdin.lock(), io::stdout());
    let mut transcript = TextTranscript::new(io::stdout());
    let mut silent = Silent;
    let observer: &mut dyn RoundObserver = if competition.config().display_messages {
        &mut transcript
    } else {
        &mut silent
    };

    let result = competition.play(&mut input, observer)?;
    println!("{result}");
    io::stdout().flush()?;

    Ok(())
}
