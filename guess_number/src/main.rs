use std::io;

use anyhow::Context;
use clap::Parser;
use guess_number::{Config, Game};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, stdout is the game
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut game = Game::random(&mut config.rng());

    let stdin = io::stdin();
    let stdout = io::stdout();
    game.play(stdin.lock(), stdout.lock(), config.options())
        .context("game aborted")?;

    Ok(())
}
