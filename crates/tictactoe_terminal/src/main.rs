//! tictactoe - play against the computer in a terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_terminal::{Cli, Console, Game, GameConfig, init_tracing, prompt_symbol};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;
    let config = cli.apply(config);
    config.validate()?;
    init_tracing(config.log_level());

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config).context("Failed to render config")?);
        return Ok(());
    }

    let mut terminal = Console::new(io::stdin().lock(), io::stdout());
    let human_symbol = match cli.symbol {
        Some(symbol) => symbol,
        None => prompt_symbol(&mut terminal)?,
    };
    info!(%human_symbol, size = *config.size(), "Configured game");

    let mut game = Game::from_config(&config, human_symbol, terminal)?;
    let status = game.run()?;
    info!(%status, "Game finished");
    Ok(())
}
