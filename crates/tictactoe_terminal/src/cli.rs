//! Command-line interface for tictactoe.

use crate::config::{FirstPlayer, GameConfig};
use clap::Parser;
use std::path::PathBuf;
use tictactoe_board::Symbol;

/// Terminal tic-tac-toe against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    pub size: Option<usize>,

    /// Your mark (X or O); prompts when omitted
    #[arg(long)]
    pub symbol: Option<Symbol>,

    /// Seed for the computer's shuffling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between turns in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Let the computer move first
    #[arg(long)]
    pub computer_first: bool,

    /// Hide the numbered guide grid
    #[arg(long)]
    pub no_numbers: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Layers command-line flags over a loaded configuration.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(size) = self.size {
            config = config.with_size(size);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(delay) = self.delay_ms {
            config = config.with_turn_delay_ms(delay);
        }
        if self.computer_first {
            config = config.with_first_player(FirstPlayer::Computer);
        }
        if self.no_numbers {
            config = config.with_show_numbers(false);
        }
        config
    }
}
