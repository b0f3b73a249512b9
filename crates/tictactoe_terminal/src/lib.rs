//! Terminal tic-tac-toe.
//!
//! A line-based front end for [`tictactoe_board`]: the human enters cell
//! numbers, the computer answers with the heuristic opponent, and the board
//! is redrawn after every move.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Console**: line I/O over any reader/writer pair
//! - **Players**: human and computer behind one [`Player`] trait
//! - **Game**: the turn loop, ending in a [`GameStatus`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod game;
mod logging;
mod players;

pub use cli::Cli;
pub use config::{ConfigError, FirstPlayer, GameConfig};
pub use console::{Console, Terminal};
pub use game::{Game, GameStatus, Seat};
pub use logging::init_tracing;
pub use players::{ComputerPlayer, HumanPlayer, Player, prompt_symbol};
