//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, prompt_symbol};

use crate::console::Terminal;
use anyhow::Result;
use tictactoe_board::{Board, Position, Symbol};

/// Trait for players that can make moves.
pub trait Player {
    /// Picks the next cell for `symbol`.
    ///
    /// The returned position is on the board but may be occupied; the game
    /// loop rejects it and asks again.
    fn choose_move(
        &mut self,
        board: &Board,
        symbol: Symbol,
        terminal: &mut dyn Terminal,
    ) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Line printed before this player's turn, if any.
    fn turn_banner(&self) -> Option<String> {
        None
    }

    /// Line printed when this player wins.
    fn victory_message(&self) -> String {
        format!("{} has won!", self.name())
    }
}
