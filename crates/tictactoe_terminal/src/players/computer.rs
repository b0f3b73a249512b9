//! Computer player backed by the heuristic opponent.

use super::Player;
use crate::console::Terminal;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_board::{Board, Position, Symbol, choose_move};
use tracing::{debug, instrument};

/// Computer opponent with its own random source.
pub struct ComputerPlayer {
    name: String,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player; a seed makes its choices reproducible.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name, symbol = ?symbol))]
    fn choose_move(
        &mut self,
        board: &Board,
        symbol: Symbol,
        _terminal: &mut dyn Terminal,
    ) -> Result<Position> {
        let position = choose_move(board, symbol, &mut self.rng)?;
        debug!(%position, "Computer chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn turn_banner(&self) -> Option<String> {
        Some(format!("{}'s move:", self.name))
    }
}
