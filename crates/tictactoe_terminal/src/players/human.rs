//! Human player reading moves from the terminal.

use super::Player;
use crate::console::Terminal;
use anyhow::{Result, bail};
use tictactoe_board::{Board, Position, Symbol};
use tracing::{debug, instrument};

/// Human player entering 1-based cell numbers.
pub struct HumanPlayer {
    name: String,
    show_numbers: bool,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, show_numbers: bool) -> Self {
        Self {
            name: name.into(),
            show_numbers,
        }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name, symbol = ?symbol))]
    fn choose_move(
        &mut self,
        board: &Board,
        symbol: Symbol,
        terminal: &mut dyn Terminal,
    ) -> Result<Position> {
        let cells = board.size() * board.size();
        if self.show_numbers {
            terminal.say(&board.render_numbered())?;
            terminal.say("")?;
        }

        loop {
            terminal.say(&format!("Please pick a number between 1 and {}:", cells))?;
            let Some(line) = terminal.read_line()? else {
                bail!("Input closed while waiting for a move");
            };

            let chosen = line
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=cells).contains(n))
                .and_then(|n| Position::from_index(n - 1, board.size()));
            match chosen {
                Some(position) => {
                    debug!(%position, "Human chose position");
                    return Ok(position);
                }
                None => debug!(input = %line.trim(), "Rejected move input"),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn victory_message(&self) -> String {
        "You've won!".to_string()
    }
}

/// Asks until the user enters X or O.
#[instrument(skip_all)]
pub fn prompt_symbol(terminal: &mut dyn Terminal) -> Result<Symbol> {
    terminal.say("Please pick a letter (either X or O)")?;
    loop {
        let Some(line) = terminal.read_line()? else {
            bail!("Input closed while waiting for a letter");
        };
        match line.parse::<Symbol>() {
            Ok(symbol) => return Ok(symbol),
            Err(e) => {
                debug!(error = %e, "Rejected letter");
                terminal.say("Please enter either X or O.")?;
            }
        }
    }
}
