//! Game loop between two players sharing one terminal.

use crate::config::{FirstPlayer, GameConfig};
use crate::console::Terminal;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use anyhow::{Context, Result};
use std::time::Duration;
use tictactoe_board::{Board, BoardError, Symbol};
use tracing::{debug, info, instrument, warn};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// A symbol completed an axis.
    #[display("{} won", _0)]
    Won(Symbol),
    /// The board filled with no winner.
    #[display("Tie")]
    Tie,
}

/// A player together with the mark they place.
pub struct Seat {
    player: Box<dyn Player>,
    symbol: Symbol,
}

impl Seat {
    /// Seats `player` with `symbol`.
    pub fn new(player: Box<dyn Player>, symbol: Symbol) -> Self {
        Self { player, symbol }
    }

    /// The mark this seat places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

/// Runs one game to completion.
pub struct Game<T> {
    board: Board,
    seats: [Seat; 2],
    terminal: T,
    turn_delay: Duration,
}

impl<T: Terminal> Game<T> {
    /// Creates a game; `first` moves first.
    pub fn new(board: Board, first: Seat, second: Seat, terminal: T, turn_delay: Duration) -> Self {
        Self {
            board,
            seats: [first, second],
            terminal,
            turn_delay,
        }
    }

    /// Builds a human-versus-computer game from configuration.
    ///
    /// The computer plays the opposite of `human_symbol`.
    #[instrument(skip(config, terminal), fields(size = *config.size()))]
    pub fn from_config(config: &GameConfig, human_symbol: Symbol, terminal: T) -> Result<Self> {
        let computer_symbol = human_symbol
            .opposite()
            .ok_or_else(|| BoardError::InvalidSymbol(human_symbol.to_string()))?;
        let board = Board::new(*config.size())?;

        let human = Seat::new(
            Box::new(HumanPlayer::new("You", *config.show_numbers())),
            human_symbol,
        );
        let computer = Seat::new(
            Box::new(ComputerPlayer::new("The computer", *config.seed())),
            computer_symbol,
        );
        let (first, second) = match config.first_player() {
            FirstPlayer::Human => (human, computer),
            FirstPlayer::Computer => (computer, human),
        };

        Ok(Self::new(
            board,
            first,
            second,
            terminal,
            Duration::from_millis(*config.turn_delay_ms()),
        ))
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The terminal the game talks to.
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Alternates turns until someone wins or the board fills.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game");
        self.show_board()?;

        let mut turn = 0;
        loop {
            let seat = &mut self.seats[turn % 2];
            let symbol = seat.symbol;
            if let Some(banner) = seat.player.turn_banner() {
                self.terminal.say(&banner)?;
            }

            let position = seat
                .player
                .choose_move(&self.board, symbol, &mut self.terminal)
                .with_context(|| format!("{} could not choose a move", seat.player.name()))?;

            match self.board.place(position, symbol) {
                Ok(()) => {}
                Err(BoardError::OccupiedCell(_)) => {
                    warn!(%position, "Cell already marked");
                    self.terminal.say("Position already marked.")?;
                    self.pause();
                    self.terminal.say("")?;
                    self.show_board()?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            debug!(%position, %symbol, turn, "Move applied");

            if let Some(overlay) = self.board.render_with_win(symbol) {
                let victory = self.seats[turn % 2].player.victory_message();
                self.pause();
                self.terminal.say(&victory)?;
                self.terminal.say(&overlay)?;
                info!(%symbol, "Game won");
                return Ok(GameStatus::Won(symbol));
            }

            self.show_board()?;
            self.pause();

            if self.board.is_full() {
                self.terminal.say("The board is full! It's a tie.")?;
                info!("Game tied");
                return Ok(GameStatus::Tie);
            }
            turn += 1;
        }
    }

    fn show_board(&mut self) -> Result<()> {
        self.terminal.say(&self.board.render())?;
        self.terminal.say("")?;
        Ok(())
    }

    fn pause(&self) {
        if !self.turn_delay.is_zero() {
            std::thread::sleep(self.turn_delay);
        }
    }
}
