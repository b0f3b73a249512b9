//! Tic-tac-toe board model.
//!
//! This crate holds the pure game core: a square [`Board`] of any size with
//! precomputed winning [`Axis`] lines, a text renderer that can strike
//! through a winning line, and a shallow heuristic opponent.
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Board, Position, Symbol};
//!
//! let mut board = Board::default();
//! for i in 0..3 {
//!     board.place(Position::new(i, i), Symbol::X)?;
//! }
//! assert!(board.has_won(Symbol::X));
//! assert_eq!(
//!     board.render_with_win(Symbol::X).as_deref(),
//!     Some("| \\ |   |   |\n+---+---+---+\n|   | \\ |   |\n+---+---+---+\n|   |   | \\ |"),
//! );
//! # Ok::<(), tictactoe_board::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod axis;
mod board;
mod error;
pub mod opponent;
mod position;
mod render;
mod symbol;

pub use axis::{Axis, Orientation};
pub use board::{Board, DEFAULT_SIZE, MAX_SIZE};
pub use error::BoardError;
pub use opponent::choose_move;
pub use position::Position;
pub use symbol::Symbol;
