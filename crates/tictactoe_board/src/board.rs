//! The board: a square grid of symbols plus its precomputed axes.

use crate::axis::{self, Axis};
use crate::{BoardError, Position, Symbol};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Size used when none is given.
pub const DEFAULT_SIZE: usize = 3;

/// Largest supported side length.
pub const MAX_SIZE: usize = 99;

/// Square tic-tac-toe board of arbitrary size.
///
/// Boards are mutated in place. Lookahead works on a [`Clone`], which copies
/// the cells; the axis list is shared by every board of the same size, so
/// probing never aliases the real game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Symbol>,
    axes: Arc<[Axis]>,
}

impl Board {
    /// Creates an empty board of `size` x `size` cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is zero or above
    /// [`MAX_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self::build(size))
    }

    fn build(size: usize) -> Self {
        Self {
            size,
            cells: vec![Symbol::Empty; size * size],
            axes: axis::shared(size),
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Every winning line, in generation order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Returns the symbol at the given cell, or `None` outside the board.
    pub fn get(&self, column: usize, row: usize) -> Option<Symbol> {
        self.symbol_at(Position::new(column, row))
    }

    /// Returns the symbol at `position`, or `None` outside the board.
    pub fn symbol_at(&self, position: Position) -> Option<Symbol> {
        if !position.is_within(self.size) {
            return None;
        }
        self.cells.get(position.to_index(self.size)).copied()
    }

    /// Replaces the symbol at the given cell, whatever it held before.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for cells outside the board.
    pub fn set(&mut self, column: usize, row: usize, symbol: Symbol) -> Result<(), BoardError> {
        self.set_at(Position::new(column, row), symbol)
    }

    /// Replaces the symbol at `position`, whatever it held before.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for positions outside the board.
    pub fn set_at(&mut self, position: Position, symbol: Symbol) -> Result<(), BoardError> {
        if !position.is_within(self.size) {
            return Err(BoardError::OutOfBounds {
                position,
                size: self.size,
            });
        }
        let index = position.to_index(self.size);
        self.cells[index] = symbol;
        Ok(())
    }

    /// Places a mark on an empty cell.
    ///
    /// This is the checked move used by players; [`Board::set_at`] overwrites
    /// unconditionally.
    ///
    /// # Errors
    ///
    /// - [`BoardError::InvalidSymbol`] when `symbol` is [`Symbol::Empty`]
    /// - [`BoardError::OutOfBounds`] for positions outside the board
    /// - [`BoardError::OccupiedCell`] when the cell already holds a mark
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, position: Position, symbol: Symbol) -> Result<(), BoardError> {
        if !symbol.is_mark() {
            return Err(BoardError::InvalidSymbol(symbol.to_string()));
        }
        match self.symbol_at(position) {
            None => Err(BoardError::OutOfBounds {
                position,
                size: self.size,
            }),
            Some(Symbol::Empty) => {
                debug!(%position, %symbol, "Placing mark");
                self.set_at(position, symbol)
            }
            Some(_) => Err(BoardError::OccupiedCell(position)),
        }
    }

    /// Checks if a cell is on the board and unmarked.
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.symbol_at(position) == Some(Symbol::Empty)
    }

    /// True when no cell holds [`Symbol::Empty`].
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Symbol::Empty)
    }

    /// Unmarked cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|&position| self.is_empty_at(position))
            .collect()
    }

    /// Every cell position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size * size).map(move |index| Position::new(index % size, index / size))
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> {
        self.cells.chunks(self.size)
    }

    /// Returns the first axis, in generation order, fully held by `symbol`.
    ///
    /// Each axis is abandoned at its first mismatching cell. [`Symbol::Empty`]
    /// never wins.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn winning_axis(&self, symbol: Symbol) -> Option<&Axis> {
        if !symbol.is_mark() {
            return None;
        }
        let found = self.axes.iter().find(|axis| {
            axis.positions()
                .iter()
                .all(|&position| self.symbol_at(position) == Some(symbol))
        });
        if let Some(axis) = found {
            debug!(orientation = %axis.orientation(), "Found winning axis");
        }
        found
    }

    /// Whether `symbol` holds a complete axis.
    pub fn has_won(&self, symbol: Symbol) -> bool {
        self.winning_axis(symbol).is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::build(DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Orientation;
    use strum::IntoEnumIterator;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (column, c) in line.chars().enumerate() {
                let symbol = match c {
                    'X' => Symbol::X,
                    'O' => Symbol::O,
                    _ => Symbol::Empty,
                };
                board.set(column, row, symbol).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        for size in 1..6 {
            let board = Board::new(size).unwrap();
            assert_eq!(board.empty_positions().len(), size * size);
            assert!(!board.is_full());
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Board::new(0), Err(BoardError::InvalidSize(0)));
    }

    #[test]
    fn test_oversized_boards_rejected() {
        assert!(Board::new(MAX_SIZE).is_ok());
        assert_eq!(
            Board::new(MAX_SIZE + 1),
            Err(BoardError::InvalidSize(MAX_SIZE + 1))
        );
        assert_eq!(
            Board::new(1usize << 33),
            Err(BoardError::InvalidSize(1usize << 33))
        );
        assert_eq!(
            Board::new(usize::MAX),
            Err(BoardError::InvalidSize(usize::MAX))
        );
    }

    #[test]
    fn test_boards_of_same_size_share_axes() {
        let a = Board::new(3).unwrap();
        let b = Board::default();
        assert!(std::ptr::eq(a.axes(), b.axes()));
        assert!(!std::ptr::eq(a.axes(), Board::new(4).unwrap().axes()));
    }

    #[test]
    fn test_set_changes_only_target_cell() {
        let mut board = Board::default();
        board.set(2, 1, Symbol::O).unwrap();
        for position in board.positions() {
            let expected = if position == Position::new(2, 1) {
                Symbol::O
            } else {
                Symbol::Empty
            };
            assert_eq!(board.symbol_at(position), Some(expected));
        }
    }

    #[test]
    fn test_set_overwrites() {
        let mut board = Board::default();
        board.set(0, 0, Symbol::X).unwrap();
        board.set(0, 0, Symbol::O).unwrap();
        assert_eq!(board.get(0, 0), Some(Symbol::O));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::default();
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert_eq!(
            board.set(3, 0, Symbol::X),
            Err(BoardError::OutOfBounds {
                position: Position::new(3, 0),
                size: 3
            })
        );
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::default();
        let center = Position::new(1, 1);
        board.place(center, Symbol::X).unwrap();
        assert_eq!(
            board.place(center, Symbol::O),
            Err(BoardError::OccupiedCell(center))
        );
        assert_eq!(board.symbol_at(center), Some(Symbol::X));
    }

    #[test]
    fn test_place_rejects_empty_symbol() {
        let mut board = Board::default();
        assert!(matches!(
            board.place(Position::new(0, 0), Symbol::Empty),
            Err(BoardError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new(4).unwrap();
        for symbol in Symbol::iter() {
            assert!(!board.has_won(symbol), "{symbol:?} won an empty board");
        }
    }

    #[test]
    fn test_empty_never_wins() {
        let board = board_from(&["XX ", "OO ", "   "]);
        assert!(!board.has_won(Symbol::Empty));
    }

    #[test]
    fn test_descending_diagonal_win() {
        let board = board_from(&["X  ", " X ", "  X"]);
        let axis = board.winning_axis(Symbol::X).unwrap();
        assert_eq!(axis.orientation(), Orientation::Descending);
        assert!(!board.has_won(Symbol::O));
    }

    #[test]
    fn test_each_orientation_detected() {
        let cases = [
            (["O  ", "O  ", "O  "], Orientation::Vertical),
            (["   ", "OOO", "   "], Orientation::Horizontal),
            (["O  ", " O ", "  O"], Orientation::Descending),
            (["  O", " O ", "O  "], Orientation::Ascending),
        ];
        for (rows, orientation) in cases {
            let board = board_from(&rows);
            let axis = board.winning_axis(Symbol::O).unwrap();
            assert_eq!(axis.orientation(), orientation, "{rows:?}");
        }
    }

    #[test]
    fn test_first_axis_in_generation_order_wins_tie() {
        // Column 0 and row 0 are both complete; verticals come first.
        let board = board_from(&["XXX", "XO ", "XO "]);
        let axis = board.winning_axis(Symbol::X).unwrap();
        assert_eq!(axis.orientation(), Orientation::Vertical);
        assert_eq!(axis.positions()[0], Position::new(0, 0));
    }

    #[test]
    fn test_partial_line_is_not_a_win() {
        let board = board_from(&["XX ", "   ", "   "]);
        assert!(!board.has_won(Symbol::X));
    }

    #[test]
    fn test_tie_board() {
        let board = board_from(&["XOX", "XOO", "OXX"]);
        assert!(board.is_full());
        assert!(!board.has_won(Symbol::X));
        assert!(!board.has_won(Symbol::O));
    }

    #[test]
    fn test_clone_does_not_alias() {
        let board = Board::default();
        let mut probe = board.clone();
        probe.set(1, 1, Symbol::X).unwrap();
        assert_eq!(board.get(1, 1), Some(Symbol::Empty));
        assert!(Arc::ptr_eq(&board.axes, &probe.axes));
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1).unwrap();
        assert_eq!(board.axes().len(), 4);
        board.place(Position::new(0, 0), Symbol::O).unwrap();
        assert!(board.is_full());
        assert!(board.has_won(Symbol::O));
    }
}
