//! Errors raised by board operations and the opponent heuristic.

use crate::Position;

/// Error that can occur when reading, mutating or playing on a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The input is neither of the two playable marks.
    #[display("Invalid symbol: {:?}", _0)]
    InvalidSymbol(String),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    OccupiedCell(Position),

    /// The position lies outside the board.
    #[display("Position {} is outside a {}x{} board", position, size, size)]
    OutOfBounds {
        /// Requested position.
        position: Position,
        /// Board size.
        size: usize,
    },

    /// Boards must have at least one cell.
    #[display("Invalid board size: {}", _0)]
    InvalidSize(usize),

    /// No empty cell remains.
    #[display("Board full")]
    BoardFull,
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_boxes_as_error_without_source() {
        let err: Box<dyn Error + Send + Sync> = BoardError::InvalidSymbol("Z".to_string()).into();
        assert_eq!(err.to_string(), "Invalid symbol: \"Z\"");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = BoardError::OutOfBounds {
            position: Position::new(3, 0),
            size: 3,
        };
        assert_eq!(err.to_string(), "Position (3, 0) is outside a 3x3 board");
    }
}
