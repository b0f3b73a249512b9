//! Cell coordinates.

use serde::{Deserialize, Serialize};

/// A cell coordinate, 0-indexed from the top-left corner.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("({}, {})", column, row)]
pub struct Position {
    /// Column, left to right.
    pub column: usize,
    /// Row, top to bottom.
    pub row: usize,
}

impl Position {
    /// Converts a 0-based row-major index into a position on a board of `size`.
    ///
    /// Returns `None` when the index lies past the last cell.
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        let cells = size.checked_mul(size)?;
        if index >= cells {
            return None;
        }
        Some(Self::new(index % size, index / size))
    }

    /// Converts back to the 0-based row-major index.
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.column
    }

    /// Whether the position lies on a board of `size`.
    pub fn is_within(self, size: usize) -> bool {
        self.column < size && self.row < size
    }
}
