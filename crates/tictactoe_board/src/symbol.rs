//! Cell markers.

use crate::BoardError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Marker held by a single board cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// Unmarked cell.
    #[default]
    #[display(" ")]
    Empty,
    /// Player X.
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Symbol {
    /// Returns the opposing mark, or `None` for [`Symbol::Empty`].
    pub fn opposite(self) -> Option<Self> {
        match self {
            Symbol::X => Some(Symbol::O),
            Symbol::O => Some(Symbol::X),
            Symbol::Empty => None,
        }
    }

    /// Whether this is one of the two playable marks.
    pub fn is_mark(self) -> bool {
        self != Symbol::Empty
    }
}

impl FromStr for Symbol {
    type Err = BoardError;

    /// Parses `"X"` or `"O"`, ignoring case and surrounding whitespace.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "X" => Ok(Symbol::X),
            "O" => Ok(Symbol::O),
            _ => Err(BoardError::InvalidSymbol(s.to_string())),
        }
    }
}
