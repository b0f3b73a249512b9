//! Winning lines.
//!
//! Every board of size N has `2N + 2` axes, generated once in a fixed order:
//! one vertical per column (left to right), one horizontal per row (top to
//! bottom), the descending diagonal and finally the ascending diagonal. The
//! order is the tie-break when several axes are complete at once.

use crate::Position;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, instrument};

lazy_static! {
    static ref AXIS_CACHE: Mutex<HashMap<usize, Arc<[Axis]>>> = Mutex::new(HashMap::new());
}

/// Direction of an axis, which decides its strikethrough glyph.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Orientation {
    /// A single column.
    Vertical,
    /// A single row.
    Horizontal,
    /// Top-left to bottom-right.
    Descending,
    /// Bottom-left to top-right.
    Ascending,
}

impl Orientation {
    /// Glyph drawn over each cell of a winning axis with this orientation.
    pub fn strikethrough(self) -> char {
        match self {
            Orientation::Vertical => '|',
            Orientation::Horizontal => '-',
            Orientation::Descending => '\\',
            Orientation::Ascending => '/',
        }
    }
}

/// One straight line of cells that wins when fully held by one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Axis {
    orientation: Orientation,
    positions: Vec<Position>,
}

impl Axis {
    /// Direction of this axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells of this axis in order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Whether the axis runs through `position`.
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

/// Returns the axes for `size`, generating them on first use.
///
/// Every board of the same size shares the one list.
pub fn shared(size: usize) -> Arc<[Axis]> {
    let mut cache = AXIS_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(size)
        .or_insert_with(|| {
            debug!(size, "Generating axes");
            generate(size).into()
        })
        .clone()
}

/// Builds every axis for a board of `size`, in generation order.
#[instrument]
pub fn generate(size: usize) -> Vec<Axis> {
    let mut axes = Vec::with_capacity(size * 2 + 2);
    for column in 0..size {
        let cells = (0..size).map(|row| Position::new(column, row)).collect();
        axes.push(Axis::new(Orientation::Vertical, cells));
    }
    for row in 0..size {
        let cells = (0..size).map(|column| Position::new(column, row)).collect();
        axes.push(Axis::new(Orientation::Horizontal, cells));
    }
    let descending = (0..size).map(|i| Position::new(i, i)).collect();
    axes.push(Axis::new(Orientation::Descending, descending));
    let ascending = (0..size).map(|i| Position::new(size - 1 - i, i)).collect();
    axes.push(Axis::new(Orientation::Ascending, ascending));
    axes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_axis_count_and_length() {
        for size in 1..7 {
            let axes = generate(size);
            assert_eq!(axes.len(), size * 2 + 2);
            for axis in &axes {
                let distinct: HashSet<_> = axis.positions().iter().collect();
                assert_eq!(distinct.len(), size);
                assert!(axis.positions().iter().all(|p| p.is_within(size)));
            }
        }
    }

    #[test]
    fn test_orientation_follows_generation_order() {
        let axes = generate(4);
        let orientations: Vec<_> = axes.iter().map(Axis::orientation).collect();
        assert_eq!(&orientations[0..4], &[Orientation::Vertical; 4]);
        assert_eq!(&orientations[4..8], &[Orientation::Horizontal; 4]);
        assert_eq!(orientations[8], Orientation::Descending);
        assert_eq!(orientations[9], Orientation::Ascending);
    }

    #[test]
    fn test_ascending_diagonal_cells() {
        let axes = generate(3);
        assert_eq!(
            axes[7].positions(),
            &[Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_rows_and_columns_cover_every_cell_once() {
        let size = 5;
        let axes = generate(size);
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let mut seen = HashSet::new();
            for axis in axes.iter().filter(|a| a.orientation() == orientation) {
                for position in axis.positions() {
                    assert!(seen.insert(*position), "{position} covered twice");
                }
            }
            assert_eq!(seen.len(), size * size);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate(3), generate(3));
    }

    #[test]
    fn test_shared_axes_reused_per_size() {
        let a = shared(6);
        let b = shared(6);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(&*a, generate(6).as_slice());
        assert!(!Arc::ptr_eq(&a, &shared(7)));
    }

    #[test]
    fn test_strikethrough_glyphs() {
        assert_eq!(Orientation::Vertical.strikethrough(), '|');
        assert_eq!(Orientation::Horizontal.strikethrough(), '-');
        assert_eq!(Orientation::Descending.strikethrough(), '\\');
        assert_eq!(Orientation::Ascending.strikethrough(), '/');
    }
}
