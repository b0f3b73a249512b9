//! Shallow heuristic opponent.
//!
//! Move priority:
//! 1. a cell that wins immediately,
//! 2. a cell that blocks the other side's immediate win,
//! 3. corners (shuffled), then the center, then the remaining cells (shuffled).
//!
//! Steps 1 and 2 each scan the empty cells column-major. Every winning cell
//! outranks every blocking cell. This is deliberately one-ply, not a search.

use crate::{Board, BoardError, Position, Symbol};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks the computer's next move for `symbol`.
///
/// # Errors
///
/// - [`BoardError::InvalidSymbol`] when `symbol` is [`Symbol::Empty`]
/// - [`BoardError::BoardFull`] when no empty cell remains
#[instrument(skip(board, rng), fields(size = board.size()))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    symbol: Symbol,
    rng: &mut R,
) -> Result<Position, BoardError> {
    let enemy = symbol
        .opposite()
        .ok_or_else(|| BoardError::InvalidSymbol(symbol.to_string()))?;

    if let Some(position) = find_completing_cell(board, symbol)? {
        debug!(%position, "Chose winning move");
        return Ok(position);
    }
    if let Some(position) = find_completing_cell(board, enemy)? {
        debug!(%position, "Chose blocking move");
        return Ok(position);
    }

    let position = preference_order(board.size(), rng)
        .into_iter()
        .find(|&position| board.is_empty_at(position))
        .ok_or(BoardError::BoardFull)?;
    debug!(%position, "Chose positional move");
    Ok(position)
}

/// First empty cell, column-major, where `symbol` would complete an axis.
fn find_completing_cell(board: &Board, symbol: Symbol) -> Result<Option<Position>, BoardError> {
    let size = board.size();
    for column in 0..size {
        for row in 0..size {
            let position = Position::new(column, row);
            if !board.is_empty_at(position) {
                continue;
            }
            let mut probe = board.clone();
            probe.set_at(position, symbol)?;
            if probe.has_won(symbol) {
                return Ok(Some(position));
            }
        }
    }
    Ok(None)
}

/// Static preference for boards with no decisive cell.
///
/// On 3x3 this is corners, center, edges. Larger boards keep the four
/// corners first, the center only when the size is odd, then every other cell.
fn preference_order<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<Position> {
    let max = size - 1;
    let mut corners = vec![
        Position::new(0, 0),
        Position::new(max, 0),
        Position::new(0, max),
        Position::new(max, max),
    ];
    corners.sort();
    corners.dedup();
    corners.shuffle(rng);

    let center = (size % 2 == 1)
        .then(|| Position::new(size / 2, size / 2))
        .filter(|center| !corners.contains(center));

    let mut rest: Vec<Position> = (0..size * size)
        .map(|index| Position::new(index % size, index / size))
        .filter(|position| !corners.contains(position) && Some(*position) != center)
        .collect();
    rest.shuffle(rng);

    let mut order = corners;
    order.extend(center);
    order.extend(rest);
    order
}
