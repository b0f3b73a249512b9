//! Text rendering of a board.
//!
//! A 3x3 board renders as
//!
//! ```text
//! | X | O |   |
//! +---+---+---+
//! |   | X |   |
//! +---+---+---+
//! | O |   |   |
//! ```
//!
//! Separator lines are derived from the cell line above them, so dashes
//! always line up with the cells and junctions with the bars.

use crate::{Board, Symbol};
use std::fmt;
use tracing::{debug, instrument};

const BAR: char = '|';
const DASH: char = '-';
const JUNCTION: char = '+';

impl Board {
    /// Renders the grid with one-character symbols.
    pub fn render(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .rows()
            .map(|row| row.iter().map(Symbol::to_string).collect())
            .collect();
        render_grid(&rows, 1)
    }

    /// Renders the grid with each cell showing its 1-based row-major index.
    ///
    /// Fields widen uniformly when the board holds more than nine cells.
    pub fn render_numbered(&self) -> String {
        let size = self.size();
        let width = (size * size).to_string().len();
        let rows: Vec<Vec<String>> = (0..size)
            .map(|row| {
                (0..size)
                    .map(|column| (row * size + column + 1).to_string())
                    .collect()
            })
            .collect();
        render_grid(&rows, width)
    }

    /// Renders the grid with the winning axis of `symbol` struck through.
    ///
    /// Cell `(column, row)` sits on line `row * 2`, character `column * 4 + 2`.
    /// Returns `None` when `symbol` has not won.
    #[instrument(skip(self), fields(size = self.size()))]
    pub fn render_with_win(&self, symbol: Symbol) -> Option<String> {
        let axis = self.winning_axis(symbol)?;
        let glyph = axis.orientation().strikethrough();
        debug!(orientation = %axis.orientation(), %glyph, "Overlaying strikethrough");

        let mut lines: Vec<Vec<char>> = self
            .render()
            .lines()
            .map(|line| line.chars().collect())
            .collect();
        for position in axis.positions() {
            let line = &mut lines[position.row * 2];
            line[position.column * 4 + 2] = glyph;
        }

        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.into_iter().collect())
            .collect();
        Some(lines.join("\n"))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Lays out labelled cells, each centered in a field of `width` plus padding.
fn render_grid(rows: &[Vec<String>], width: usize) -> String {
    let mut lines = Vec::with_capacity(rows.len() * 2);
    for (index, row) in rows.iter().enumerate() {
        let mut line = String::new();
        for label in row {
            line.push(BAR);
            line.push_str(&format!(" {label:^width$} "));
        }
        line.push(BAR);

        if index + 1 < rows.len() {
            let separator = separator_for(&line);
            lines.push(line);
            lines.push(separator);
        } else {
            lines.push(line);
        }
    }
    lines.join("\n")
}

fn separator_for(line: &str) -> String {
    line.chars()
        .map(|c| if c == BAR { JUNCTION } else { DASH })
        .collect()
}
